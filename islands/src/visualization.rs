use crate::Board;

/// Draws the board as a rhombus, one line per row, with the row number in front.
///
/// Every row is shifted one character to the left of the row above it,
/// so that the six neighbors of a hex are also its neighbors on screen.
/// White stones are drawn as `W`, black stones as `B` and empty hexes as `.`.
pub fn visualize_board(board: &Board) -> String {
    let n = board.side_length();
    let mut lines = Vec::with_capacity(n);
    for row in 0..n {
        let mut line = format!("{:>3} ", row);
        line += &" ".repeat(n - 1 - row);
        for col in 0..n {
            if col > 0 {
                line.push(' ');
            }
            line.push(board.color_of(row, col).map_or('.', |color| color.symbol()));
        }
        lines.push(line);
    }
    lines.join("\n")
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
