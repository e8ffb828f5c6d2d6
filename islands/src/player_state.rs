use crate::Color;

/// What the game tracks about one player between moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub moves_made: usize,
    /// Whether the player has a stone on the top row (White) or left column (Black).
    pub played_on_first_edge: bool,
    /// Whether the player has a stone on the bottom row (White) or right column (Black).
    pub played_on_second_edge: bool,
}

impl PlayerState {
    /// Records a stone placed by the player of `color` at `(row, col)`.
    pub fn record_move(&mut self, color: Color, row: usize, col: usize, side_length: usize) {
        // White crosses from top to bottom, black from left to right
        let coord = match color {
            Color::White => row,
            Color::Black => col,
        };
        if coord == 0 {
            self.played_on_first_edge = true;
        }
        if coord + 1 == side_length {
            self.played_on_second_edge = true;
        }
        self.moves_made += 1;
    }

    /// Whether the player's stones could span the board at all.
    ///
    /// Each step between adjacent hexes advances at most one row or column, so
    /// a crossing needs a stone on both edges and at least `side_length` stones.
    pub fn may_have_crossed(&self, side_length: usize) -> bool {
        self.played_on_first_edge && self.played_on_second_edge && self.moves_made >= side_length
    }
}
