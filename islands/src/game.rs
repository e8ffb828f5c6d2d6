use crate::{Board, Color, IllegalMove, PlayerState};

/// Which of a player's two edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    First,
    Second,
}

/// A game of Hex between White (top to bottom) and Black (left to right).
///
/// This checks moves for legality before passing them on to the [`Board`],
/// and detects when a move wins the game. The score of each player is
/// their current number of islands.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    white: PlayerState,
    black: PlayerState,
    winner: Option<Color>,
}

impl Game {
    /// Creates a game on an empty `side_length x side_length` board.
    pub fn new(side_length: usize) -> Self {
        Self {
            board: Board::new(side_length),
            white: PlayerState::default(),
            black: PlayerState::default(),
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_length(&self) -> usize {
        self.board.side_length()
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn player_state(&self, color: Color) -> &PlayerState {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn moves_made(&self, color: Color) -> usize {
        self.player_state(color).moves_made
    }

    /// Whether a stone may be placed at `(row, col)`, i.e. the hex is empty.
    ///
    /// Coordinates outside of the board are an error rather than `false`.
    pub fn can_play(&self, row: i32, col: i32) -> Result<bool, IllegalMove> {
        let (row, col) = self.checked_coords(row, col)?;
        Ok(self.board.color_of(row, col).is_none())
    }

    /// Places a stone of `color` at `(row, col)`.
    ///
    /// Returns `true` if this move connected the player's two edges, which
    /// ends the game. Every move after that is rejected.
    pub fn make_move(&mut self, row: i32, col: i32, color: Color) -> Result<bool, IllegalMove> {
        if let Some(winner) = self.winner {
            return Err(IllegalMove::GameOver { winner });
        }
        let (row, col) = self.checked_coords(row, col)?;
        if let Some(occupant) = self.board.color_of(row, col) {
            return Err(IllegalMove::Occupied { row, col, occupant });
        }

        let side_length = self.side_length();
        self.player_state_mut(color).record_move(color, row, col, side_length);
        self.board.set_color(row, col, color);

        // Only look for a crossing when one is possible at all
        let won = self.player_state(color).may_have_crossed(side_length)
            && self.connects_edges(color, self.board.cell_index(row, col));
        if won {
            self.winner = Some(color);
        }
        Ok(won)
    }

    pub fn white_score(&self) -> usize {
        self.board.island_count(Color::White)
    }

    pub fn black_score(&self) -> usize {
        self.board.island_count(Color::Black)
    }

    pub fn score(&self, color: Color) -> usize {
        self.board.island_count(color)
    }

    fn player_state_mut(&mut self, color: Color) -> &mut PlayerState {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    fn checked_coords(&self, row: i32, col: i32) -> Result<(usize, usize), IllegalMove> {
        let side_length = self.side_length();
        let in_bounds = |coord: i32| usize::try_from(coord).ok().filter(|&c| c < side_length);
        match (in_bounds(row), in_bounds(col)) {
            (Some(row), Some(col)) => Ok((row, col)),
            _ => Err(IllegalMove::OutOfBounds {
                row,
                col,
                side_length,
            }),
        }
    }

    /// Whether the group containing `cell` touches both edges of `color`.
    fn connects_edges(&self, color: Color, cell: usize) -> bool {
        let root = self.board.find(cell);
        let touches = |edge| {
            self.edge_cells(color, edge)
                .any(|edge_cell| self.board.find(edge_cell) == root)
        };
        touches(Edge::First) && touches(Edge::Second)
    }

    /// Flat indices of the hexes along one edge of `color`.
    fn edge_cells(&self, color: Color, edge: Edge) -> impl Iterator<Item = usize> {
        let n = self.side_length();
        let last = n.saturating_sub(1);
        (0..n).map(move |k| match (color, edge) {
            (Color::White, Edge::First) => k,
            (Color::White, Edge::Second) => last * n + k,
            (Color::Black, Edge::First) => k * n,
            (Color::Black, Edge::Second) => k * n + last,
        })
    }
}
