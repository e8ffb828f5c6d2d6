use crate::Color;

/// The error type for [`Game::make_move()`](crate::Game::make_move) and
/// [`Game::can_play()`](crate::Game::can_play).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { row: i32, col: i32, side_length: usize },
    Occupied { row: usize, col: usize, occupant: Color },
    GameOver { winner: Color },
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds {
                row,
                col,
                side_length,
            } => write!(
                f,
                "Hex ({}, {}) is outside of the {}x{} board",
                row, col, side_length, side_length
            ),
            IllegalMove::Occupied { row, col, occupant } => {
                write!(f, "Hex ({}, {}) is already taken by {}", row, col, occupant)
            }
            IllegalMove::GameOver { winner } => {
                write!(f, "The game is already over, {} won", winner)
            }
        }
    }
}
