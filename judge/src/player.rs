use islands::{Color, Game};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// A player that places its stones on random empty hexes.
pub struct Player {
    pub name: String,
    pub color: Color,
}

impl Player {
    pub fn new(name: &str, color: Color) -> Self {
        Self {
            name: String::from(name),
            color,
        }
    }

    /// Picks one of the empty hexes uniformly at random.
    ///
    /// Returns `None` if the board is full.
    pub fn choose_move(&self, game: &Game, rng: &mut StdRng) -> Option<(usize, usize)> {
        let n = game.side_length();
        let board = game.board();
        let empty_hexes: Vec<(usize, usize)> = (0..n)
            .flat_map(|row| (0..n).map(move |col| (row, col)))
            .filter(|&(row, col)| board.color_of(row, col).is_none())
            .collect();
        empty_hexes.choose(rng).copied()
    }
}
