mod game;
mod player;
pub use game::*;
pub use player::*;

pub struct Config {
    pub side_length: usize,
    pub rng: rand::rngs::StdRng,
    /// Log the final position of every game.
    pub show_boards: bool,
}
