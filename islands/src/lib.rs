pub use board::*;
pub use color::*;
pub use errors::*;
pub use game::*;
pub use player_state::*;
pub use union_find::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod color;
mod errors;
mod game;
mod player_state;
mod union_find;
mod visualization;
