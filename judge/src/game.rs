use islands::{Color, Game};
use serde::Serialize;
use tracing::{info, trace};

use crate::player::Player;
use crate::Config;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Color,
    /// Moves by both players, including the winning one.
    pub num_moves: usize,
    pub white_islands: usize,
    pub black_islands: usize,
}

/// Plays one game between two random players, White first.
///
/// Returns an error only if a player makes an illegal move or the board
/// fills up without a winner, which means there's a bug somewhere.
pub fn play_game(
    config: &mut Config,
    white: &Player,
    black: &Player,
) -> anyhow::Result<GameResult> {
    anyhow::ensure!(
        white.color == Color::White && black.color == Color::Black,
        "Players must be given in the order white, black"
    );

    let mut game = Game::new(config.side_length);
    let players = [white, black];
    let mut current_player_idx = 0;
    let mut num_moves = 0;

    loop {
        let player = players[current_player_idx];
        let Some((row, col)) = player.choose_move(&game, &mut config.rng) else {
            anyhow::bail!("The board is full, but nobody has won");
        };
        trace!(player = %player.name, row, col, "Move");
        let won = game.make_move(i32::try_from(row)?, i32::try_from(col)?, player.color)?;
        num_moves += 1;
        if won {
            break;
        }
        current_player_idx = 1 - current_player_idx;
    }

    if config.show_boards {
        info!("Final position:\n{}", game.board());
    }

    let winner = players[current_player_idx].color;
    debug_assert_eq!(game.winner(), Some(winner));
    Ok(GameResult {
        winner,
        num_moves,
        white_islands: game.white_score(),
        black_islands: game.black_score(),
    })
}
