use clap::Parser;
use islands::Color;
use judge::{play_game, Config, GameResult, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Number of hexes along each side of the board
    #[arg(short = 'n', long, default_value_t = 11)]
    side_length: usize,

    /// How many games to play
    #[arg(short = 'g', long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Print the summary as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log the final position of every game
    #[arg(long, default_value_t = false)]
    show_boards: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

/// Totals over all games, indexed by white = 0, black = 1.
#[derive(Default)]
struct MatchScore {
    wins: [usize; 2],
    moves: usize,
    islands: [usize; 2],
}

impl MatchScore {
    fn add(&mut self, result: &GameResult) {
        self.wins[color_idx(result.winner)] += 1;
        self.moves += result.num_moves;
        self.islands[0] += result.white_islands;
        self.islands[1] += result.black_islands;
    }
}

#[derive(Serialize)]
struct Summary {
    side_length: usize,
    num_games: usize,
    seed: u64,
    white_wins: usize,
    black_wins: usize,
    avg_moves: f64,
    avg_white_islands: f64,
    avg_black_islands: f64,
}

impl Summary {
    fn new(side_length: usize, num_games: usize, seed: u64, score: &MatchScore) -> Self {
        let avg = |total: usize| {
            if num_games == 0 {
                0.0
            } else {
                total as f64 / num_games as f64
            }
        };
        Self {
            side_length,
            num_games,
            seed,
            white_wins: score.wins[0],
            black_wins: score.wins[1],
            avg_moves: avg(score.moves),
            avg_white_islands: avg(score.islands[0]),
            avg_black_islands: avg(score.islands[1]),
        }
    }
}

fn color_idx(color: Color) -> usize {
    match color {
        Color::White => 0,
        Color::Black => 1,
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    anyhow::ensure!(args.side_length > 0, "The side length must be at least 1");

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);

    let mut config = Config {
        side_length: args.side_length,
        rng: StdRng::seed_from_u64(seed),
        show_boards: args.show_boards,
    };
    let white = Player::new("white", Color::White);
    let black = Player::new("black", Color::Black);

    let mut match_score = MatchScore::default();
    for game_idx in 0..args.num_games {
        let result = play_game(&mut config, &white, &black)?;
        debug!(
            game_idx,
            winner = %result.winner,
            moves = result.num_moves,
            white_islands = result.white_islands,
            black_islands = result.black_islands
        );
        match_score.add(&result);
    }

    let summary = Summary::new(args.side_length, args.num_games, seed, &match_score);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "End result on a {n}x{n} board after {} games:\n- {} wins by {}\n- {} wins by {}\n- {:.1} moves per game\n- {:.2} white and {:.2} black islands at the end of a game",
            summary.num_games,
            summary.white_wins,
            white.name,
            summary.black_wins,
            black.name,
            summary.avg_moves,
            summary.avg_white_islands,
            summary.avg_black_islands,
            n = summary.side_length,
        );
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(format),
        )
        .with(filter)
        .init();
}
