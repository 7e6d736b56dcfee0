//! Gomoku engine command line
//!
//! `gomoku eval` prints the evaluation of a fixed reference position and
//! `gomoku move` picks a move for a board read from a file or stdin.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use gomoku::config::{load_config, load_from_path};
use gomoku::{AIEngine, Board, EngineConfig, Pos, Side};

/// Arguments to the engine
#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Five-in-a-row move selection engine")]
struct Cli {
    /// TOML config file (defaults to $GOMOKU_CONFIG or ./gomoku.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Search depth in plies
    #[arg(short, long, global = true)]
    depth: Option<u32>,
    /// Board height
    #[arg(long, global = true)]
    height: Option<usize>,
    /// Board width
    #[arg(long, global = true)]
    width: Option<usize>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the value of the reference position
    Eval {
        /// Side to move in the evaluated position
        #[arg(short, long, default_value = "black")]
        side: ArgSide,
    },
    /// Choose a move; prints "row col", or "-1 -1" when there is none
    Move {
        /// The side the engine plays
        #[arg(short, long)]
        side: ArgSide,
        /// Board file (`.` empty, `X` black, `O` white); stdin when omitted
        #[arg(short, long)]
        board: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum ArgSide {
    White,
    Black,
}

impl ArgSide {
    fn to_side(self) -> Side {
        match self {
            ArgSide::White => Side::White,
            ArgSide::Black => Side::Black,
        }
    }
}

/// Stones of the reference position: `(row, col, signed side)`.
const REFERENCE_STONES: [(usize, usize, i8); 9] = [
    (14, 25, 1),
    (15, 25, 1),
    (16, 24, 1),
    (16, 25, -1),
    (16, 26, 1),
    (17, 24, -1),
    (18, 22, 1),
    (18, 23, -1),
    (19, 22, -1),
];

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = match &cli.config {
        Some(path) => load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => load_config(),
    };
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    Ok(config)
}

fn reference_board(config: &EngineConfig) -> Result<Board> {
    let mut board = Board::new(config.board.height, config.board.width);
    for &(row, col, value) in &REFERENCE_STONES {
        let pos = board.pos_at(row as i32, col as i32).with_context(|| {
            format!(
                "reference position needs at least a 20x27 board, have {}x{}",
                board.height(),
                board.width()
            )
        })?;
        let side = Side::from_signed(value).context("bad reference stone")?;
        board.place_stone(pos, side);
    }
    Ok(board)
}

fn read_board(path: Option<&PathBuf>) -> Result<Board> {
    let text = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading board {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("reading board from stdin")?;
            text
        }
    };
    Ok(text.parse::<Board>()?)
}

fn format_move(mov: Option<Pos>) -> String {
    match mov {
        Some(pos) => format!("{} {}", pos.row, pos.col),
        None => "-1 -1".to_string(),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let mut config = resolve_config(&cli)?;

    match &cli.command {
        Command::Eval { side } => {
            let engine = AIEngine::new(config)?;
            let board = reference_board(engine.config())?;
            let value = engine.position_value(&board, side.to_side())?;
            println!("{:.5}", value);
        }
        Command::Move { side, board } => {
            let board = read_board(board.as_ref())?;
            if cli.height.is_some() || cli.width.is_some() {
                if (board.height(), board.width()) != (config.board.height, config.board.width) {
                    bail!(
                        "board file is {}x{}, but --height/--width ask for {}x{}",
                        board.height(),
                        board.width(),
                        config.board.height,
                        config.board.width
                    );
                }
            } else {
                debug!(height = board.height(), width = board.width(), "board size taken from input");
                config.board.height = board.height();
                config.board.width = board.width();
            }

            let engine = AIEngine::new(config)?;
            let result = engine.next_move_with_stats(&board, side.to_side())?;
            info!(
                search_type = ?result.search_type,
                nodes = result.nodes,
                time_ms = result.time_ms,
                "move chosen"
            );
            println!("{}", format_move(result.best_move));
        }
    }
    Ok(())
}
