//! Command-line options and logging setup

use clap::Parser;
use directories::ProjectDirs;
use env_logger::{Env, Target, WriteStyle};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use crate::app::DEFAULT_ROUND_DURATION;
use crate::game::Board;

/// Swipe across a 4x4 grid of letters to find words before the clock runs out.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
pub struct Args {
    /// Word list to use instead of the built-in dictionary (one word per line)
    #[arg(short, long, value_name = "FILE")]
    pub words: Option<PathBuf>,

    /// Seed for the board generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Play on a fixed board, given as 16 letters in row order
    #[arg(short, long, value_name = "LETTERS", value_parser = parse_board)]
    pub board: Option<Board>,

    /// Round length in seconds
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_ROUND_DURATION,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub duration: u32,

    /// Print one generated board and exit
    #[arg(long, default_value_t = false)]
    pub print_board: bool,

    /// Enable debug messages
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Log file (defaults to wordswipe.log in the data directory)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}

fn parse_board(s: &str) -> Result<Board, String> {
    Board::from_str_letters(s).ok_or_else(|| format!("expected 16 letters, got \"{}\"", s))
}

/// Set up env_logger. The terminal UI owns the screen, so interactive runs
/// log to a file and stay silent if none can be opened.
pub fn init_logging(args: &Args, interactive: bool) {
    let default_level = if args.debug { "debug" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_level));

    if interactive {
        let Some(file) = open_log_file(args.log_file.as_deref()) else {
            return;
        };
        builder
            .target(Target::Pipe(Box::new(file)))
            .write_style(WriteStyle::Never);
    }
    builder.init();
}

fn default_log_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordswipe").map(|dirs| dirs.data_dir().join("wordswipe.log"))
}

fn open_log_file(path: Option<&Path>) -> Option<File> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
