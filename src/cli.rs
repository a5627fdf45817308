use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use crate::app::App;
use crate::core::difficulty::Difficulty;
use crate::core::score::{ScoreStore, DEFAULT_SCORE_FILE};
use crate::{prompt, tui};

#[derive(Parser, Debug)]
#[command(name = "numterm")]
#[command(about = "🔢 Guess the secret number before you run out of lives")]
#[command(version)]
pub struct Cli {
    /// Difficulty of the first round
    #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
    pub difficulty: Difficulty,

    /// File holding the best score
    #[arg(short, long, default_value = DEFAULT_SCORE_FILE)]
    pub score_file: PathBuf,

    /// Write logs to this file (the game screen owns the terminal)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use line-based prompts instead of the full-screen interface
    #[arg(long)]
    pub plain: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Screen,
    Prompt,
}

/// Runtime settings derived from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub difficulty: Difficulty,
    pub score_file: PathBuf,
    pub mode: Mode,
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            difficulty: cli.difficulty,
            score_file: cli.score_file.clone(),
            mode: if cli.plain { Mode::Prompt } else { Mode::Screen },
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

/// Installs a file logger when `--log-file` was given.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(cli.log_level())
        .init();
    Ok(())
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = Config::from(&cli);
    info!(?config, "starting");

    let mut app = App::new(config.difficulty, ScoreStore::open(&config.score_file));
    match config.mode {
        Mode::Screen => tui::run(&mut app),
        Mode::Prompt => prompt::run(&mut app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["numterm"]);
        let config = Config::from(&cli);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.score_file, PathBuf::from("highscore.txt"));
        assert_eq!(config.mode, Mode::Screen);
        assert_eq!(cli.log_level(), Level::INFO);
    }

    #[test]
    fn flags() {
        let cli = Cli::parse_from([
            "numterm",
            "--difficulty",
            "hard",
            "--score-file",
            "/tmp/best.txt",
            "-vv",
            "--plain",
        ]);
        let config = Config::from(&cli);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.score_file, PathBuf::from("/tmp/best.txt"));
        assert_eq!(config.mode, Mode::Prompt);
        assert_eq!(cli.log_level(), Level::TRACE);
    }

    #[test]
    fn rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["numterm", "-d", "extreme"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
