use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::locale::Locale;
use crate::ranking::TieBreak;

#[derive(Parser, Debug)]
#[command(name = "hato-points", author, version, about = "hato-points level and rank status")]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalOptions {
    /// JSON level table to use instead of the built-in one (or set HATO_LEVELS_PATH)
    #[arg(long, global = true)]
    pub levels: Option<PathBuf>,

    /// How participants with equal points are ranked
    #[arg(long, global = true, value_enum, default_value_t = TieBreak::ParticipantId)]
    pub tie_break: TieBreak,

    /// Caption language
    #[arg(long, global = true, value_enum, default_value_t = Locale::English)]
    pub locale: Locale,

    /// SQLite database path (or set DATABASE_PATH)
    #[arg(long, global = true)]
    pub database: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the participants table
    Init {
        /// Drop existing participants first
        #[arg(long)]
        reset: bool,
    },
    /// Register a new participant
    Register {
        id: String,
        name: String,
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        points: i64,
    },
    /// Overwrite a participant's points
    SetPoints {
        id: String,
        #[arg(allow_negative_numbers = true)]
        points: i64,
    },
    /// Register participants from a JSON array of point records
    Import { path: PathBuf },
    /// Show a participant's level, progress and rank
    Status {
        id: String,
        /// Print the status report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the top of the leaderboard
    Leaderboard {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Print the active level table
    Levels,
    /// Generate shell completions
    Completions { shell: Shell },
}
