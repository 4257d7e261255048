use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Browse and search the conference agenda from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the agenda dataset (JSON)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Query a running agenda API instead of the local dataset
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List sessions, optionally filtered
    #[command(alias = "ls")]
    Sessions {
        /// Fuzzy search across titles, descriptions, tags and speakers
        #[arg(short, long)]
        search: Option<String>,
        /// Fuzzy match on the session title
        #[arg(long)]
        title: Option<String>,
        /// Fuzzy match on tag names
        #[arg(long)]
        tag: Option<String>,
        /// Maximum number of sessions to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single session
    Session {
        /// Session ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List speakers
    Speakers {
        /// Fuzzy match on speaker names
        #[arg(short, long)]
        name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List locations
    Locations {
        /// Fuzzy match on location names
        #[arg(short, long)]
        name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rate a session (requires --api-url)
    Rate {
        /// Session ID
        id: String,
        /// Rating from 1 to 5
        rating: i64,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
