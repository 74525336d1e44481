//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// University structure manager: hierarchical organization trees with budget and enrollment aggregation
#[derive(Parser, Debug)]
#[command(name = "campus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the full institution report
    Show {
        /// Roster file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: PathBuf,
    },

    /// Print the aggregate budget
    Budget {
        /// Roster file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: PathBuf,
        /// Query a named node instead of the whole institution
        #[arg(short, long)]
        node: Option<String>,
    },

    /// Print the student count
    Students {
        /// Roster file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: PathBuf,
        /// Query a named node instead of the whole institution
        #[arg(short, long)]
        node: Option<String>,
    },

    /// Show the hierarchy as a tree
    Tree {
        /// Roster file (TOML)
        #[arg(value_hint = ValueHint::FilePath)]
        roster: PathBuf,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
