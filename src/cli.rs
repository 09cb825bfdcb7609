use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Movie recommendations from the critics who rate like you")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Recommend unwatched movies using the given data files
    Recommend {
        /// Folder holding the data files
        folder: PathBuf,
        /// Movie catalog file name
        movies: String,
        /// Critic ratings file name
        critics: String,
        /// Personal ratings file name
        personal: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Ask for the folder and file names on standard input
    Prompt {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
