pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod recommendation;
pub mod report;
pub mod services;
pub mod similarity;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::{AppConfig, DataSources};
use crate::report::OutputFormat;
use crate::services::recommendation::RecommendationService;

const SOURCES_PROMPT: &str =
    "Enter the data folder, then the movies, critics and personal ratings file names, separated by spaces:";

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_recommend(sources: DataSources, format: OutputFormat) -> Result<()> {
    let config = AppConfig::new(sources);
    let service = RecommendationService::new(config);
    service.run(format)
}

pub fn handle_prompt(format: OutputFormat) -> Result<()> {
    let sources = read_sources(io::stdin().lock(), io::stdout())?;
    handle_recommend(sources, format)
}

pub fn handle_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut io::stdout());
}

fn read_sources(mut input: impl BufRead, mut output: impl Write) -> Result<DataSources> {
    write!(output, "{} ", SOURCES_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read data file locations")?;
    DataSources::from_input_line(&line)
}
