use anyhow::Result;

use movie_recommender::cli::Command;
use movie_recommender::config::DataSources;
use movie_recommender::{handle_completions, handle_prompt, handle_recommend, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Recommend {
            folder,
            movies,
            critics,
            personal,
            format,
        } => handle_recommend(DataSources::new(folder, movies, critics, personal), format),
        Command::Prompt { format } => handle_prompt(format),
        Command::Completions { shell } => {
            handle_completions(shell);
            Ok(())
        }
    }
}
