pub mod csv_tables;

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

pub use csv_tables::{read_catalog, read_critics, read_personal};

use crate::config::DataSources;
use crate::domain::{CriticRatingMatrix, MovieCatalog, PersonalRatings};
use crate::errors::{RecommendResult, open_context, parse_context};

/// The three input tables for one run
pub struct InputTables {
    pub catalog: MovieCatalog,
    pub critics: CriticRatingMatrix,
    pub personal: PersonalRatings,
}

pub fn load_tables(sources: &DataSources) -> Result<InputTables> {
    let catalog = load_table(&sources.movies_path(), "catalog", read_catalog)?;
    info!("  → Loaded {} movies", catalog.len());

    let critics = load_table(&sources.critics_path(), "critic ratings", read_critics)?;
    info!(
        "  → Loaded {} critics rating {} titles",
        critics.critics().len(),
        critics.titles().len()
    );

    let personal = load_table(&sources.personal_path(), "personal ratings", read_personal)?;
    info!(
        "  → Loaded {} ratings for {}",
        personal.len(),
        personal.person()
    );

    Ok(InputTables {
        catalog,
        critics,
        personal,
    })
}

fn load_table<T>(
    path: &Path,
    table: &str,
    read: impl FnOnce(File) -> RecommendResult<T>,
) -> Result<T> {
    let file = File::open(path).with_context(|| open_context(table, path))?;
    read(file).with_context(|| parse_context(table, path))
}
