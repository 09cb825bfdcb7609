use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::config::AppConfig;
use crate::loader::{self, InputTables};
use crate::recommendation;
use crate::report::{self, OutputFormat, RecommendationReport};
use crate::similarity;

pub struct RecommendationService {
    config: AppConfig,
}

impl RecommendationService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, format: OutputFormat) -> Result<()> {
        info!("=== Building Recommendations ===\n");

        let report = self.compute()?;

        match format {
            OutputFormat::Text => self.print_text(&report),
            OutputFormat::Json => println!("{}", report::render_json(&report)?),
        }

        info!("=== Done ===");
        Ok(())
    }

    /// Loads the configured tables and runs both pipeline stages
    pub fn compute(&self) -> Result<RecommendationReport> {
        info!("Loading tables from {}", self.config.sources.folder.display());
        let tables = loader::load_tables(&self.config.sources)?;
        self.compute_from(&tables)
    }

    pub fn compute_from(&self, tables: &InputTables) -> Result<RecommendationReport> {
        let person = tables.personal.person();

        info!("Finding closest critics for {}", person);
        let closest = similarity::find_closest_critics(
            &tables.critics,
            &tables.personal,
            &self.config.similarity,
        )
        .context("Failed to find closest critics")?;
        info!("  → Closest critics: {}", closest.join(", "));

        info!("Filtering recommendations");
        let recommendations = recommendation::recommend_movies(
            &tables.critics,
            &tables.personal,
            &closest,
            &tables.catalog,
            &self.config.recommendation,
        )
        .context("Failed to build recommendations")?;
        info!("  → {} movies recommended\n", recommendations.len());

        Ok(RecommendationReport::new(person, closest, recommendations))
    }

    fn print_text(&self, report: &RecommendationReport) {
        println!(
            "{}",
            report::closest_critics_announcement(&report.person, &report.closest_critics)
        );
        println!();
        println!("{}", report::recommendations_heading(&report.person).bold());
        println!("{}", report::render_recommendations(report));
    }
}
