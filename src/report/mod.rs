use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{CriticId, RatingValue, RecommendationRow};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned, human readable table
    Text,
    /// Pretty printed JSON document
    Json,
}

/// Everything a single run produced, ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub person: String,
    pub closest_critics: Vec<CriticId>,
    pub recommendations: Vec<RecommendationRow>,
}

impl RecommendationReport {
    pub fn new(
        person: impl Into<String>,
        closest_critics: Vec<CriticId>,
        mut recommendations: Vec<RecommendationRow>,
    ) -> Self {
        sort_by_genre(&mut recommendations);
        Self {
            person: person.into(),
            closest_critics,
            recommendations,
        }
    }
}

pub fn sort_by_genre(rows: &mut [RecommendationRow]) {
    rows.sort_by(|a, b| a.genre.cmp(&b.genre).then_with(|| a.title.cmp(&b.title)));
}

pub fn closest_critics_announcement(person: &str, critics: &[CriticId]) -> String {
    format!(
        "The following critics had the closest ratings to {}:\n{}",
        person,
        critics.join(", ")
    )
}

pub fn recommendations_heading(person: &str) -> String {
    format!("Recommendations for {}:", person)
}

/// Renders the recommendation table with aligned columns
pub fn render_recommendations(report: &RecommendationReport) -> String {
    if report.recommendations.is_empty() {
        return format!("No recommendations for {}.", report.person);
    }

    let cells: Vec<[String; 5]> = report.recommendations.iter().map(row_cells).collect();
    let widths = column_widths(&cells);

    cells
        .iter()
        .map(|row| {
            row.iter()
                .zip(widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_text(report: &RecommendationReport) -> String {
    format!(
        "{}\n\n{}\n{}",
        closest_critics_announcement(&report.person, &report.closest_critics),
        recommendations_heading(&report.person),
        render_recommendations(report)
    )
}

pub fn render_json(report: &RecommendationReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize recommendations")
}

fn row_cells(row: &RecommendationRow) -> [String; 5] {
    [
        row.title.clone(),
        format!("({})", row.genre),
        format!("rating: {}", format_rating(row.rating)),
        row.year.to_string(),
        row.runtime
            .as_deref()
            .map(|r| format!("runs {}", r))
            .unwrap_or_default(),
    ]
}

fn column_widths(cells: &[[String; 5]]) -> [usize; 5] {
    let mut widths = [0; 5];
    for row in cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

/// Always shows at least one decimal, e.g. `3.0` and `4.67`
fn format_rating(rating: RatingValue) -> String {
    if rating.fract() == 0.0 {
        format!("{:.1}", rating)
    } else {
        rating.to_string()
    }
}
