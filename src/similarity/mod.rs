pub mod distance;

use log::info;

pub use distance::{CriticDistance, critic_distances};

use crate::config::SimilaritySettings;
use crate::domain::{CriticId, CriticRatingMatrix, PersonalRatings};
use crate::errors::{RecommendError, RecommendResult};

/// Returns the `settings.closest_critics` critics nearest to the person, closest
/// first. Equal distances keep the matrix column order.
pub fn find_closest_critics(
    matrix: &CriticRatingMatrix,
    personal: &PersonalRatings,
    settings: &SimilaritySettings,
) -> RecommendResult<Vec<CriticId>> {
    let required = settings.closest_critics;
    let mut eligible: Vec<CriticDistance> = critic_distances(matrix, personal)?
        .into_iter()
        .filter(|d| d.compared > 0)
        .collect();
    info!(
        "  → {} of {} critics share rated titles with {}",
        eligible.len(),
        matrix.critics().len(),
        personal.person()
    );

    if eligible.len() < required {
        return Err(RecommendError::NotEnoughCritics {
            required,
            available: eligible.len(),
        });
    }

    // sort_by is stable
    eligible.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    Ok(eligible
        .into_iter()
        .take(required)
        .map(|d| d.critic)
        .collect())
}
