pub mod filter;

use log::info;

use crate::config::RecommendationSettings;
use crate::domain::{
    CriticId, CriticRatingMatrix, MovieCatalog, PersonalRatings, RecommendationRow,
};
use crate::errors::{RecommendError, RecommendResult};

/// Selects, per genre, the unwatched movies whose closest-critic average equals
/// the genre's best. The returned rows are unordered.
///
/// An empty result means no unwatched movie had a rating from the closest critics.
pub fn recommend_movies(
    matrix: &CriticRatingMatrix,
    personal: &PersonalRatings,
    closest: &[CriticId],
    catalog: &MovieCatalog,
    settings: &RecommendationSettings,
) -> RecommendResult<Vec<RecommendationRow>> {
    if catalog.is_empty() {
        return Err(RecommendError::EmptyCatalog);
    }
    if closest.is_empty() {
        return Err(RecommendError::malformed("no closest critics given"));
    }

    let projected = matrix.project(closest)?;

    let averages = filter::critic_averages(&projected, settings.rating_precision);
    info!("  → {} titles rated by the closest critics", averages.len());

    let unwatched = filter::unwatched(averages, personal);
    info!("  → {} of them unwatched by {}", unwatched.len(), personal.person());

    let candidates = filter::join_catalog(unwatched, catalog);
    if candidates.is_empty() {
        info!("  → No unwatched candidates found in the catalog");
        return Ok(Vec::new());
    }

    let maxima = filter::genre_maxima(&candidates);
    info!(
        "  → {} candidates across {} genres",
        candidates.len(),
        maxima.len()
    );

    Ok(filter::apply_genre_max(candidates, &maxima))
}
