use log::debug;

use crate::domain::{CriticId, CriticRatingMatrix, PersonalRatings, RatingValue};
use crate::errors::{RecommendError, RecommendResult};

/// Total squared distance between one critic and the person
#[derive(Debug, Clone, PartialEq)]
pub struct CriticDistance {
    pub critic: CriticId,
    pub distance: f64,
    /// Shared titles the critic actually rated
    pub compared: usize,
}

/// Computes every critic's sum of squared differences over the titles both the
/// critic and the person rated. Results follow the matrix column order.
pub fn critic_distances(
    matrix: &CriticRatingMatrix,
    personal: &PersonalRatings,
) -> RecommendResult<Vec<CriticDistance>> {
    if personal.is_empty() {
        return Err(RecommendError::InsufficientOverlap);
    }

    let mut distances: Vec<CriticDistance> = matrix
        .critics()
        .iter()
        .map(|critic| CriticDistance {
            critic: critic.clone(),
            distance: 0.0,
            compared: 0,
        })
        .collect();

    let mut shared_titles = 0;
    for (title, row) in matrix.rows() {
        let Some(personal_rating) = personal.get(title) else {
            continue;
        };
        shared_titles += 1;
        accumulate_row(&mut distances, row.iter(), personal_rating);
    }

    if shared_titles == 0 {
        return Err(RecommendError::InsufficientOverlap);
    }

    for entry in &distances {
        debug!(
            "  → {}: distance {:.4} over {} title(s)",
            entry.critic, entry.distance, entry.compared
        );
    }
    Ok(distances)
}

fn accumulate_row<'a>(
    distances: &mut [CriticDistance],
    cells: impl Iterator<Item = &'a Option<RatingValue>>,
    personal_rating: RatingValue,
) {
    for (entry, cell) in distances.iter_mut().zip(cells) {
        if let Some(critic_rating) = cell {
            entry.distance += squared_difference(*critic_rating, personal_rating);
            entry.compared += 1;
        }
    }
}

fn squared_difference(a: RatingValue, b: RatingValue) -> f64 {
    (a - b).powi(2)
}
