use std::collections::HashMap;

use log::debug;

use crate::domain::{
    CriticRatingMatrix, MovieCatalog, PersonalRatings, RatingValue, RecommendationRow, Title,
};

/// Critic-average rating for one title
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedRating {
    pub title: Title,
    pub rating: RatingValue,
}

/// Averages the present ratings of every row, rounded to `precision` decimals.
/// Rows without any rating are dropped.
pub fn critic_averages(matrix: &CriticRatingMatrix, precision: i32) -> Vec<AveragedRating> {
    matrix
        .rows()
        .filter_map(|(title, row)| {
            let present: Vec<RatingValue> = row.iter().filter_map(|cell| *cell).collect();
            if present.is_empty() {
                debug!("  → Skipping '{}': no closest-critic rating", title);
                return None;
            }
            let mean = present.iter().sum::<RatingValue>() / present.len() as f64;
            Some(AveragedRating {
                title: title.clone(),
                rating: round_to(mean, precision),
            })
        })
        .collect()
}

pub fn unwatched(averages: Vec<AveragedRating>, personal: &PersonalRatings) -> Vec<AveragedRating> {
    averages
        .into_iter()
        .filter(|avg| !personal.has_rated(&avg.title))
        .collect()
}

/// Attaches catalog metadata; titles missing from the catalog are dropped.
/// `genre_max` is filled in later by [`apply_genre_max`].
pub fn join_catalog(candidates: Vec<AveragedRating>, catalog: &MovieCatalog) -> Vec<RecommendationRow> {
    candidates
        .into_iter()
        .filter_map(|avg| {
            let Some(movie) = catalog.get(&avg.title) else {
                debug!("  → Skipping '{}': not in catalog", avg.title);
                return None;
            };
            Some(RecommendationRow {
                title: avg.title,
                genre: movie.genre.clone(),
                rating: avg.rating,
                genre_max: avg.rating,
                year: movie.year,
                runtime: movie.runtime.clone(),
            })
        })
        .collect()
}

pub fn genre_maxima(rows: &[RecommendationRow]) -> HashMap<String, RatingValue> {
    let mut maxima: HashMap<String, RatingValue> = HashMap::new();
    for row in rows {
        maxima
            .entry(row.genre.clone())
            .and_modify(|max| *max = max.max(row.rating))
            .or_insert(row.rating);
    }
    maxima
}

/// Keeps the rows whose rating reaches their genre maximum; co-maxima all stay.
pub fn apply_genre_max(
    rows: Vec<RecommendationRow>,
    maxima: &HashMap<String, RatingValue>,
) -> Vec<RecommendationRow> {
    rows.into_iter()
        .filter_map(|mut row| {
            let genre_max = *maxima.get(&row.genre)?;
            row.genre_max = genre_max;
            (row.rating >= genre_max).then_some(row)
        })
        .collect()
}

pub fn round_to(value: f64, precision: i32) -> f64 {
    let factor = 10f64.powi(precision);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Movie;

    fn row(title: &str, genre: &str, rating: f64) -> RecommendationRow {
        RecommendationRow {
            title: title.to_string(),
            genre: genre.to_string(),
            rating,
            genre_max: rating,
            year: 2000,
            runtime: None,
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(14.0 / 3.0, 2), 4.67);
        assert_eq!(round_to(3.0, 2), 3.0);
        assert_eq!(round_to(2.344, 2), 2.34);
    }

    #[test]
    fn test_round_to_ties_go_to_even() {
        assert_eq!(round_to(4.125, 2), 4.12);
        assert_eq!(round_to(4.375, 2), 4.38);
    }

    #[test]
    fn test_critic_averages_skip_missing() {
        let matrix = CriticRatingMatrix::new(
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            vec![
                ("X".to_string(), vec![Some(4.0), None, Some(3.0)]),
                ("Y".to_string(), vec![None, None, None]),
                ("Z".to_string(), vec![Some(1.0), Some(2.0), Some(2.0)]),
            ],
        )
        .unwrap();

        let averages = critic_averages(&matrix, 2);

        assert_eq!(
            averages,
            vec![
                AveragedRating { title: "X".to_string(), rating: 3.5 },
                AveragedRating { title: "Z".to_string(), rating: 1.67 },
            ]
        );
    }

    #[test]
    fn test_unwatched_and_catalog_join() {
        let averages = vec![
            AveragedRating { title: "Seen".to_string(), rating: 4.0 },
            AveragedRating { title: "New".to_string(), rating: 3.0 },
            AveragedRating { title: "Uncatalogued".to_string(), rating: 5.0 },
        ];
        let personal = PersonalRatings::with_ratings("Me", [("Seen", 2.0)]);
        let catalog = MovieCatalog::from_movies(vec![
            Movie {
                title: "Seen".to_string(),
                genre: "Drama".to_string(),
                year: 1990,
                runtime: None,
            },
            Movie {
                title: "New".to_string(),
                genre: "Comedy".to_string(),
                year: 2001,
                runtime: Some("1 hr. 40 min.".to_string()),
            },
        ])
        .unwrap();

        let rows = join_catalog(unwatched(averages, &personal), &catalog);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "New");
        assert_eq!(rows[0].genre, "Comedy");
        assert_eq!(rows[0].runtime.as_deref(), Some("1 hr. 40 min."));
    }

    #[test]
    fn test_genre_max_keeps_ties() {
        let rows = vec![
            row("A", "Comedy", 4.5),
            row("B", "Comedy", 4.5),
            row("C", "Comedy", 3.0),
            row("D", "Horror", 2.0),
        ];

        let maxima = genre_maxima(&rows);
        let kept = apply_genre_max(rows, &maxima);

        let titles: Vec<&str> = kept.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "D"]);
        assert!(kept.iter().all(|r| r.genre_max == r.rating));
    }
}
