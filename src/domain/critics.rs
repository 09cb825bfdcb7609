use std::collections::{HashMap, HashSet};

use ndarray::{Array2, ArrayView1, Axis};

use super::models::{CriticId, RatingValue, Title};
use crate::errors::{RecommendError, RecommendResult};

pub type RatingCell = Option<RatingValue>;

/// Title-by-critic rating table. Missing ratings are `None`.
#[derive(Debug, Clone)]
pub struct CriticRatingMatrix {
    critics: Vec<CriticId>,
    titles: Vec<Title>,
    title_rows: HashMap<Title, usize>,
    ratings: Array2<RatingCell>,
}

impl CriticRatingMatrix {
    /// Builds the matrix from rows in file order; each row holds one cell per critic.
    pub fn new(
        critics: Vec<CriticId>,
        rows: Vec<(Title, Vec<RatingCell>)>,
    ) -> RecommendResult<Self> {
        ensure_unique_critics(&critics)?;

        let mut titles = Vec::with_capacity(rows.len());
        let mut title_rows = HashMap::with_capacity(rows.len());
        let mut cells = Vec::with_capacity(rows.len() * critics.len());

        for (title, row) in rows {
            if row.len() != critics.len() {
                return Err(RecommendError::malformed(format!(
                    "row '{}' has {} ratings for {} critics",
                    title,
                    row.len(),
                    critics.len()
                )));
            }
            if title_rows.insert(title.clone(), titles.len()).is_some() {
                return Err(RecommendError::malformed(format!(
                    "duplicate critic ratings title '{}'",
                    title
                )));
            }
            titles.push(title);
            cells.extend(row);
        }

        let ratings = Array2::from_shape_vec((titles.len(), critics.len()), cells)
            .map_err(|e| RecommendError::malformed(e.to_string()))?;

        Ok(Self {
            critics,
            titles,
            title_rows,
            ratings,
        })
    }

    pub fn critics(&self) -> &[CriticId] {
        &self.critics
    }

    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn critic_index(&self, critic: &str) -> Option<usize> {
        self.critics.iter().position(|c| c == critic)
    }

    pub fn row(&self, title: &str) -> Option<ArrayView1<'_, RatingCell>> {
        self.title_rows
            .get(title)
            .map(|&idx| self.ratings.row(idx))
    }

    /// Rows in file order
    pub fn rows(&self) -> impl Iterator<Item = (&Title, ArrayView1<'_, RatingCell>)> {
        self.titles.iter().zip(self.ratings.rows())
    }

    /// Restricts the matrix to the given critics, in the given order
    pub fn project(&self, critics: &[CriticId]) -> RecommendResult<Self> {
        let indices = critics
            .iter()
            .map(|critic| {
                self.critic_index(critic).ok_or_else(|| {
                    RecommendError::malformed(format!("unknown critic '{}'", critic))
                })
            })
            .collect::<RecommendResult<Vec<usize>>>()?;
        ensure_unique_critics(critics)?;

        Ok(Self {
            critics: critics.to_vec(),
            titles: self.titles.clone(),
            title_rows: self.title_rows.clone(),
            ratings: self.ratings.select(Axis(1), &indices),
        })
    }
}

fn ensure_unique_critics(critics: &[CriticId]) -> RecommendResult<()> {
    let mut seen = HashSet::with_capacity(critics.len());
    for critic in critics {
        if !seen.insert(critic.as_str()) {
            return Err(RecommendError::malformed(format!(
                "duplicate critic column '{}'",
                critic
            )));
        }
    }
    Ok(())
}
