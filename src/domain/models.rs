use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type Title = String;
pub type CriticId = String;
pub type RatingValue = f64;

/// Catalog entry for a single movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: Title,
    pub genre: String,
    pub year: i32,
    pub runtime: Option<String>,
}

/// One person's sparse ratings, keyed by title
#[derive(Debug, Clone, Default)]
pub struct PersonalRatings {
    person: String,
    ratings: HashMap<Title, RatingValue>,
}

impl PersonalRatings {
    pub fn new(person: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            ratings: HashMap::new(),
        }
    }

    pub fn with_ratings<I, T>(person: impl Into<String>, ratings: I) -> Self
    where
        I: IntoIterator<Item = (T, RatingValue)>,
        T: Into<Title>,
    {
        Self {
            person: person.into(),
            ratings: ratings.into_iter().map(|(t, r)| (t.into(), r)).collect(),
        }
    }

    /// Returns false when the title was already rated
    pub fn insert(&mut self, title: impl Into<Title>, rating: RatingValue) -> bool {
        self.ratings.insert(title.into(), rating).is_none()
    }

    pub fn person(&self) -> &str {
        &self.person
    }

    pub fn get(&self, title: &str) -> Option<RatingValue> {
        self.ratings.get(title).copied()
    }

    pub fn has_rated(&self, title: &str) -> bool {
        self.ratings.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

/// A movie that survived genre-max filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRow {
    pub title: Title,
    pub genre: String,
    pub rating: RatingValue,
    pub genre_max: RatingValue,
    pub year: i32,
    pub runtime: Option<String>,
}
