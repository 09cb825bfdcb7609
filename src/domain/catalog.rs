use std::collections::HashMap;

use super::models::Movie;
use crate::errors::{RecommendError, RecommendResult};

/// Collection of movies indexed by title
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    movies: HashMap<String, Movie>,
}

impl MovieCatalog {
    pub fn new() -> Self {
        Self {
            movies: HashMap::new(),
        }
    }

    pub fn from_movies<I: IntoIterator<Item = Movie>>(movies: I) -> RecommendResult<Self> {
        let mut catalog = Self::new();
        for movie in movies {
            catalog.add(movie)?;
        }
        Ok(catalog)
    }

    pub fn add(&mut self, movie: Movie) -> RecommendResult<()> {
        if self.movies.contains_key(&movie.title) {
            return Err(RecommendError::malformed(format!(
                "duplicate catalog title '{}'",
                movie.title
            )));
        }
        self.movies.insert(movie.title.clone(), movie);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.movies.get(title)
    }
}
