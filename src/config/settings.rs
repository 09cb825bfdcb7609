use std::path::PathBuf;

use anyhow::{Result, bail};

pub struct SimilaritySettings {
    pub closest_critics: usize,
}

impl Default for SimilaritySettings {
    fn default() -> Self {
        Self { closest_critics: 3 }
    }
}

pub struct RecommendationSettings {
    pub rating_precision: i32,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            rating_precision: 2,
        }
    }
}

/// Locations of the three input tables
#[derive(Debug, Clone, PartialEq)]
pub struct DataSources {
    pub folder: PathBuf,
    pub movies_file: String,
    pub critics_file: String,
    pub personal_file: String,
}

impl DataSources {
    pub fn new(
        folder: impl Into<PathBuf>,
        movies_file: impl Into<String>,
        critics_file: impl Into<String>,
        personal_file: impl Into<String>,
    ) -> Self {
        Self {
            folder: folder.into(),
            movies_file: movies_file.into(),
            critics_file: critics_file.into(),
            personal_file: personal_file.into(),
        }
    }

    /// Parse `<folder> <movies> <critics> <personal>` separated by whitespace.
    /// Extra tokens are ignored.
    pub fn from_input_line(line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 {
            bail!(
                "Expected a folder and three file names, got {} value(s)",
                tokens.len()
            );
        }
        Ok(Self::new(tokens[0], tokens[1], tokens[2], tokens[3]))
    }

    pub fn movies_path(&self) -> PathBuf {
        self.folder.join(&self.movies_file)
    }

    pub fn critics_path(&self) -> PathBuf {
        self.folder.join(&self.critics_file)
    }

    pub fn personal_path(&self) -> PathBuf {
        self.folder.join(&self.personal_file)
    }
}

pub struct AppConfig {
    pub similarity: SimilaritySettings,
    pub recommendation: RecommendationSettings,
    pub sources: DataSources,
}

impl AppConfig {
    pub fn new(sources: DataSources) -> Self {
        Self {
            similarity: SimilaritySettings::default(),
            recommendation: RecommendationSettings::default(),
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_from_input_line() {
        let sources =
            DataSources::from_input_line("  data movies.csv critics.csv  personal.csv\n").unwrap();

        assert_eq!(sources.folder, PathBuf::from("data"));
        assert_eq!(sources.movies_path(), Path::new("data").join("movies.csv"));
        assert_eq!(sources.critics_path(), Path::new("data").join("critics.csv"));
        assert_eq!(sources.personal_path(), Path::new("data").join("personal.csv"));
    }

    #[test]
    fn test_from_input_line_requires_four_values() {
        let err = DataSources::from_input_line("data movies.csv critics.csv").unwrap_err();
        assert!(err.to_string().contains("got 3 value(s)"));
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::new(DataSources::new("d", "m", "c", "p"));
        assert_eq!(config.similarity.closest_critics, 3);
        assert_eq!(config.recommendation.rating_precision, 2);
    }
}
