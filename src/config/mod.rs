pub mod settings;

pub use settings::{AppConfig, DataSources, RecommendationSettings, SimilaritySettings};
