mod catalog;
mod critics;
pub mod models;

pub use catalog::MovieCatalog;
pub use critics::{CriticRatingMatrix, RatingCell};
pub use models::*;
