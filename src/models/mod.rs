pub mod movie;
pub mod similarity;

pub use movie::{Movie, MovieCatalog, Recommendation};
pub use similarity::SimilarityMatrix;
