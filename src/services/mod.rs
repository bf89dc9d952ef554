pub mod posters;
pub mod recommender;

pub use recommender::Recommender;
