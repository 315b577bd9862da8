mod model;
mod repository;

pub use model::PositionDB;
pub use repository::PositionRepository;
