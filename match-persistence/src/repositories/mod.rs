pub mod point_repository;

pub use point_repository::PointRepository;
