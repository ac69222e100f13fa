pub mod connection;
pub mod entities;
pub mod repositories;

pub use connection::{connect_from_env, connect_in_memory};
pub use repositories::PointRepository;
