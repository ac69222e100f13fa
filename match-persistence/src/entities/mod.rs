pub mod prelude;
pub mod recorded_points;
