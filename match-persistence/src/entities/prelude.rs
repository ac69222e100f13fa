pub use super::recorded_points::Entity as RecordedPoints;
