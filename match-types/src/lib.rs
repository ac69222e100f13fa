pub mod errors;
pub mod point;
pub mod stats;

// Re-export all types
pub use errors::*;
pub use point::*;
pub use stats::*;
