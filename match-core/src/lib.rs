pub mod classifier;
pub mod events;
pub mod ledger;
pub mod stats;
pub mod taxonomy;

// Re-export main components
pub use classifier::*;
pub use events::*;
pub use ledger::*;
pub use stats::*;
pub use taxonomy::*;
