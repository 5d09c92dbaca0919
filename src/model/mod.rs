pub mod ids;
pub mod contact;

// Re-exports for convenience
pub use ids::Id;
pub use contact::{now_stamp, Contact, DEFAULT_GROUP};
