pub mod scorer;
pub mod suitability;

// Re-export the two entry points.
pub use scorer::classify;
pub use suitability::assess;
