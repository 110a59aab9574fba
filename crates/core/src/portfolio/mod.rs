pub mod classifier;
pub mod commentary;
pub mod consolidate;
