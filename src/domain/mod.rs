pub mod error;

// Water sample analysis
pub mod water;
