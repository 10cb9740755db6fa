//! Signal detection over indicator rows.

pub mod detector;

pub use detector::*;
