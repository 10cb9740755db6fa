//! Core application primitives (pipeline runtime)

pub mod runtime;

pub use runtime::*;
