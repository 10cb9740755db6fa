pub mod momentum;
pub mod series;
pub mod trend;

pub use series::*;
