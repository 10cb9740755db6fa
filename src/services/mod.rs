//! External collaborators: market data and the broker session check.

pub mod broker;
pub mod market_data;
pub mod yahoo;
