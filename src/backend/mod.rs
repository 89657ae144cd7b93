//! Prediction service protocol and client

pub mod api;
pub mod types;

pub use api::{CheckFailure, PredictionClient};
pub use types::{CheckRequest, CheckResult};
