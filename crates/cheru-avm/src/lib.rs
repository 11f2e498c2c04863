pub mod config;
pub mod error;
pub mod estimate;
pub mod reference;
pub mod telemetry;
pub mod valuation;
