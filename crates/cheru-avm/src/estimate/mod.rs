//! Estimate intake: structural validation, reference resolution, valuation, and HTTP routing.

pub mod request;
pub mod response;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use request::{ApartmentRequest, HouseRequest, LandRequest, PropertyRequest};
pub use response::{EstimateResponse, DISCLAIMER};
pub use router::estimate_router;
pub use service::{EstimateService, EstimateServiceError};
pub use validation::{
    InvalidPropertyAttributes, ValidationPolicy, DEFAULT_CLASSIC_YEAR, DEFAULT_MIN_YEAR_BUILT,
};
