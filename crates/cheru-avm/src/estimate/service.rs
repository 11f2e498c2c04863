use std::sync::Arc;

use chrono::{Datelike, Local};
use tracing::info;

use super::request::PropertyRequest;
use super::validation::{InvalidPropertyAttributes, ValidationPolicy};
use crate::reference::{resolve_amenities, resolve_area, ReferenceRepository, ResolutionError};
use crate::valuation::{
    BuildingSpec, Estimate, LandSpec, ValuationConfig, ValuationEngine, ValuationError,
    ValuationSubject,
};

/// Service composing validation, reference resolution, and the valuation engine.
pub struct EstimateService<R> {
    repository: Arc<R>,
    engine: Arc<ValuationEngine>,
    validation: ValidationPolicy,
}

impl<R> EstimateService<R>
where
    R: ReferenceRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ValuationConfig, validation: ValidationPolicy) -> Self {
        Self {
            repository,
            engine: Arc::new(ValuationEngine::new(config)),
            validation,
        }
    }

    pub fn engine(&self) -> &ValuationEngine {
        &self.engine
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Estimate against the current calendar year.
    pub fn estimate_now(&self, request: &PropertyRequest) -> Result<Estimate, EstimateServiceError> {
        self.estimate(request, Local::now().year())
    }

    /// Validate, resolve, and value a request as of `current_year`.
    pub fn estimate(
        &self,
        request: &PropertyRequest,
        current_year: i32,
    ) -> Result<Estimate, EstimateServiceError> {
        self.validation.validate(request, current_year)?;

        let area = resolve_area(self.repository.as_ref(), request.area())?;
        let amenities = match request.amenities() {
            Some((kind, names)) => resolve_amenities(self.repository.as_ref(), names, kind)?,
            None => Vec::new(),
        };

        let subject = match request {
            PropertyRequest::Land(land) => ValuationSubject::Land(LandSpec {
                size_acres: land.land_size_acres,
                plot_shape: land.plot_shape,
            }),
            PropertyRequest::Apartment(apartment) => ValuationSubject::Apartment(BuildingSpec {
                size_sqm: apartment.size_sqm,
                year_built: apartment.year_built,
                amenities: &amenities,
            }),
            PropertyRequest::House(house) => ValuationSubject::House {
                land: LandSpec {
                    size_acres: house.land_size_acres,
                    plot_shape: house.plot_shape,
                },
                building: BuildingSpec {
                    size_sqm: house.house_size_sqm,
                    year_built: house.year_built,
                    amenities: &amenities,
                },
            },
        };

        let estimate = self.engine.appraise(&area, &subject, current_year)?;
        info!(
            property_type = %estimate.property_type,
            area = %estimate.area,
            amenities = amenities.len(),
            estimated_value = %estimate.estimated_value,
            "estimate computed"
        );
        Ok(estimate)
    }
}

/// Error raised by the estimate service.
#[derive(Debug, thiserror::Error)]
pub enum EstimateServiceError {
    #[error(transparent)]
    Invalid(#[from] InvalidPropertyAttributes),
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}
