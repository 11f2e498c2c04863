//! Reference pricing collaborator: area unit prices and amenity uplifts.
//!
//! The valuation engine never looks records up itself. Callers resolve names through
//! [`resolve_area`] and [`resolve_amenities`] and hand the engine the resolved records.

mod catalog;
mod normalizer;
mod seed;

pub use catalog::{CatalogError, ReferenceCatalog};
pub use normalizer::{normalize_amenity_name, normalize_area_name};

use std::collections::{BTreeSet, HashSet};

use crate::valuation::{AmenityFactor, AreaPricing, BuildingKind};

/// Read-only lookups over reference pricing. Keys are already normalized.
pub trait ReferenceRepository: Send + Sync {
    fn find_area(&self, key: &str) -> Result<Option<AreaPricing>, ReferenceError>;
    fn find_amenity(
        &self,
        key: &str,
        kind: BuildingKind,
    ) -> Result<Option<AmenityFactor>, ReferenceError>;
    fn areas(&self) -> Result<Vec<AreaPricing>, ReferenceError>;
    fn amenities(&self, kind: BuildingKind) -> Result<Vec<AmenityFactor>, ReferenceError>;
}

/// Storage failure in a reference repository.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    #[error("reference data unavailable: {0}")]
    Unavailable(String),
}

/// Name resolution failures surfaced to the caller as rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("unknown area: {0}")]
    UnknownArea(String),
    #[error("unknown amenities: {}", .0.join(", "))]
    UnknownAmenity(Vec<String>),
    #[error("duplicate amenities: {}", .0.join(", "))]
    DuplicateAmenity(Vec<String>),
    #[error(transparent)]
    Repository(#[from] ReferenceError),
}

/// Case-insensitive, trimmed area lookup.
pub fn resolve_area<R>(repository: &R, name: &str) -> Result<AreaPricing, ResolutionError>
where
    R: ReferenceRepository + ?Sized,
{
    repository
        .find_area(&normalize_area_name(name))?
        .ok_or_else(|| ResolutionError::UnknownArea(name.trim().to_string()))
}

/// Resolve every requested amenity for `kind`, reporting all unknown names at once.
pub fn resolve_amenities<R, S>(
    repository: &R,
    names: &[S],
    kind: BuildingKind,
) -> Result<Vec<AmenityFactor>, ResolutionError>
where
    R: ReferenceRepository + ?Sized,
    S: AsRef<str>,
{
    let keys: Vec<String> = names
        .iter()
        .map(|name| normalize_amenity_name(name.as_ref()))
        .collect();

    let mut seen = HashSet::with_capacity(keys.len());
    let duplicates: BTreeSet<&String> = keys.iter().filter(|key| !seen.insert(*key)).collect();
    if !duplicates.is_empty() {
        return Err(ResolutionError::DuplicateAmenity(
            duplicates.into_iter().cloned().collect(),
        ));
    }

    let mut resolved = Vec::with_capacity(keys.len());
    let mut missing = BTreeSet::new();
    for key in keys {
        match repository.find_amenity(&key, kind)? {
            Some(amenity) => resolved.push(amenity),
            None => {
                missing.insert(key);
            }
        }
    }

    if missing.is_empty() {
        Ok(resolved)
    } else {
        Err(ResolutionError::UnknownAmenity(missing.into_iter().collect()))
    }
}
