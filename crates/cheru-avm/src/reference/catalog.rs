use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use super::normalizer::{normalize_amenity_name, normalize_area_name};
use super::seed::{default_amenities, default_areas};
use super::{ReferenceError, ReferenceRepository};
use crate::valuation::{AmenityFactor, AreaPricing, BuildingKind};

/// Errors raised while loading reference pricing from CSV exports.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to open reference file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid reference CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: name must not be blank")]
    BlankName { row: usize },
    #[error("row {row}: {field} '{value}' is not a valid decimal")]
    InvalidDecimal {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("row {row}: {field} must not be negative")]
    Negative { row: usize, field: &'static str },
    #[error("row {row}: property_type '{value}' must be apartment or house")]
    UnknownKind { row: usize, value: String },
}

#[derive(Debug, Deserialize)]
struct AreaRow {
    name: String,
    land_price_per_acre: String,
    apartment_price_per_sqm: String,
    house_price_per_sqm: String,
}

#[derive(Debug, Deserialize)]
struct AmenityRow {
    name: String,
    property_type: String,
    value_percent: String,
}

/// In-memory reference store keyed by normalized names.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    areas: BTreeMap<String, AreaPricing>,
    amenities: BTreeMap<(BuildingKind, String), AmenityFactor>,
}

impl ReferenceCatalog {
    /// Catalog pre-populated with the default Nairobi reference set.
    pub fn seeded() -> Self {
        let mut catalog = Self::default();
        for area in default_areas() {
            catalog.upsert_area(area);
        }
        for amenity in default_amenities() {
            catalog.upsert_amenity(amenity);
        }
        catalog
    }

    /// Insert or replace an area, returning the record it replaced.
    pub fn upsert_area(&mut self, mut area: AreaPricing) -> Option<AreaPricing> {
        area.name = area.name.trim().to_string();
        self.areas.insert(normalize_area_name(&area.name), area)
    }

    /// Insert or replace an amenity for its building kind, returning the record it replaced.
    pub fn upsert_amenity(&mut self, mut amenity: AmenityFactor) -> Option<AmenityFactor> {
        amenity.name = normalize_amenity_name(&amenity.name);
        self.amenities
            .insert((amenity.kind, amenity.name.clone()), amenity)
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    pub fn amenity_count(&self) -> usize {
        self.amenities.len()
    }

    pub fn load_areas_file(&mut self, path: &Path) -> Result<usize, CatalogError> {
        self.load_areas_csv(open(path)?)
    }

    pub fn load_amenities_file(&mut self, path: &Path) -> Result<usize, CatalogError> {
        self.load_amenities_csv(open(path)?)
    }

    /// Upsert areas from `name,land_price_per_acre,apartment_price_per_sqm,house_price_per_sqm`.
    ///
    /// Nothing is applied unless every row parses.
    pub fn load_areas_csv<R: Read>(&mut self, reader: R) -> Result<usize, CatalogError> {
        let mut parsed = Vec::new();
        for (index, row) in csv_reader(reader).deserialize::<AreaRow>().enumerate() {
            let row_number = index + 2;
            let row = row?;
            let name = required_name(&row.name, row_number)?;
            parsed.push(AreaPricing {
                name,
                land_price_per_acre: non_negative(
                    row_number,
                    "land_price_per_acre",
                    &row.land_price_per_acre,
                )?,
                apartment_price_per_sqm: non_negative(
                    row_number,
                    "apartment_price_per_sqm",
                    &row.apartment_price_per_sqm,
                )?,
                house_price_per_sqm: non_negative(
                    row_number,
                    "house_price_per_sqm",
                    &row.house_price_per_sqm,
                )?,
            });
        }

        let count = parsed.len();
        for area in parsed {
            self.upsert_area(area);
        }
        Ok(count)
    }

    /// Upsert amenities from `name,property_type,value_percent`.
    ///
    /// Nothing is applied unless every row parses.
    pub fn load_amenities_csv<R: Read>(&mut self, reader: R) -> Result<usize, CatalogError> {
        let mut parsed = Vec::new();
        for (index, row) in csv_reader(reader).deserialize::<AmenityRow>().enumerate() {
            let row_number = index + 2;
            let row = row?;
            let name = required_name(&row.name, row_number)?;
            let kind =
                BuildingKind::parse(&row.property_type).ok_or_else(|| CatalogError::UnknownKind {
                    row: row_number,
                    value: row.property_type.clone(),
                })?;
            parsed.push(AmenityFactor {
                name,
                kind,
                uplift_percent: non_negative(row_number, "value_percent", &row.value_percent)?,
            });
        }

        let count = parsed.len();
        for amenity in parsed {
            self.upsert_amenity(amenity);
        }
        Ok(count)
    }
}

impl ReferenceRepository for ReferenceCatalog {
    fn find_area(&self, key: &str) -> Result<Option<AreaPricing>, ReferenceError> {
        Ok(self.areas.get(key).cloned())
    }

    fn find_amenity(
        &self,
        key: &str,
        kind: BuildingKind,
    ) -> Result<Option<AmenityFactor>, ReferenceError> {
        Ok(self.amenities.get(&(kind, key.to_string())).cloned())
    }

    fn areas(&self) -> Result<Vec<AreaPricing>, ReferenceError> {
        Ok(self.areas.values().cloned().collect())
    }

    fn amenities(&self, kind: BuildingKind) -> Result<Vec<AmenityFactor>, ReferenceError> {
        Ok(self
            .amenities
            .values()
            .filter(|amenity| amenity.kind == kind)
            .cloned()
            .collect())
    }
}

fn open(path: &Path) -> Result<File, CatalogError> {
    File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn required_name(raw: &str, row: usize) -> Result<String, CatalogError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CatalogError::BlankName { row });
    }
    Ok(name.to_string())
}

fn non_negative(row: usize, field: &'static str, raw: &str) -> Result<Decimal, CatalogError> {
    let value = Decimal::from_str(raw.replace('_', "").trim()).map_err(|_| {
        CatalogError::InvalidDecimal {
            row,
            field,
            value: raw.to_string(),
        }
    })?;
    if value.is_sign_negative() && !value.is_zero() {
        return Err(CatalogError::Negative { row, field });
    }
    Ok(value)
}
