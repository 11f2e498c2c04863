use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use crate::infra::{build_catalog, estimate_service};
use cheru_avm::config::AppConfig;
use cheru_avm::error::AppError;
use cheru_avm::estimate::{
    ApartmentRequest, EstimateResponse, HouseRequest, LandRequest, PropertyRequest,
};
use cheru_avm::reference::ReferenceRepository;
use cheru_avm::valuation::{BuildingKind, FormulaRevision, PlotShape, ValuationConfig};

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Formula revision to apply instead of the configured one (launch or revised)
    #[arg(long, value_parser = parse_revision)]
    pub(crate) revision: Option<FormulaRevision>,
    #[command(subcommand)]
    pub(crate) property: PropertyCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum PropertyCommand {
    /// Value a vacant plot
    Land(LandArgs),
    /// Value an apartment unit
    Apartment(ApartmentArgs),
    /// Value a house together with its plot
    House(HouseArgs),
}

#[derive(Args, Debug)]
pub(crate) struct LandArgs {
    #[arg(long)]
    pub(crate) area: String,
    /// Plot size in acres
    #[arg(long)]
    pub(crate) acres: Decimal,
    #[arg(long, value_parser = parse_shape, default_value = "normal")]
    pub(crate) shape: PlotShape,
}

#[derive(Args, Debug)]
pub(crate) struct ApartmentArgs {
    #[arg(long)]
    pub(crate) area: String,
    /// Floor area in square metres
    #[arg(long)]
    pub(crate) size_sqm: Decimal,
    #[arg(long)]
    pub(crate) year_built: i32,
    #[arg(long, default_value_t = 2)]
    pub(crate) bedrooms: u8,
    #[arg(long, default_value_t = 1)]
    pub(crate) bathrooms: u8,
    #[arg(long, default_value_t = 1)]
    pub(crate) floor: u8,
    /// Amenity name; repeat or comma-separate for several
    #[arg(long, value_delimiter = ',')]
    pub(crate) amenity: Vec<String>,
    #[arg(long)]
    pub(crate) name: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct HouseArgs {
    #[arg(long)]
    pub(crate) area: String,
    /// Built-up area in square metres
    #[arg(long)]
    pub(crate) house_size_sqm: Decimal,
    /// Plot size in acres
    #[arg(long)]
    pub(crate) acres: Decimal,
    #[arg(long)]
    pub(crate) year_built: i32,
    #[arg(long, default_value_t = 3)]
    pub(crate) bedrooms: u8,
    #[arg(long, default_value_t = 2)]
    pub(crate) bathrooms: u8,
    #[arg(long, value_parser = parse_shape, default_value = "normal")]
    pub(crate) shape: PlotShape,
    /// Amenity name; repeat or comma-separate for several
    #[arg(long, value_delimiter = ',')]
    pub(crate) amenity: Vec<String>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AreasArgs {
    /// Also list amenity uplifts for each building kind
    #[arg(long)]
    pub(crate) amenities: bool,
}

impl From<PropertyCommand> for PropertyRequest {
    fn from(command: PropertyCommand) -> Self {
        match command {
            PropertyCommand::Land(args) => PropertyRequest::Land(LandRequest {
                area: args.area,
                land_size_acres: args.acres,
                plot_shape: args.shape,
            }),
            PropertyCommand::Apartment(args) => PropertyRequest::Apartment(ApartmentRequest {
                area: args.area,
                size_sqm: args.size_sqm,
                year_built: args.year_built,
                bedrooms: args.bedrooms,
                bathrooms: args.bathrooms,
                floor: args.floor,
                amenities: args.amenity,
                apartment_name: args.name,
            }),
            PropertyCommand::House(args) => PropertyRequest::House(HouseRequest {
                area: args.area,
                house_size_sqm: args.house_size_sqm,
                land_size_acres: args.acres,
                year_built: args.year_built,
                bedrooms: args.bedrooms,
                bathrooms: args.bathrooms,
                plot_shape: args.shape,
                amenities: args.amenity,
            }),
        }
    }
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(revision) = args.revision {
        config.valuation = ValuationConfig::for_revision(revision);
    }

    let service = estimate_service(&config)?;
    let request = PropertyRequest::from(args.property);
    let estimate = service.estimate_now(&request)?;

    let rendered = serde_json::to_string_pretty(&EstimateResponse::from(estimate))
        .map_err(std::io::Error::from)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn run_areas(args: AreasArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let catalog = build_catalog(&config.reference)?;

    println!("Reference areas ({})", catalog.area_count());
    for area in catalog.areas()? {
        println!(
            "- {}: land {}/acre | apartment {}/sqm | house {}/sqm",
            area.name,
            area.land_price_per_acre,
            area.apartment_price_per_sqm,
            area.house_price_per_sqm
        );
    }

    if args.amenities {
        for kind in [BuildingKind::Apartment, BuildingKind::House] {
            println!("\n{} amenities", kind.label());
            for amenity in catalog.amenities(kind)? {
                println!(
                    "  - {}: +{}%",
                    amenity.name,
                    (amenity.uplift_percent * Decimal::ONE_HUNDRED).normalize()
                );
            }
        }
    }
    Ok(())
}

fn parse_shape(raw: &str) -> Result<PlotShape, String> {
    PlotShape::parse(raw).ok_or_else(|| format!("'{raw}' is not one of normal, corner, irregular"))
}

fn parse_revision(raw: &str) -> Result<FormulaRevision, String> {
    FormulaRevision::parse(raw).ok_or_else(|| format!("'{raw}' is not one of launch, revised"))
}
