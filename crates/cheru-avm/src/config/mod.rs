use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::estimate::ValidationPolicy;
use crate::valuation::{AmenityPolicy, DepreciationPolicy, FormulaRevision, ValuationConfig};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration, loaded once at startup and passed into constructors.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub valuation: ValuationConfig,
    pub validation: ValidationPolicy,
    pub reference: ReferenceConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let allowed_origins = parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = match setting("APP_LOG_FORMAT") {
            Some(raw) => LogFormat::parse(&raw).ok_or(ConfigError::UnknownSetting {
                key: "APP_LOG_FORMAT",
                value: raw,
            })?,
            None => LogFormat::default(),
        };

        Ok(Self {
            environment,
            server: ServerConfig {
                host,
                port,
                allowed_origins,
            },
            telemetry: TelemetryConfig { log_level, format },
            valuation: load_valuation()?,
            validation: load_validation()?,
            reference: ReferenceConfig {
                areas_csv: setting("AVM_AREAS_CSV").map(PathBuf::from),
                amenities_csv: setting("AVM_AMENITIES_CSV").map(PathBuf::from),
            },
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed by CORS. `*` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Log output controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Optional CSV exports layered on top of the seeded reference data.
#[derive(Debug, Clone, Default)]
pub struct ReferenceConfig {
    pub areas_csv: Option<PathBuf>,
    pub amenities_csv: Option<PathBuf>,
}

fn load_valuation() -> Result<ValuationConfig, ConfigError> {
    let mut valuation = match setting("AVM_FORMULA_REVISION") {
        Some(raw) => {
            let revision = FormulaRevision::parse(&raw).ok_or(ConfigError::UnknownSetting {
                key: "AVM_FORMULA_REVISION",
                value: raw,
            })?;
            ValuationConfig::for_revision(revision)
        }
        None => ValuationConfig::default(),
    };

    if let Some(raw) = setting("AVM_DEPRECIATION_POLICY") {
        valuation.depreciation =
            DepreciationPolicy::parse(&raw).ok_or(ConfigError::UnknownSetting {
                key: "AVM_DEPRECIATION_POLICY",
                value: raw,
            })?;
    }
    if let Some(raw) = setting("AVM_AMENITY_POLICY") {
        valuation.amenities = AmenityPolicy::parse(&raw).ok_or(ConfigError::UnknownSetting {
            key: "AVM_AMENITY_POLICY",
            value: raw,
        })?;
    }
    if let Some(irregular) = decimal_setting("AVM_IRREGULAR_MULTIPLIER")? {
        valuation.shapes = valuation.shapes.with_irregular(irregular);
    }
    if let Some(low) = decimal_setting("AVM_RANGE_LOW")? {
        valuation.range.low = low;
    }
    if let Some(high) = decimal_setting("AVM_RANGE_HIGH")? {
        valuation.range.high = high;
    }

    if !valuation.range.brackets_estimate() {
        return Err(ConfigError::InvalidRange {
            low: valuation.range.low,
            high: valuation.range.high,
        });
    }
    if !valuation.shapes.is_ordered() {
        return Err(ConfigError::UnorderedShapes {
            irregular: valuation.shapes.irregular,
            normal: valuation.shapes.normal,
            corner: valuation.shapes.corner,
        });
    }

    Ok(valuation)
}

fn load_validation() -> Result<ValidationPolicy, ConfigError> {
    let mut validation = ValidationPolicy::default();
    if let Some(year) = year_setting("AVM_MIN_YEAR_BUILT")? {
        validation.min_year_built = year;
    }
    if let Some(year) = year_setting("AVM_CLASSIC_YEAR")? {
        validation.classic_year = year;
    }

    if validation.classic_year < validation.min_year_built {
        return Err(ConfigError::ClassicBeforeMinimum {
            classic_year: validation.classic_year,
            min_year_built: validation.min_year_built,
        });
    }
    Ok(validation)
}

// Unset and blank variables are treated the same.
fn setting(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn decimal_setting(key: &'static str) -> Result<Option<Decimal>, ConfigError> {
    setting(key)
        .map(|raw| Decimal::from_str(&raw).map_err(|_| ConfigError::InvalidDecimal { key, value: raw }))
        .transpose()
}

fn year_setting(key: &'static str) -> Result<Option<i32>, ConfigError> {
    setting(key)
        .map(|raw| raw.parse::<i32>().map_err(|_| ConfigError::InvalidYear { key, value: raw }))
        .transpose()
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    UnknownSetting {
        key: &'static str,
        value: String,
    },
    InvalidDecimal {
        key: &'static str,
        value: String,
    },
    InvalidYear {
        key: &'static str,
        value: String,
    },
    InvalidRange {
        low: Decimal,
        high: Decimal,
    },
    UnorderedShapes {
        irregular: Decimal,
        normal: Decimal,
        corner: Decimal,
    },
    ClassicBeforeMinimum {
        classic_year: i32,
        min_year_built: i32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::UnknownSetting { key, value } => {
                write!(f, "{key} does not recognise '{value}'")
            }
            ConfigError::InvalidDecimal { key, value } => {
                write!(f, "{key} must be a decimal number (found '{value}')")
            }
            ConfigError::InvalidYear { key, value } => {
                write!(f, "{key} must be a calendar year (found '{value}')")
            }
            ConfigError::InvalidRange { low, high } => write!(
                f,
                "range factors must satisfy 0 < low <= 1 <= high (found low={low}, high={high})"
            ),
            ConfigError::UnorderedShapes {
                irregular,
                normal,
                corner,
            } => write!(
                f,
                "shape multipliers must satisfy irregular <= normal <= corner \
                 (found {irregular}, {normal}, {corner})"
            ),
            ConfigError::ClassicBeforeMinimum {
                classic_year,
                min_year_built,
            } => write!(
                f,
                "AVM_CLASSIC_YEAR ({classic_year}) must not precede AVM_MIN_YEAR_BUILT ({min_year_built})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
