//! # roofscan-climate
//!
//! NASA POWER climatology access and monthly yield estimation.
//!
//! The POWER climatology endpoint serves long-term-average daily climate
//! values per calendar month. This crate validates those responses into a
//! typed [`ClimatologyRecord`] and turns a record plus a roof area into
//! monthly photovoltaic-production and rainwater-harvest estimates.
//!
//! ## Example
//!
//! ```no_run
//! use roofscan_climate::{PowerClient, YieldCalculator, YieldConfig};
//!
//! # async fn run() -> roofscan_climate::Result<()> {
//! let client = PowerClient::new();
//! let record = client.fetch_climatology(34.05, -118.24).await?;
//!
//! let calculator = YieldCalculator::new(YieldConfig::default());
//! let solar = calculator.monthly_solar_energy(&record, 120.0);
//! println!("January: {:.1} kWh", solar[0].energy_kwh);
//! # Ok(())
//! # }
//! ```

mod error;
mod estimate;
mod month;
mod power;
mod record;

pub use error::ClimateError;
pub use estimate::{RainfallMonth, SolarMonth, YieldCalculator, YieldConfig};
pub use month::{MonthInfo, MONTHS};
pub use power::{PowerClient, DEFAULT_POWER_BASE_URL};
pub use record::{
    ClimatologyRecord, MonthlySeries, PowerProperties, PowerResponse, PRECIP_PARAM, SOLAR_PARAM,
};

/// Result type for climate operations.
pub type Result<T> = std::result::Result<T, ClimateError>;
