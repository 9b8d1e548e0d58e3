//! Climatology record schema and validation.
//!
//! The POWER climatology endpoint answers with a nested JSON document of
//! which only `properties.parameter` is consumed. Its free-form maps are
//! validated into a [`ClimatologyRecord`] in one step, so the yield
//! calculators never see a missing variable or month.

use serde::Deserialize;
use std::collections::HashMap;

use crate::month::MONTHS;
use crate::{ClimateError, Result};

/// POWER parameter name for all-sky downward shortwave irradiance
/// (kWh/m²/day).
pub const SOLAR_PARAM: &str = "ALLSKY_SFC_SW_DWN";

/// POWER parameter name for bias-corrected precipitation (mm/day).
pub const PRECIP_PARAM: &str = "PRECTOTCORR";

/// Twelve monthly values in calendar order (index 0 is January).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlySeries([f64; 12]);

impl MonthlySeries {
    /// Wrap twelve values given in calendar order.
    pub fn new(values: [f64; 12]) -> Self {
        Self(values)
    }

    /// The values in calendar order.
    pub fn values(&self) -> &[f64; 12] {
        &self.0
    }
}

/// Long-term-average daily climate values per calendar month for one
/// location.
///
/// Values are passed through as served. POWER marks gaps in its source
/// data with a -999 fill value, which shows up here unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClimatologyRecord {
    /// Mean daily solar irradiance per month (kWh/m²/day).
    pub solar_irradiance: MonthlySeries,
    /// Mean daily precipitation per month (mm/day).
    pub precipitation: MonthlySeries,
}

impl ClimatologyRecord {
    /// Validate a POWER response into a record.
    ///
    /// Requires all twelve month abbreviations under both parameters.
    /// Extra keys such as the `ANN` annual aggregate are ignored.
    pub fn from_power(response: &PowerResponse) -> Result<Self> {
        Ok(Self {
            solar_irradiance: monthly_series(response, SOLAR_PARAM)?,
            precipitation: monthly_series(response, PRECIP_PARAM)?,
        })
    }
}

/// The subset of a POWER climatology response this crate reads.
#[derive(Debug, Clone, Deserialize)]
pub struct PowerResponse {
    /// GeoJSON-style feature properties.
    pub properties: PowerProperties,
}

/// `properties` member of a POWER response.
#[derive(Debug, Clone, Deserialize)]
pub struct PowerProperties {
    /// Requested parameters keyed by name, then by month abbreviation.
    pub parameter: HashMap<String, HashMap<String, f64>>,
}

fn monthly_series(response: &PowerResponse, variable: &str) -> Result<MonthlySeries> {
    let by_month = response.properties.parameter.get(variable).ok_or_else(|| {
        ClimateError::MissingVariable {
            variable: variable.to_string(),
        }
    })?;

    let mut values = [0.0; 12];
    for (slot, month) in values.iter_mut().zip(MONTHS.iter()) {
        *slot = *by_month
            .get(month.abbr)
            .ok_or_else(|| ClimateError::MissingMonth {
                variable: variable.to_string(),
                month: month.abbr,
            })?;
    }

    Ok(MonthlySeries(values))
}
