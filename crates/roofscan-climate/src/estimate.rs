//! Monthly solar-energy and rainwater-harvest estimation.
//!
//! Both estimates scale a monthly accumulated climate value by the roof
//! area and a set of loss factors. Irradiance becomes electrical energy
//! through panel and balance-of-system efficiencies; rainfall becomes
//! collected volume through a runoff coefficient.

use serde::Serialize;

use crate::month::MONTHS;
use crate::record::ClimatologyRecord;

/// Liters per cubic meter.
const LITERS_PER_M3: f64 = 1000.0;

/// US gallons per liter.
const GALLONS_PER_LITER: f64 = 0.264172;

/// Meters per millimeter, for rainfall-depth volume.
const METERS_PER_MM: f64 = 0.001;

/// Conversion and loss factors for the yield estimates.
///
/// Defaults model a typical fixed photovoltaic installation and a guttered
/// rain collection system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldConfig {
    /// Photovoltaic panel conversion efficiency.
    pub panel_efficiency: f64,
    /// Balance-of-system efficiency (inverter, wiring, soiling).
    pub system_efficiency: f64,
    /// Fraction of rainfall collectible after evaporation and overflow.
    pub runoff_coeff: f64,
}

impl Default for YieldConfig {
    fn default() -> Self {
        Self {
            panel_efficiency: 0.15,
            system_efficiency: 0.80,
            runoff_coeff: 0.9,
        }
    }
}

/// One month of estimated photovoltaic production.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarMonth {
    /// Full month name.
    pub month: &'static str,
    /// Calendar month number, 1 through 12.
    pub month_num: u8,
    /// Days accumulated for this month.
    pub days: u32,
    /// Mean daily irradiance (kWh/m²/day).
    pub daily_radiation_kwh_m2: f64,
    /// Accumulated monthly irradiance (kWh/m²).
    pub monthly_radiation_kwh_m2: f64,
    /// Estimated production for the roof (kWh).
    pub energy_kwh: f64,
    /// Sum of all twelve productions, repeated on every record.
    pub annual_total_kwh: f64,
}

/// One month of estimated rainwater collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainfallMonth {
    /// Full month name.
    pub month: &'static str,
    /// Calendar month number, 1 through 12.
    pub month_num: u8,
    /// Days accumulated for this month.
    pub days: u32,
    /// Mean daily precipitation (mm/day).
    pub daily_precip_mm: f64,
    /// Accumulated monthly precipitation (mm).
    pub monthly_precip_mm: f64,
    /// Collected volume (liters).
    pub water_liters: f64,
    /// Collected volume (US gallons).
    pub water_gallons: f64,
    /// Annual collected volume in liters, repeated on every record.
    pub annual_total_liters: f64,
    /// Annual collected volume in US gallons, repeated on every record.
    pub annual_total_gallons: f64,
}

/// Computes monthly yield estimates from a climatology record and a roof
/// area.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldCalculator {
    config: YieldConfig,
}

impl YieldCalculator {
    /// Create a calculator with the given factors.
    pub fn new(config: YieldConfig) -> Self {
        Self { config }
    }

    /// The factors this calculator applies.
    pub fn config(&self) -> &YieldConfig {
        &self.config
    }

    /// Estimate monthly photovoltaic production for a roof.
    ///
    /// A non-positive roof area clamps every month to zero energy instead
    /// of producing negative artifacts. Irradiance fields still reflect the
    /// climate record.
    pub fn monthly_solar_energy(
        &self,
        record: &ClimatologyRecord,
        roof_area_m2: f64,
    ) -> Vec<SolarMonth> {
        let mut months = Vec::with_capacity(MONTHS.len());
        let mut annual_total_kwh = 0.0;

        for (info, &daily_radiation) in MONTHS.iter().zip(record.solar_irradiance.values()) {
            let monthly_radiation = daily_radiation * f64::from(info.days);
            let energy_kwh = if roof_area_m2 <= 0.0 {
                0.0
            } else {
                monthly_radiation
                    * roof_area_m2
                    * self.config.panel_efficiency
                    * self.config.system_efficiency
            };
            annual_total_kwh += energy_kwh;

            months.push(SolarMonth {
                month: info.name,
                month_num: info.number,
                days: info.days,
                daily_radiation_kwh_m2: daily_radiation,
                monthly_radiation_kwh_m2: monthly_radiation,
                energy_kwh,
                annual_total_kwh: 0.0,
            });
        }

        for month in &mut months {
            month.annual_total_kwh = annual_total_kwh;
        }

        months
    }

    /// Estimate monthly rainwater collection for a roof.
    ///
    /// Rainfall depth over the roof footprint gives a volume; the runoff
    /// coefficient discounts what never reaches the barrel. Non-positive
    /// areas clamp collection to zero.
    pub fn monthly_rainfall_harvest(
        &self,
        record: &ClimatologyRecord,
        roof_area_m2: f64,
    ) -> Vec<RainfallMonth> {
        let mut months = Vec::with_capacity(MONTHS.len());
        let mut annual_total_liters = 0.0;
        let mut annual_total_gallons = 0.0;

        for (info, &daily_precip) in MONTHS.iter().zip(record.precipitation.values()) {
            let monthly_precip = daily_precip * f64::from(info.days);
            let volume_m3 = if roof_area_m2 <= 0.0 {
                0.0
            } else {
                roof_area_m2 * monthly_precip * METERS_PER_MM * self.config.runoff_coeff
            };
            let water_liters = volume_m3 * LITERS_PER_M3;
            let water_gallons = water_liters * GALLONS_PER_LITER;
            annual_total_liters += water_liters;
            annual_total_gallons += water_gallons;

            months.push(RainfallMonth {
                month: info.name,
                month_num: info.number,
                days: info.days,
                daily_precip_mm: daily_precip,
                monthly_precip_mm: monthly_precip,
                water_liters,
                water_gallons,
                annual_total_liters: 0.0,
                annual_total_gallons: 0.0,
            });
        }

        for month in &mut months {
            month.annual_total_liters = annual_total_liters;
            month.annual_total_gallons = annual_total_gallons;
        }

        months
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MonthlySeries;
    use approx::assert_relative_eq;

    fn flat_record(solar: f64, precip: f64) -> ClimatologyRecord {
        ClimatologyRecord {
            solar_irradiance: MonthlySeries::new([solar; 12]),
            precipitation: MonthlySeries::new([precip; 12]),
        }
    }

    #[test]
    fn test_constant_irradiance_solar_energy() {
        // 5 kWh/m²/day on 100 m² at default losses: 31-day months give
        // 1860 kWh, the 29-day February gives 1740 kWh.
        let calc = YieldCalculator::new(YieldConfig::default());
        let solar = calc.monthly_solar_energy(&flat_record(5.0, 0.0), 100.0);

        let jan = &solar[0];
        assert_eq!(jan.month, "January");
        assert_eq!(jan.days, 31);
        assert_relative_eq!(jan.daily_radiation_kwh_m2, 5.0, max_relative = 1e-12);
        assert_relative_eq!(jan.monthly_radiation_kwh_m2, 155.0, max_relative = 1e-12);
        assert_relative_eq!(jan.energy_kwh, 1860.0, max_relative = 1e-12);

        let feb = &solar[1];
        assert_eq!(feb.month, "February");
        assert_eq!(feb.days, 29);
        assert_relative_eq!(feb.monthly_radiation_kwh_m2, 145.0, max_relative = 1e-12);
        assert_relative_eq!(feb.energy_kwh, 1740.0, max_relative = 1e-12);
    }

    #[test]
    fn test_annual_solar_total_matches_sum() {
        let calc = YieldCalculator::new(YieldConfig::default());
        let record = ClimatologyRecord {
            solar_irradiance: MonthlySeries::new([
                2.1, 2.9, 3.8, 4.9, 5.8, 6.3, 6.6, 6.0, 4.9, 3.5, 2.4, 1.9,
            ]),
            precipitation: MonthlySeries::new([0.0; 12]),
        };
        let solar = calc.monthly_solar_energy(&record, 85.0);

        let sum: f64 = solar.iter().map(|m| m.energy_kwh).sum();
        for month in &solar {
            assert_relative_eq!(month.annual_total_kwh, sum, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_january_rainfall_harvest() {
        // 2 mm/day over 31 days on 50 m² with 0.9 runoff is 2.79 m³.
        let calc = YieldCalculator::new(YieldConfig::default());
        let rainfall = calc.monthly_rainfall_harvest(&flat_record(0.0, 2.0), 50.0);

        let jan = &rainfall[0];
        assert_eq!(jan.month, "January");
        assert_eq!(jan.days, 31);
        assert_relative_eq!(jan.monthly_precip_mm, 62.0, max_relative = 1e-12);
        assert_relative_eq!(jan.water_liters, 2790.0, max_relative = 1e-12);
        assert_relative_eq!(jan.water_gallons, 2790.0 * 0.264172, max_relative = 1e-12);
    }

    #[test]
    fn test_annual_rainfall_totals_match_sums() {
        let calc = YieldCalculator::new(YieldConfig::default());
        let record = ClimatologyRecord {
            solar_irradiance: MonthlySeries::new([0.0; 12]),
            precipitation: MonthlySeries::new([
                5.1, 4.6, 3.9, 2.2, 0.9, 0.3, 0.1, 0.1, 0.4, 1.6, 3.2, 4.8,
            ]),
        };
        let rainfall = calc.monthly_rainfall_harvest(&record, 120.0);

        let liters: f64 = rainfall.iter().map(|m| m.water_liters).sum();
        let gallons: f64 = rainfall.iter().map(|m| m.water_gallons).sum();
        for month in &rainfall {
            assert_relative_eq!(month.annual_total_liters, liters, max_relative = 1e-12);
            assert_relative_eq!(month.annual_total_gallons, gallons, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_gallons_track_liters() {
        let calc = YieldCalculator::new(YieldConfig::default());
        let rainfall = calc.monthly_rainfall_harvest(&flat_record(0.0, 3.3), 75.0);
        for month in &rainfall {
            assert_eq!(month.water_gallons, month.water_liters * GALLONS_PER_LITER);
        }
    }

    #[test]
    fn test_zero_area_yields_zero_energy_and_water() {
        let calc = YieldCalculator::new(YieldConfig::default());
        let record = flat_record(5.0, 2.0);

        for month in calc.monthly_solar_energy(&record, 0.0) {
            assert_eq!(month.energy_kwh, 0.0);
            assert_eq!(month.annual_total_kwh, 0.0);
            // Climate fields stay meaningful even with nothing to mount on.
            assert!(month.daily_radiation_kwh_m2 > 0.0);
        }
        for month in calc.monthly_rainfall_harvest(&record, 0.0) {
            assert_eq!(month.water_liters, 0.0);
            assert_eq!(month.water_gallons, 0.0);
            assert_eq!(month.annual_total_liters, 0.0);
        }
    }

    #[test]
    fn test_negative_area_clamps_to_zero() {
        let calc = YieldCalculator::new(YieldConfig::default());
        let record = flat_record(5.0, 2.0);

        for month in calc.monthly_solar_energy(&record, -12.0) {
            assert_eq!(month.energy_kwh, 0.0);
        }
        for month in calc.monthly_rainfall_harvest(&record, -12.0) {
            assert_eq!(month.water_liters, 0.0);
        }
    }

    #[test]
    fn test_custom_runoff_coefficient_scales_harvest() {
        let lossless = YieldCalculator::new(YieldConfig {
            runoff_coeff: 1.0,
            ..YieldConfig::default()
        });
        let half = YieldCalculator::new(YieldConfig {
            runoff_coeff: 0.5,
            ..YieldConfig::default()
        });
        let record = flat_record(0.0, 2.0);

        let full = lossless.monthly_rainfall_harvest(&record, 50.0);
        let halved = half.monthly_rainfall_harvest(&record, 50.0);
        for (a, b) in full.iter().zip(&halved) {
            assert_relative_eq!(b.water_liters, a.water_liters / 2.0, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_report_rows_cover_whole_year() {
        let calc = YieldCalculator::default();
        let record = flat_record(4.0, 1.0);

        let solar = calc.monthly_solar_energy(&record, 10.0);
        let rainfall = calc.monthly_rainfall_harvest(&record, 10.0);
        assert_eq!(solar.len(), 12);
        assert_eq!(rainfall.len(), 12);
        assert_eq!(solar[0].month_num, 1);
        assert_eq!(solar[11].month_num, 12);
        assert_eq!(rainfall[11].month, "December");
    }
}
