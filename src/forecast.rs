//! Demand forecasting from historical monthly tables.
//!
//! Forecasting is a pure lookup: a static table of weekday base demand
//! per (month, shift, category), with a 10% uplift on weekends. Months
//! without historical data fall back to [`DEFAULT_MONTH`].

use chrono::Month;
use log::warn;

use crate::domain::{DayType, Shift, StaffCategory};

/// Month substituted when the requested one is unrecognized or has no
/// historical demand data.
pub const DEFAULT_MONTH: Month = Month::February;

// Weekday base demand, rows ordered Morning/Evening/Night, columns
// ordered Caregiver/Nurse/SupportStaff.
type BaseTable = [[u32; 3]; 3];

const FEBRUARY_TABLE: BaseTable = [[12, 7, 6], [14, 6, 5], [9, 5, 4]];

fn base_table(month: Month) -> Option<BaseTable> {
    match month {
        Month::September => Some([[12, 7, 6], [14, 6, 5], [9, 5, 4]]),
        Month::October => Some([[11, 6, 5], [13, 5, 4], [8, 4, 3]]),
        Month::November => Some([[10, 6, 5], [12, 5, 4], [8, 4, 3]]),
        Month::December => Some([[13, 8, 7], [15, 7, 6], [10, 6, 5]]),
        Month::January => Some([[14, 9, 8], [16, 8, 7], [11, 7, 6]]),
        Month::February => Some(FEBRUARY_TABLE),
        _ => None,
    }
}

/// Required headcount per (shift, category) for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemandForecast {
    counts: [[u32; 3]; 3],
}

impl DemandForecast {
    pub fn get(&self, shift: Shift, category: StaffCategory) -> u32 {
        self.counts[shift as usize][category as usize]
    }
}

/// Resolves a month name, substituting [`DEFAULT_MONTH`] when it does
/// not parse. The substitution is logged because it silently changes
/// the forecasted demand.
pub fn resolve_month(name: &str) -> Month {
    match name.parse::<Month>() {
        Ok(month) => month,
        Err(_) => {
            warn!(
                "unrecognized month {:?}, substituting {}",
                name,
                DEFAULT_MONTH.name()
            );
            DEFAULT_MONTH
        }
    }
}

/// Forecasts required headcount for one day of the given month.
///
/// Weekend demand is the weekday base scaled by 1.10 and truncated
/// toward zero. Deterministic and side-effect free apart from logging
/// the fallback for months outside the historical table.
pub fn forecast(month: Month, day_type: DayType) -> DemandForecast {
    let base = base_table(month).unwrap_or_else(|| {
        warn!(
            "no historical demand for {}, substituting {}",
            month.name(),
            DEFAULT_MONTH.name()
        );
        FEBRUARY_TABLE
    });

    let counts = match day_type {
        DayType::Weekday => base,
        // 10% weekend uplift, truncated. Integer `v * 11 / 10` equals
        // floor(1.1 * v) for all non-negative v.
        DayType::Weekend => base.map(|row| row.map(|v| v * 11 / 10)),
    };

    DemandForecast { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_MONTHS: [Month; 6] = [
        Month::September,
        Month::October,
        Month::November,
        Month::December,
        Month::January,
        Month::February,
    ];

    #[test]
    fn forecast_is_deterministic() {
        for month in TABLE_MONTHS {
            for day_type in [DayType::Weekday, DayType::Weekend] {
                assert_eq!(forecast(month, day_type), forecast(month, day_type));
            }
        }
    }

    #[test]
    fn weekend_demand_is_floored_uplift_of_weekday() {
        for month in TABLE_MONTHS {
            let weekday = forecast(month, DayType::Weekday);
            let weekend = forecast(month, DayType::Weekend);
            for shift in Shift::ALL {
                for category in StaffCategory::ALL {
                    let base = weekday.get(shift, category);
                    let expected = (base as f64 * 1.1).floor() as u32;
                    assert_eq!(
                        weekend.get(shift, category),
                        expected,
                        "{month:?}/{shift:?}/{category:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn january_morning_caregivers() {
        let demand = forecast(Month::January, DayType::Weekday);
        assert_eq!(demand.get(Shift::Morning, StaffCategory::Caregiver), 14);
        let weekend = forecast(Month::January, DayType::Weekend);
        // floor(14 * 1.1) = 15
        assert_eq!(weekend.get(Shift::Morning, StaffCategory::Caregiver), 15);
    }

    #[test]
    fn unrecognized_month_falls_back_without_raising() {
        assert_eq!(resolve_month("Smarch"), DEFAULT_MONTH);
        assert_eq!(resolve_month("January"), Month::January);
    }

    #[test]
    fn month_outside_table_uses_default_table() {
        // March parses as a month but has no historical entry.
        let march = forecast(Month::March, DayType::Weekday);
        let default = forecast(DEFAULT_MONTH, DayType::Weekday);
        assert_eq!(march, default);
    }
}
