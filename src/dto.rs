//! Presentation projections over [`ScheduleResult`].
//!
//! Everything here is a pure read-only projection: a dashboard, report
//! or export layer can consume these without access to the solver or
//! model internals.

use serde::Serialize;

use crate::domain::{ScheduleResult, StaffCategory, OVERTIME_RATE, SHIFT_HOURS};

/// Per-category hire/fire/total summary row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffSummaryRow {
    pub category: &'static str,
    pub initial: u32,
    pub hired: u32,
    pub fired: u32,
    pub total: u32,
}

pub fn staff_summary(result: &ScheduleResult) -> Vec<StaffSummaryRow> {
    StaffCategory::ALL
        .into_iter()
        .filter_map(|category| {
            result.staff_level(category).map(|level| StaffSummaryRow {
                category: category.label(),
                initial: level.initial,
                hired: level.hired,
                fired: level.fired,
                total: level.total,
            })
        })
        .collect()
}

/// Cost components recomputed from the extracted decisions.
///
/// `total` equals `ScheduleResult::total_cost` up to solver
/// floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub regular_cost: f64,
    pub overtime_cost: f64,
    pub hiring_cost: f64,
    pub firing_cost: f64,
    pub total: f64,
}

pub fn cost_breakdown(result: &ScheduleResult) -> CostBreakdown {
    let mut regular_cost = 0.0;
    let mut overtime_cost = 0.0;
    for (key, decision) in &result.assignments {
        let wage = key.category.hourly_wage();
        regular_cost += decision.regular as f64 * wage * SHIFT_HOURS;
        overtime_cost += decision.overtime as f64 * wage * OVERTIME_RATE * SHIFT_HOURS;
    }

    let mut hiring_cost = 0.0;
    let mut firing_cost = 0.0;
    for (category, level) in &result.staff {
        hiring_cost += level.hired as f64 * category.hiring_cost();
        firing_cost += level.fired as f64 * category.firing_cost();
    }

    CostBreakdown {
        regular_cost,
        overtime_cost,
        hiring_cost,
        firing_cost,
        total: regular_cost + overtime_cost + hiring_cost + firing_cost,
    }
}

/// One row of the dense (day, shift, category) schedule table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// 1-based day of month.
    pub day: usize,
    pub shift: &'static str,
    pub category: &'static str,
    pub regular: u32,
    pub overtime: u32,
    pub total: u32,
}

/// Dense table in (day, shift, category) order, one row per slot.
pub fn schedule_rows(result: &ScheduleResult) -> Vec<ScheduleRow> {
    result
        .assignments
        .iter()
        .map(|(key, decision)| ScheduleRow {
            day: key.day + 1,
            shift: key.shift.label(),
            category: key.category.label(),
            regular: decision.regular,
            overtime: decision.overtime,
            total: decision.total(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        ScheduleDay, DayType, SlotKey, StaffLevel, StaffingDecision, Shift,
    };
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn tiny_result() -> ScheduleResult {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let days = vec![ScheduleDay {
            index: 0,
            date,
            day_type: DayType::from_date(date),
        }];

        let mut assignments = BTreeMap::new();
        for shift in Shift::ALL {
            for category in StaffCategory::ALL {
                assignments.insert(
                    SlotKey {
                        day: 0,
                        shift,
                        category,
                    },
                    StaffingDecision {
                        regular: 2,
                        overtime: u32::from(category.overtime_eligible()),
                    },
                );
            }
        }

        let mut staff = BTreeMap::new();
        for category in StaffCategory::ALL {
            staff.insert(
                category,
                StaffLevel {
                    initial: 10,
                    hired: 1,
                    fired: 0,
                    total: 11,
                },
            );
        }

        ScheduleResult {
            month: "January".to_string(),
            days,
            assignments,
            staff,
            total_cost: 0.0,
        }
    }

    #[test]
    fn cost_breakdown_sums_components() {
        let result = tiny_result();
        let costs = cost_breakdown(&result);

        // 2 regular workers per slot, 3 shifts per category.
        let wages: f64 = StaffCategory::ALL
            .iter()
            .map(|c| 2.0 * c.hourly_wage() * SHIFT_HOURS * 3.0)
            .sum();
        assert_eq!(costs.regular_cost, wages);

        // 1 overtime worker per eligible slot.
        let overtime: f64 = [StaffCategory::Caregiver, StaffCategory::SupportStaff]
            .iter()
            .map(|c| c.hourly_wage() * OVERTIME_RATE * SHIFT_HOURS * 3.0)
            .sum();
        assert_eq!(costs.overtime_cost, overtime);

        let hiring: f64 = StaffCategory::ALL.iter().map(|c| c.hiring_cost()).sum();
        assert_eq!(costs.hiring_cost, hiring);
        assert_eq!(costs.firing_cost, 0.0);
        assert_eq!(
            costs.total,
            costs.regular_cost + costs.overtime_cost + costs.hiring_cost
        );
    }

    #[test]
    fn schedule_rows_are_dense_and_one_based() {
        let result = tiny_result();
        let rows = schedule_rows(&result);
        assert_eq!(rows.len(), 9);
        assert!(rows.iter().all(|r| r.day == 1));
        assert_eq!(rows[0].shift, "Morning");
        assert_eq!(rows[0].category, "Caregivers");
        assert_eq!(rows[0].total, rows[0].regular + rows[0].overtime);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let result = tiny_result();
        let json = serde_json::to_value(staff_summary(&result)).unwrap();
        let first = &json[0];
        assert_eq!(first["category"], "Caregivers");
        assert_eq!(first["hired"], 1);
        assert_eq!(first["total"], 11);
    }
}
