//! Translation of solved variable values into a [`ScheduleResult`].

use std::collections::BTreeMap;

use crate::domain::{
    ScheduleResult, Shift, SlotKey, StaffCategory, StaffLevel, StaffingDecision,
};
use crate::error::{StaffingError, StaffingResult};
use crate::solver::{SolveStatus, SolvedStaffing};

/// Reads the solved variable values into a structured schedule.
///
/// Requires an optimal solve; any other status is surfaced as
/// [`StaffingError::NotOptimal`]. Every (day, shift, category) triple in
/// the horizon gets an entry, with overtime defaulting to zero for
/// ineligible categories.
pub fn extract(solved: &SolvedStaffing) -> StaffingResult<ScheduleResult> {
    if solved.status != SolveStatus::Optimal {
        return Err(StaffingError::NotOptimal {
            status: solved.status,
        });
    }

    let mut assignments = BTreeMap::new();
    for day in &solved.days {
        for shift in Shift::ALL {
            for category in StaffCategory::ALL {
                let key = SlotKey {
                    day: day.index,
                    shift,
                    category,
                };
                let regular = round_count(solved.regular.get(&key).copied().unwrap_or(0.0));
                let overtime = round_count(solved.overtime.get(&key).copied().unwrap_or(0.0));
                assignments.insert(key, StaffingDecision { regular, overtime });
            }
        }
    }

    let mut staff = BTreeMap::new();
    for (i, category) in StaffCategory::ALL.into_iter().enumerate() {
        staff.insert(
            category,
            StaffLevel {
                initial: solved.initial.get(category),
                hired: round_count(solved.hired[i]),
                fired: round_count(solved.fired[i]),
                total: round_count(solved.total[i]),
            },
        );
    }

    Ok(ScheduleResult {
        month: solved.month_name.to_string(),
        days: solved.days.clone(),
        assignments,
        staff,
        total_cost: solved.objective_value,
    })
}

/// Solver output for integer variables is a floating-point
/// approximation; round to the nearest non-negative headcount.
fn round_count(value: f64) -> u32 {
    let rounded = value.round();
    debug_assert!(rounded > -0.5, "negative headcount {value} from solver");
    rounded.max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InitialStaff;
    use crate::model::StaffingModel;
    use crate::solver;

    #[test]
    fn rounds_to_nearest_non_negative_integer() {
        assert_eq!(round_count(13.9999998), 14);
        assert_eq!(round_count(14.0000002), 14);
        assert_eq!(round_count(0.0), 0);
        assert_eq!(round_count(-0.0000001), 0);
    }

    #[test]
    fn extraction_requires_optimal_status() {
        let model = StaffingModel::build("January", 2025, 3, None);
        let mut solved = solver::solve(model).unwrap();
        solved.status = SolveStatus::Infeasible;

        let err = extract(&solved).unwrap_err();
        assert!(matches!(
            err,
            StaffingError::NotOptimal {
                status: SolveStatus::Infeasible
            }
        ));
        assert!(err.to_string().contains("Infeasible"));
    }

    #[test]
    fn every_slot_has_an_entry() {
        let model = StaffingModel::build("January", 2025, 7, None);
        let solved = solver::solve(model).unwrap();
        let result = extract(&solved).unwrap();

        assert_eq!(result.assignments.len(), 7 * 3 * 3);
        for day in 0..7 {
            for shift in Shift::ALL {
                // Nurse overtime defaults to zero, never missing.
                let nurse = result.decision(day, shift, StaffCategory::Nurse);
                assert_eq!(nurse.overtime, 0);
            }
        }
    }

    #[test]
    fn staff_levels_cover_all_categories() {
        let model = StaffingModel::build(
            "January",
            2025,
            7,
            Some(InitialStaff {
                caregivers: 10,
                nurses: 5,
                support_staff: 2,
            }),
        );
        let solved = solver::solve(model).unwrap();
        let result = extract(&solved).unwrap();

        for category in StaffCategory::ALL {
            let level = result.staff_level(category).unwrap();
            assert_eq!(
                level.total,
                level.initial + level.hired - level.fired,
                "{category}"
            );
        }
        assert_eq!(result.staff_level(StaffCategory::Nurse).unwrap().initial, 5);
    }
}
