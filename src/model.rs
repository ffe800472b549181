//! MILP model construction for one staffing horizon.
//!
//! [`StaffingModel::build`] turns a (month, horizon, initial staff)
//! configuration into a fully constrained minimization problem:
//! integer headcount variables per (day, shift, category) slot plus
//! per-category hire/fire/total variables, with the labor-rule and
//! coverage constraints linking them. Building never fails: bad months
//! degrade to the forecaster default and the horizon is clamped to the
//! month's length. Each call produces an independent, disposable model.

use chrono::{Days, Month, NaiveDate};
use good_lp::{constraint, variable, Constraint, Expression, ProblemVariables, Variable};
use log::debug;
use std::collections::BTreeMap;

use crate::domain::{
    DayType, InitialStaff, ScheduleDay, Shift, SlotKey, StaffCategory, OVERTIME_RATE, SHIFT_HOURS,
};
use crate::forecast;

/// A built, not yet solved, staffing problem.
///
/// Owns the variable definitions and constraints for one
/// build/solve/extract cycle; holds no external resources.
pub struct StaffingModel {
    pub(crate) month: Month,
    pub(crate) days: Vec<ScheduleDay>,
    pub(crate) demand: BTreeMap<SlotKey, u32>,
    pub(crate) initial: InitialStaff,
    pub(crate) vars: ProblemVariables,
    pub(crate) objective: Expression,
    pub(crate) constraints: Vec<Constraint>,
    pub(crate) regular: BTreeMap<SlotKey, Variable>,
    pub(crate) overtime: BTreeMap<SlotKey, Variable>,
    pub(crate) hired: [Variable; 3],
    pub(crate) fired: [Variable; 3],
    pub(crate) total: [Variable; 3],
}

impl StaffingModel {
    /// Builds the optimization model for `num_days` starting at day 1 of
    /// (`month_name`, `year`).
    ///
    /// `num_days` is clamped to `[1, days in month]`; an unrecognized
    /// month falls back to the forecaster default; `None` initial staff
    /// uses the per-category defaults.
    pub fn build(
        month_name: &str,
        year: i32,
        num_days: u32,
        initial_staff: Option<InitialStaff>,
    ) -> StaffingModel {
        let month = forecast::resolve_month(month_name);
        let initial = initial_staff.unwrap_or_default();

        let days = horizon_days(month, year, num_days);
        debug!(
            "building staffing model: {} {}, {} days",
            month.name(),
            year,
            days.len()
        );

        // Per-day demand, derived from the historical table once per day.
        let mut demand = BTreeMap::new();
        for day in &days {
            let forecasted = forecast::forecast(month, day.day_type);
            for shift in Shift::ALL {
                for category in StaffCategory::ALL {
                    let key = SlotKey {
                        day: day.index,
                        shift,
                        category,
                    };
                    demand.insert(key, forecasted.get(shift, category));
                }
            }
        }

        let mut vars = ProblemVariables::new();

        // Regular headcount for every slot; overtime only where eligible.
        let mut regular = BTreeMap::new();
        let mut overtime = BTreeMap::new();
        for key in demand.keys() {
            regular.insert(*key, vars.add(variable().integer().min(0)));
            if key.category.overtime_eligible() {
                overtime.insert(*key, vars.add(variable().integer().min(0)));
            }
        }

        // One hire/fire/total triple per category, decided at horizon start.
        let hired: [Variable; 3] = std::array::from_fn(|_| vars.add(variable().integer().min(0)));
        let fired: [Variable; 3] = std::array::from_fn(|_| vars.add(variable().integer().min(0)));
        let total: [Variable; 3] = std::array::from_fn(|_| vars.add(variable().integer().min(0)));

        let mut constraints = Vec::new();

        // total = initial + hired - fired
        for (i, category) in StaffCategory::ALL.into_iter().enumerate() {
            let (h, f, t) = (hired[i], fired[i], total[i]);
            let base = initial.get(category) as f64;
            constraints.push(constraint!(t - h + f == base));
        }

        // Coverage: regular (+ overtime where eligible) meets demand.
        for (key, &required) in &demand {
            let reg = regular[key];
            let required = required as f64;
            match overtime.get(key) {
                Some(&ot) => constraints.push(constraint!(reg + ot >= required)),
                None => constraints.push(constraint!(reg >= required)),
            }
        }

        // Capacity: no shift may use more regular staff than the category
        // has in total. Does not prevent counting one worker across
        // several shifts of the same day; see the crate docs.
        for (key, &reg) in &regular {
            let t = total[key.category as usize];
            constraints.push(constraint!(reg <= t));
        }

        // Weekly hours, complete 7-day windows only. A partial trailing
        // week is left unconstrained.
        let full_weeks = days.len() / 7;
        for (i, category) in StaffCategory::ALL.into_iter().enumerate() {
            for week in 0..full_weeks {
                let mut hours = Expression::from(0.0);
                for day in week * 7..(week + 1) * 7 {
                    for shift in Shift::ALL {
                        hours += regular[&SlotKey {
                            day,
                            shift,
                            category,
                        }] * SHIFT_HOURS;
                    }
                }
                let capacity_hours = total[i] * category.regular_weekly_hours();
                constraints.push(constraint!(hours <= capacity_hours));
            }
        }

        // Shift balance over the whole horizon: night regular staffing
        // never exceeds combined morning + evening.
        for category in StaffCategory::ALL {
            let mut morning_evening = Expression::from(0.0);
            let mut night = Expression::from(0.0);
            for (key, &reg) in &regular {
                if key.category != category {
                    continue;
                }
                match key.shift {
                    Shift::Morning | Shift::Evening => morning_evening += reg,
                    Shift::Night => night += reg,
                }
            }
            constraints.push(constraint!(morning_evening >= night));
        }

        // Objective: wages + overtime premium + hiring + firing.
        let mut objective = Expression::from(0.0);
        for (key, &reg) in &regular {
            objective += reg * (key.category.hourly_wage() * SHIFT_HOURS);
        }
        for (key, &ot) in &overtime {
            objective += ot * (key.category.hourly_wage() * OVERTIME_RATE * SHIFT_HOURS);
        }
        for (i, category) in StaffCategory::ALL.into_iter().enumerate() {
            objective += hired[i] * category.hiring_cost();
            objective += fired[i] * category.firing_cost();
        }

        StaffingModel {
            month,
            days,
            demand,
            initial,
            vars,
            objective,
            constraints,
            regular,
            overtime,
            hired,
            fired,
            total,
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn days(&self) -> &[ScheduleDay] {
        &self.days
    }

    pub fn initial_staff(&self) -> InitialStaff {
        self.initial
    }

    /// Forecasted demand for one slot, if it is inside the horizon.
    pub fn demand_for(&self, day: usize, shift: Shift, category: StaffCategory) -> Option<u32> {
        self.demand.get(&SlotKey { day, shift, category }).copied()
    }

    pub fn has_overtime_slot(&self, day: usize, shift: Shift, category: StaffCategory) -> bool {
        self.overtime
            .contains_key(&SlotKey { day, shift, category })
    }

    pub fn regular_slot_count(&self) -> usize {
        self.regular.len()
    }

    pub fn overtime_slot_count(&self) -> usize {
        self.overtime.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

/// Contiguous run of days starting at day 1 of the month, clipped to the
/// month's actual length.
fn horizon_days(month: Month, year: i32, num_days: u32) -> Vec<ScheduleDay> {
    let first = first_of_month(month, year);
    let clamped = num_days.clamp(1, days_in_month(month, year));

    (0..clamped as usize)
        .map(|index| {
            let date = first + Days::new(index as u64);
            ScheduleDay {
                index,
                date,
                day_type: DayType::from_date(date),
            }
        })
        .collect()
}

fn first_of_month(month: Month, year: i32) -> NaiveDate {
    // Month ordinals are always in 1..=12.
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .unwrap_or_else(|| panic!("invalid first day of {} {}", month.name(), year))
}

fn days_in_month(month: Month, year: i32) -> u32 {
    let first = first_of_month(month, year);
    let next = match month.succ() {
        Month::January => first_of_month(Month::January, year + 1),
        succ => first_of_month(succ, year),
    };
    (next - first).num_days() as u32
}
