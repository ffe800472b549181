//! Domain model for care-facility staffing plans.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Hours in one shift. Each day is partitioned into exactly three
/// non-overlapping 8-hour shifts.
pub const SHIFT_HOURS: f64 = 8.0;

/// Overtime pay multiplier relative to the regular hourly wage.
pub const OVERTIME_RATE: f64 = 1.5;

/// A staff role with fixed cost and labor-rule parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StaffCategory {
    Caregiver,
    Nurse,
    SupportStaff,
}

impl StaffCategory {
    pub const ALL: [StaffCategory; 3] = [
        StaffCategory::Caregiver,
        StaffCategory::Nurse,
        StaffCategory::SupportStaff,
    ];

    pub fn hourly_wage(self) -> f64 {
        match self {
            StaffCategory::Caregiver => 300.0,
            StaffCategory::Nurse => 450.0,
            StaffCategory::SupportStaff => 250.0,
        }
    }

    /// Regular hours one worker may be scheduled per week.
    pub fn regular_weekly_hours(self) -> f64 {
        match self {
            StaffCategory::Caregiver => 40.0,
            StaffCategory::Nurse => 35.0,
            StaffCategory::SupportStaff => 30.0,
        }
    }

    pub fn hiring_cost(self) -> f64 {
        match self {
            StaffCategory::Caregiver => 5000.0,
            StaffCategory::Nurse => 7500.0,
            StaffCategory::SupportStaff => 4000.0,
        }
    }

    pub fn firing_cost(self) -> f64 {
        match self {
            StaffCategory::Caregiver => 3500.0,
            StaffCategory::Nurse => 5000.0,
            StaffCategory::SupportStaff => 2500.0,
        }
    }

    /// Nurses are never overtime-eligible due to licensing rules.
    pub fn overtime_eligible(self) -> bool {
        !matches!(self, StaffCategory::Nurse)
    }

    pub fn label(self) -> &'static str {
        match self {
            StaffCategory::Caregiver => "Caregivers",
            StaffCategory::Nurse => "Nurses",
            StaffCategory::SupportStaff => "Support Staff",
        }
    }
}

impl fmt::Display for StaffCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the three shifts partitioning a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Evening,
    Night,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Evening, Shift::Night];

    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Evening => "Evening",
            Shift::Night => "Night",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekday/weekend classification driving the demand uplift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }
}

/// One calendar day in the scheduling horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleDay {
    /// 0-based position in the horizon.
    pub index: usize,
    pub date: NaiveDate,
    pub day_type: DayType,
}

/// Key identifying one (day, shift, category) staffing slot.
///
/// Field order gives day-major iteration when used in a `BTreeMap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub day: usize,
    pub shift: Shift,
    pub category: StaffCategory,
}

/// Headcount on regular duty and on overtime for one slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StaffingDecision {
    pub regular: u32,
    /// Always zero for categories that are not overtime-eligible.
    pub overtime: u32,
}

impl StaffingDecision {
    pub fn total(self) -> u32 {
        self.regular + self.overtime
    }
}

/// Workforce size per category before hiring and firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitialStaff {
    pub caregivers: u32,
    pub nurses: u32,
    pub support_staff: u32,
}

impl InitialStaff {
    pub fn get(self, category: StaffCategory) -> u32 {
        match category {
            StaffCategory::Caregiver => self.caregivers,
            StaffCategory::Nurse => self.nurses,
            StaffCategory::SupportStaff => self.support_staff,
        }
    }
}

impl Default for InitialStaff {
    fn default() -> Self {
        Self {
            caregivers: 40,
            nurses: 30,
            support_staff: 20,
        }
    }
}

/// Net workforce per category after the horizon's hire/fire decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaffLevel {
    pub initial: u32,
    pub hired: u32,
    pub fired: u32,
    /// `initial + hired - fired`, valid for the entire horizon.
    pub total: u32,
}

/// The full staffing plan extracted from an optimal solve.
///
/// Immutable once produced; a new horizon or configuration requires a
/// fresh build/solve/extract cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleResult {
    /// Resolved month name the demand forecast was taken from.
    pub month: String,
    pub days: Vec<ScheduleDay>,
    /// One entry for every (day, shift, category) triple in the horizon.
    pub assignments: BTreeMap<SlotKey, StaffingDecision>,
    pub staff: BTreeMap<StaffCategory, StaffLevel>,
    /// Objective value reported by the solver.
    pub total_cost: f64,
}

impl ScheduleResult {
    /// Staffing decision for one slot; zero if the slot is outside the horizon.
    pub fn decision(&self, day: usize, shift: Shift, category: StaffCategory) -> StaffingDecision {
        self.assignments
            .get(&SlotKey { day, shift, category })
            .copied()
            .unwrap_or_default()
    }

    pub fn staff_level(&self, category: StaffCategory) -> Option<StaffLevel> {
        self.staff.get(&category).copied()
    }

    pub fn num_days(&self) -> usize {
        self.days.len()
    }
}
