//! Cost-minimizing staffing plans for round-the-clock care facilities.
//!
//! The crate decides, per day and shift over a 7–31 day horizon, how
//! many workers of each role are on regular duty versus overtime, and
//! how many workers to hire or fire at the start of the horizon. Demand
//! is forecast from a historical table; the plan is found by a
//! mixed-integer linear solver behind `good_lp`'s backend interface.
//!
//! Pipeline: [`forecast`] feeds [`model::StaffingModel::build`], whose
//! output [`solver::solve`] hands to a MILP backend, and
//! [`extract::extract`] turns an optimal solution into a
//! [`domain::ScheduleResult`] for presentation layers ([`dto`]).
//!
//! Known model simplifications, inherited deliberately: the per-shift
//! capacity constraint does not stop one worker being counted in
//! several shifts of the same day, and horizons not divisible by 7
//! leave the trailing partial week outside the weekly-hours cap.

pub mod domain;
pub mod dto;
pub mod error;
pub mod extract;
pub mod forecast;
pub mod model;
pub mod solver;

pub use domain::{InitialStaff, ScheduleResult};
pub use error::{StaffingError, StaffingResult};
pub use model::StaffingModel;
pub use solver::SolveStatus;
