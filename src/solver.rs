//! Solver adapter: submits a built model to a MILP backend.
//!
//! The backend is anything implementing `good_lp::Solver` (branch-and-
//! bound over the integer program happens there, not here). [`solve`]
//! uses the compiled-in default backend; [`solve_with`] accepts any
//! other conforming backend without touching model construction.

use good_lp::{default_solver, ResolutionError, Solution, Solver, SolverModel};
use log::{debug, info};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::{InitialStaff, ScheduleDay, SlotKey};
use crate::error::{StaffingError, StaffingResult};
use crate::model::StaffingModel;

/// Outcome reported by the MILP backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    NotSolved,
    Undefined,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SolveStatus::Optimal => "Optimal",
            SolveStatus::Infeasible => "Infeasible",
            SolveStatus::Unbounded => "Unbounded",
            SolveStatus::NotSolved => "NotSolved",
            SolveStatus::Undefined => "Undefined",
        };
        f.write_str(s)
    }
}

/// A solved staffing problem: the reported status plus, when optimal,
/// the raw value of every decision variable.
///
/// Values are kept as the solver's floating-point output; rounding to
/// headcounts happens during extraction.
pub struct SolvedStaffing {
    pub status: SolveStatus,
    pub(crate) month_name: &'static str,
    pub(crate) days: Vec<ScheduleDay>,
    pub(crate) initial: InitialStaff,
    pub(crate) regular: BTreeMap<SlotKey, f64>,
    pub(crate) overtime: BTreeMap<SlotKey, f64>,
    pub(crate) hired: [f64; 3],
    pub(crate) fired: [f64; 3],
    pub(crate) total: [f64; 3],
    pub(crate) objective_value: f64,
}

/// Solves the model with the default backend.
///
/// A non-optimal status (infeasible, unbounded) is a reportable business
/// outcome returned in [`SolvedStaffing::status`]; only a backend that
/// cannot run at all is an error. No retries happen at this layer.
pub fn solve(model: StaffingModel) -> StaffingResult<SolvedStaffing> {
    solve_with(model, default_solver)
}

/// Solves the model with a caller-supplied backend.
pub fn solve_with<S>(model: StaffingModel, solver: S) -> StaffingResult<SolvedStaffing>
where
    S: Solver,
    S::Model: SolverModel<Error = ResolutionError>,
{
    let StaffingModel {
        month,
        days,
        initial,
        vars,
        objective,
        constraints,
        regular,
        overtime,
        hired,
        fired,
        total,
        ..
    } = model;

    debug!(
        "solving: {} variables, {} constraints",
        regular.len() + overtime.len() + 9,
        constraints.len()
    );

    let mut problem = vars.minimise(objective.clone()).using(solver);
    for c in constraints {
        problem = problem.with(c);
    }

    let month_name = month.name();
    match problem.solve() {
        Ok(solution) => {
            let objective_value = solution.eval(objective);
            info!("solve finished: Optimal, objective {objective_value:.2}");
            Ok(SolvedStaffing {
                status: SolveStatus::Optimal,
                month_name,
                initial,
                regular: regular
                    .iter()
                    .map(|(k, v)| (*k, solution.value(*v)))
                    .collect(),
                overtime: overtime
                    .iter()
                    .map(|(k, v)| (*k, solution.value(*v)))
                    .collect(),
                hired: hired.map(|v| solution.value(v)),
                fired: fired.map(|v| solution.value(v)),
                total: total.map(|v| solution.value(v)),
                objective_value,
                days,
            })
        }
        Err(ResolutionError::Infeasible) => {
            info!("solve finished: Infeasible");
            Ok(unsolved(SolveStatus::Infeasible, month_name, days, initial))
        }
        Err(ResolutionError::Unbounded) => {
            info!("solve finished: Unbounded");
            Ok(unsolved(SolveStatus::Unbounded, month_name, days, initial))
        }
        Err(ResolutionError::Other(msg)) => Err(StaffingError::SolverUnavailable(msg.to_string())),
        Err(ResolutionError::Str(msg)) => Err(StaffingError::SolverUnavailable(msg)),
    }
}

fn unsolved(
    status: SolveStatus,
    month_name: &'static str,
    days: Vec<ScheduleDay>,
    initial: InitialStaff,
) -> SolvedStaffing {
    SolvedStaffing {
        status,
        month_name,
        days,
        initial,
        regular: BTreeMap::new(),
        overtime: BTreeMap::new(),
        hired: [0.0; 3],
        fired: [0.0; 3],
        total: [0.0; 3],
        objective_value: 0.0,
    }
}
