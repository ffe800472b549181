use thiserror::Error;

use crate::solver::SolveStatus;

#[derive(Error, Debug)]
pub enum StaffingError {
    /// The solver backend could not be invoked at all. Distinct from an
    /// infeasible model so callers do not conflate "no solution exists"
    /// with "couldn't try".
    #[error("solver backend could not be invoked: {0}")]
    SolverUnavailable(String),

    /// Extraction was attempted on a solve that did not end optimal.
    #[error("schedule extraction requires an optimal solution, solver status is {status}")]
    NotOptimal { status: SolveStatus },
}

pub type StaffingResult<T> = Result<T, StaffingError>;
