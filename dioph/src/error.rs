//! Errors reported by the solver.

use thiserror::Error;

/// Convenience alias for fallible solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// The ways a solve can end without producing a solution vector.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SolveError {
    /// The equation has no solution in non-negative integers, either because
    /// the target is not a multiple of the coefficients' GCD or because the
    /// enumeration exhausted the whole space. This is an expected outcome
    /// that callers branch on, not a defect.
    #[error("no non-negative integer solution exists")]
    NoSolution,

    /// The arguments violate the caller contract: the coefficient list is
    /// empty, a coefficient is smaller than 1, or the target is negative.
    /// Distinct from [`SolveError::NoSolution`], which means the arguments
    /// were fine but the equation is infeasible.
    #[error("invalid input: coefficients must be positive and non-empty, target non-negative")]
    InvalidInput,

    /// The step budget ran out before the search concluded. Unlike
    /// [`SolveError::NoSolution`] this proves nothing about feasibility.
    #[error("step budget exhausted before the search concluded")]
    BudgetExhausted,
}
