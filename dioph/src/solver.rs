//! Finds a non-negative integer solution of a linear diophantine equation
//! Σαᵢxᵢ = B.
//!
//! The problem is first shrunk by dividing the target and the coefficients
//! by their GCD, which also detects infeasibility early. The remaining
//! search enumerates candidate vectors with a mixed-radix counter, smallest
//! coefficient first, and short-circuits on the partial weighted sum
//! instead of materializing all combinations.

use itertools::Itertools;
use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, PrimInt};

use crate::budget::StepBudget;
use crate::counter::MixedRadixCounter;
use crate::error::{SolveError, SolveResult};

/// Finds one non-negative integer solution x of Σxᵢαᵢ = `target`.
///
/// The coefficients must all be at least 1 and the target must be
/// non-negative; anything else is a contract violation reported as
/// [`SolveError::InvalidInput`]. An infeasible equation is an expected
/// outcome reported as [`SolveError::NoSolution`].
///
/// On success, entry i of the returned vector pairs with `coefficients[i]`,
/// so Σ resultᵢ·coefficientsᵢ == `target` exactly.
///
/// The search is a bounded brute force meant for small targets, say below
/// a few hundred. It runs without a step limit; see [`solve_with_budget`]
/// for callers that need one.
pub fn solve<T>(target: T, coefficients: &[T]) -> SolveResult<Vec<T>>
where
    T: PrimInt + Integer + CheckedAdd + CheckedMul,
{
    solve_with_budget(target, coefficients, StepBudget::UNLIMITED)
}

/// Like [`solve`], but caps the number of candidates the enumeration may
/// evaluate. An exhausted budget is reported as
/// [`SolveError::BudgetExhausted`], which unlike [`SolveError::NoSolution`]
/// leaves the feasibility of the equation undecided.
pub fn solve_with_budget<T>(
    target: T,
    coefficients: &[T],
    budget: StepBudget,
) -> SolveResult<Vec<T>>
where
    T: PrimInt + Integer + CheckedAdd + CheckedMul,
{
    validate(target, coefficients)?;

    // The all-zero vector solves every equation with target 0, no matter
    // the coefficients.
    if target.is_zero() {
        return Ok(vec![T::zero(); coefficients.len()]);
    }

    // Shrink the problem before searching.
    let Some((target, coefficients)) = reduce_by_gcd(target, coefficients) else {
        return Err(SolveError::NoSolution);
    };

    enumerate(target, &coefficients, budget)
}

/// Finds a solution by plain enumeration, without the GCD reduction.
///
/// This searches the same space as [`solve`], just without shrinking it
/// first, so it agrees with [`solve`] on solvability and on the weighted-sum
/// postcondition for every valid input. It mostly exists as the reference
/// strategy to test [`solve`] against; prefer [`solve`].
pub fn solve_via_enumeration<T>(target: T, coefficients: &[T]) -> SolveResult<Vec<T>>
where
    T: PrimInt + Integer + CheckedAdd + CheckedMul,
{
    validate(target, coefficients)?;

    if target.is_zero() {
        return Ok(vec![T::zero(); coefficients.len()]);
    }

    enumerate(target, coefficients, StepBudget::UNLIMITED)
}

/// Divides the target and all coefficients by the GCD of the coefficients.
///
/// Returns `None` when the target is not a multiple of the GCD, in which
/// case the equation has no integer solution at all, let alone a
/// non-negative one. The GCD is folded over the coefficients pairwise;
/// GCD is associative and commutative, so the fold order does not matter.
///
/// The coefficients must be non-empty and positive; [`solve`] validates
/// this at the public boundary.
pub fn reduce_by_gcd<T>(target: T, coefficients: &[T]) -> Option<(T, Vec<T>)>
where
    T: PrimInt + Integer,
{
    let g = coefficients.iter().fold(T::zero(), |g, a| g.gcd(a));
    if !target.is_multiple_of(&g) {
        return None;
    }
    let reduced = coefficients.iter().map(|&a| a / g).collect();
    Some((target / g, reduced))
}

fn validate<T>(target: T, coefficients: &[T]) -> SolveResult<()>
where
    T: PrimInt + Integer,
{
    if coefficients.is_empty()
        || target < T::zero()
        || coefficients.iter().any(|&a| a < T::one())
    {
        return Err(SolveError::InvalidInput);
    }
    Ok(())
}

/// The mixed-radix search over candidate vectors.
fn enumerate<T>(target: T, coefficients: &[T], mut budget: StepBudget) -> SolveResult<Vec<T>>
where
    T: PrimInt + Integer + CheckedAdd + CheckedMul,
{
    // Search the smallest coefficient first: the most frequently incremented
    // position then advances the sum by the smallest possible step. Sorting
    // an index permutation leaves the caller's slice untouched.
    let order = (0..coefficients.len())
        .sorted_unstable_by_key(|&i| coefficients[i])
        .collect_vec();
    let weights = order.iter().map(|&i| coefficients[i]).collect_vec();

    // This fast path is only correct on the sorted weights. Checking
    // `coefficients[0]` instead wrongly rejects e.g. target 1 with
    // coefficients [91, 1].
    if target < weights[0] {
        return Err(SolveError::NoSolution);
    }

    let mut counter = MixedRadixCounter::new(weights, target);
    loop {
        if !budget.try_consume() {
            return Err(SolveError::BudgetExhausted);
        }
        // An overflowing sum (`None`) is necessarily an overshoot.
        match counter.weighted_sum() {
            Some(sum) if sum == target => break,
            Some(sum) if sum < target => counter.increment(),
            _ => {
                if !counter.carry() {
                    return Err(SolveError::NoSolution);
                }
            }
        }
    }

    // Undo the sort so entry i pairs with the caller's coefficients[i].
    let digits = counter.into_digits();
    let mut solution = vec![T::zero(); digits.len()];
    for (k, &i) in order.iter().enumerate() {
        solution[i] = digits[k];
    }
    Ok(solution)
}
