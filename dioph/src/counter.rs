//! The candidate counter driving the enumeration.

use num_integer::Integer;
use num_traits::{CheckedAdd, CheckedMul, PrimInt};

/// A mixed-radix counter over candidate vectors.
///
/// The digits are the trial values xᵢ and the weights are the coefficients
/// αᵢ, sorted ascending by the caller. Position 0 is the only position that
/// is incremented directly; higher positions only change during carry
/// propagation. The radix of each position is data-dependent: a digit is
/// admissible as long as its own contribution `digit * weight` stays within
/// `limit`.
pub struct MixedRadixCounter<T> {
    digits: Vec<T>,
    weights: Vec<T>,
    limit: T,
}

impl<T> MixedRadixCounter<T>
where
    T: PrimInt + Integer + CheckedAdd + CheckedMul,
{
    /// Creates a counter with all digits zero.
    ///
    /// `weights` must be non-empty and sorted ascending.
    pub fn new(weights: Vec<T>, limit: T) -> Self {
        assert!(!weights.is_empty(), "Counter needs at least one position.");
        debug_assert!(weights.is_sorted());
        Self {
            digits: vec![T::zero(); weights.len()],
            weights,
            limit,
        }
    }

    /// The current candidate vector.
    pub fn digits(&self) -> &[T] {
        &self.digits
    }

    /// Consumes the counter and returns the candidate vector.
    pub fn into_digits(self) -> Vec<T> {
        self.digits
    }

    /// The weighted sum Σ digitᵢ·weightᵢ of the current candidate.
    ///
    /// `None` means the sum does not fit into `T`. Every term is
    /// non-negative, so an overflowing sum is in particular larger than any
    /// representable target and callers treat it like an overshoot.
    pub fn weighted_sum(&self) -> Option<T> {
        self.digits
            .iter()
            .zip(&self.weights)
            .try_fold(T::zero(), |acc, (d, w)| acc.checked_add(&d.checked_mul(w)?))
    }

    /// Increments position 0.
    ///
    /// Position 0 holds the smallest weight, so this advances the weighted
    /// sum by the smallest possible step. Callers only increment while the
    /// weighted sum is below the limit, which keeps the digit in range.
    pub fn increment(&mut self) {
        self.digits[0] = self.digits[0] + T::one();
    }

    /// Performs one carry: resets position 0, advances to position 1 and
    /// increments it, and keeps resetting positions whose own contribution
    /// exceeds the limit.
    ///
    /// Returns `false` when the carry runs past the last position, i.e. the
    /// whole space has been enumerated.
    #[must_use]
    pub fn carry(&mut self) -> bool {
        let mut i = 0;
        loop {
            self.digits[i] = T::zero();
            i += 1;
            if i == self.digits.len() {
                return false;
            }
            self.digits[i] = self.digits[i] + T::one();
            // An overflowing contribution is larger than any limit.
            let contribution = self.digits[i].checked_mul(&self.weights[i]);
            if contribution.is_some_and(|c| c <= self.limit) {
                return true;
            }
        }
    }
}
