//! Scoring capability for Simulated Annealing.

use std::convert::Infallible;

/// Scores an arrangement of items. Higher is better.
///
/// The annealer only reorders items; a scorer that ignores order gives the
/// search nothing to improve.
///
/// Any `Fn(&[T]) -> f64` closure is a scorer that cannot fail. Fallible
/// closures can be wrapped in [`TryScore`]; their errors reach the caller of
/// [`Annealer::solve`](super::Annealer::solve) unchanged.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::Scorer;
///
/// struct SumOfFirst(usize);
///
/// impl Scorer<u32> for SumOfFirst {
///     type Error = std::convert::Infallible;
///
///     fn score(&self, sequence: &[u32]) -> Result<f64, Self::Error> {
///         Ok(sequence.iter().take(self.0).map(|&v| f64::from(v)).sum())
///     }
/// }
///
/// assert_eq!(SumOfFirst(2).score(&[5, 4, 3]), Ok(9.0));
/// ```
pub trait Scorer<T> {
    /// Error returned when a sequence cannot be scored.
    type Error;

    /// Computes the score of `sequence`.
    fn score(&self, sequence: &[T]) -> Result<f64, Self::Error>;
}

impl<T, F> Scorer<T> for F
where
    F: Fn(&[T]) -> f64,
{
    type Error = Infallible;

    fn score(&self, sequence: &[T]) -> Result<f64, Infallible> {
        Ok(self(sequence))
    }
}

/// Adapts a fallible closure into a [`Scorer`].
///
/// ```
/// use u_anneal::sa::{Scorer, TryScore};
///
/// let first = TryScore(|seq: &[i32]| seq.first().map(|&v| f64::from(v)).ok_or("empty"));
/// assert_eq!(first.score(&[3, 1]), Ok(3.0));
/// assert_eq!(first.score(&[]), Err("empty"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TryScore<F>(pub F);

impl<T, E, F> Scorer<T> for TryScore<F>
where
    F: Fn(&[T]) -> Result<f64, E>,
{
    type Error = E;

    fn score(&self, sequence: &[T]) -> Result<f64, E> {
        (self.0)(sequence)
    }
}
