//! Position-weighted scoring for numeric sequences.

use std::convert::Infallible;

use crate::sa::Scorer;

/// Scores a numeric sequence as a weighted sum of its leading items.
///
/// `score(seq) = Σ weights[i] * seq[i]` over the first
/// `min(seq.len(), weights.len())` positions. The default weights
/// `[1.0, 0.8, 0.6]` reward putting the three largest items first, in
/// descending order.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::Scorer;
/// use u_anneal::scoring::WeightedPrefix;
///
/// let score = WeightedPrefix::default().score(&[0u32, 10, 20, 30]).unwrap();
/// assert!((score - 20.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPrefix {
    weights: Vec<f64>,
}

impl Default for WeightedPrefix {
    fn default() -> Self {
        Self::new(vec![1.0, 0.8, 0.6])
    }
}

impl WeightedPrefix {
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Highest score any arrangement of `items` can reach.
    ///
    /// Pairs the largest items with the largest weights (rearrangement
    /// inequality). Exact when every weight is non-negative.
    pub fn upper_bound<T: Copy + Into<f64>>(&self, items: &[T]) -> f64 {
        let mut values: Vec<f64> = items.iter().map(|&v| v.into()).collect();
        values.sort_by(|a, b| b.total_cmp(a));

        let mut weights = self.weights.clone();
        weights.sort_by(|a, b| b.total_cmp(a));

        weights.iter().zip(&values).map(|(w, v)| w * v).sum()
    }
}

impl<T: Copy + Into<f64>> Scorer<T> for WeightedPrefix {
    type Error = Infallible;

    fn score(&self, sequence: &[T]) -> Result<f64, Infallible> {
        Ok(self
            .weights
            .iter()
            .zip(sequence)
            .map(|(w, &v)| w * v.into())
            .sum())
    }
}
