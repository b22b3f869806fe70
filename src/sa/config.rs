//! Annealing configuration.

use crate::error::AnnealError;

/// Configuration for one annealing run.
///
/// Temperature follows geometric cooling: after every block of
/// `inner_iterations` moves it is multiplied by `cooling_rate`, so after `k`
/// outer iterations it equals `initial_temperature * cooling_rate^k`.
///
/// The defaults (100 outer, 1000 inner, `T0 = 100`, rate 0.95) suit score
/// differences of roughly the same magnitude as the temperature.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_outer_iterations(50)
///     .with_inner_iterations(200)
///     .with_initial_temperature(10.0)
///     .with_cooling_rate(0.9)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!((config.temperature_after(2) - 8.1).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Number of temperature levels (cooling steps).
    pub outer_iterations: usize,

    /// Number of candidate moves evaluated at each temperature level.
    pub inner_iterations: usize,

    /// Starting temperature. Must be finite and positive.
    pub initial_temperature: f64,

    /// Multiplicative cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Seed for the default generator. `None` seeds from the OS.
    ///
    /// Ignored when a generator is injected with
    /// [`Annealer::with_rng`](super::Annealer::with_rng).
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            outer_iterations: 100,
            inner_iterations: 1000,
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_outer_iterations(mut self, n: usize) -> Self {
        self.outer_iterations = n;
        self
    }

    pub fn with_inner_iterations(mut self, n: usize) -> Self {
        self.inner_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of candidate moves a run evaluates.
    pub fn total_moves(&self) -> usize {
        self.outer_iterations.saturating_mul(self.inner_iterations)
    }

    /// Temperature after `k` completed outer iterations.
    pub fn temperature_after(&self, k: usize) -> f64 {
        let exponent = i32::try_from(k).unwrap_or(i32::MAX);
        self.initial_temperature * self.cooling_rate.powi(exponent)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AnnealError> {
        let t = self.initial_temperature;
        if !t.is_finite() || t <= 0.0 {
            return Err(AnnealError::InvalidConfiguration(format!(
                "initial_temperature must be finite and positive, got {t}"
            )));
        }
        let rate = self.cooling_rate;
        if !(rate > 0.0 && rate < 1.0) {
            return Err(AnnealError::InvalidConfiguration(format!(
                "cooling_rate must be in (0, 1), got {rate}"
            )));
        }
        Ok(())
    }
}
