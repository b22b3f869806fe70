//! Annealing execution loop.

use rand::rngs::StdRng;
use tracing::{debug, debug_span, info, trace};

use super::config::AnnealConfig;
use super::perturb::perturb;
use super::types::Scorer;
use crate::error::AnnealError;
use crate::rng::{create_rng, RandomSource};

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealResult<T> {
    /// The sequence held when the run ended.
    pub sequence: Vec<T>,

    /// Score of `sequence`.
    pub score: f64,

    /// The highest-scoring sequence seen at any point of the run.
    ///
    /// Can beat `sequence` when a worse move was accepted late.
    pub best: Vec<T>,

    /// Score of `best`.
    pub best_score: f64,

    /// Total number of candidate moves evaluated.
    pub iterations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Current score at the start and after each outer iteration.
    pub score_history: Vec<f64>,
}

/// Outcome of the acceptance rule for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Strictly better than the current score.
    Improving,
    /// Worse, accepted by the Metropolis draw.
    Worsening,
    /// Worse and rejected by the draw, or equal to the current score.
    Rejected,
}

impl Acceptance {
    pub fn is_accepted(self) -> bool {
        !matches!(self, Acceptance::Rejected)
    }
}

/// Probability of moving from `current` to `candidate` at `temperature`.
///
/// 1 for strictly better candidates, `exp((candidate - current) / T)` for
/// worse ones and 0 for ties. NaN scores compare as ties.
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    if candidate > current {
        1.0
    } else if candidate < current {
        ((candidate - current) / temperature).exp()
    } else {
        0.0
    }
}

/// Metropolis acceptance rule for maximization.
///
/// Draws from `rng` only when the candidate is worse: a uniform `u` in
/// `[0, 1)` accepts the move iff `u < exp(delta / T)`.
pub fn accept<R: RandomSource + ?Sized>(
    current: f64,
    candidate: f64,
    temperature: f64,
    rng: &mut R,
) -> Acceptance {
    if candidate > current {
        Acceptance::Improving
    } else if candidate < current {
        let probability = acceptance_probability(current, candidate, temperature);
        if rng.unit() < probability {
            Acceptance::Worsening
        } else {
            Acceptance::Rejected
        }
    } else {
        Acceptance::Rejected
    }
}

/// Simulated annealing over arrangements of a sequence.
///
/// Owns a private copy of the initial sequence; the caller's data is never
/// modified. Each run consumes the annealer.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{AnnealConfig, Annealer};
///
/// let initial: Vec<u32> = (0..10).collect();
/// let config = AnnealConfig::default()
///     .with_outer_iterations(20)
///     .with_inner_iterations(200)
///     .with_seed(7);
///
/// let first_two = |seq: &[u32]| f64::from(seq[0]) + 0.5 * f64::from(seq[1]);
/// let result = Annealer::new(&initial, first_two, config)
///     .expect("valid configuration")
///     .solve()
///     .unwrap();
///
/// assert_eq!(result.len(), 10);
/// assert!(first_two(&result) > first_two(&initial));
/// ```
pub struct Annealer<T, S, R = StdRng> {
    current: Vec<T>,
    scorer: S,
    config: AnnealConfig,
    rng: R,
}

impl<T, S> Annealer<T, S, StdRng>
where
    T: Clone + PartialEq,
    S: Scorer<T>,
{
    /// Creates an annealer using a generator seeded from `config.seed`.
    ///
    /// # Errors
    ///
    /// [`AnnealError::InvalidConfiguration`] if `config` fails validation,
    /// [`AnnealError::EmptySequence`] if `initial` is empty.
    pub fn new(initial: &[T], scorer: S, config: AnnealConfig) -> Result<Self, AnnealError> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::with_rng(initial, scorer, config, rng)
    }
}

impl<T, S, R> Annealer<T, S, R>
where
    T: Clone + PartialEq,
    S: Scorer<T>,
    R: RandomSource,
{
    /// Creates an annealer drawing all randomness from `rng`.
    pub fn with_rng(
        initial: &[T],
        scorer: S,
        config: AnnealConfig,
        rng: R,
    ) -> Result<Self, AnnealError> {
        config.validate()?;
        if initial.is_empty() {
            return Err(AnnealError::EmptySequence);
        }
        Ok(Self {
            current: initial.to_vec(),
            scorer,
            config,
            rng,
        })
    }

    /// The validated configuration this annealer runs with.
    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Runs to completion and returns the final sequence.
    ///
    /// # Errors
    ///
    /// The first error returned by the scorer, unchanged.
    pub fn solve(self) -> Result<Vec<T>, S::Error> {
        self.run().map(|result| result.sequence)
    }

    /// Runs to completion and returns the final sequence with run statistics.
    ///
    /// # Errors
    ///
    /// The first error returned by the scorer, unchanged.
    pub fn run(self) -> Result<AnnealResult<T>, S::Error> {
        let Annealer {
            mut current,
            scorer,
            config,
            mut rng,
        } = self;

        let span = debug_span!(
            "anneal",
            len = current.len(),
            outer = config.outer_iterations,
            inner = config.inner_iterations
        );
        let _guard = span.enter();

        let mut current_score = scorer.score(&current)?;
        let mut best = current.clone();
        let mut best_score = current_score;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut score_history = Vec::with_capacity(config.outer_iterations.saturating_add(1));
        score_history.push(current_score);

        for outer in 0..config.outer_iterations {
            for _ in 0..config.inner_iterations {
                let candidate = perturb(&current, &mut rng);
                let candidate_score = scorer.score(&candidate)?;
                iterations += 1;

                let decision = accept(current_score, candidate_score, temperature, &mut rng);
                if !decision.is_accepted() {
                    continue;
                }

                if decision == Acceptance::Improving {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                trace!(from = current_score, to = candidate_score, temperature, "accepted move");

                current = candidate;
                current_score = candidate_score;

                if current_score > best_score {
                    best.clone_from(&current);
                    best_score = current_score;
                }
            }

            temperature *= config.cooling_rate;
            score_history.push(current_score);
            debug!(outer, temperature, score = current_score, best = best_score, "cooled");
        }

        info!(
            iterations,
            accepted_moves,
            improving_moves,
            score = current_score,
            best = best_score,
            "annealing finished"
        );

        Ok(AnnealResult {
            sequence: current,
            score: current_score,
            best,
            best_score,
            iterations,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            score_history,
        })
    }
}
