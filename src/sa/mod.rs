//! Simulated Annealing (SA) for sequence arrangement.
//!
//! Maximizes a caller-supplied score over orderings of a sequence. Each
//! candidate is produced by relocating a random contiguous segment
//! ([`perturb`]); worse candidates are accepted with probability
//! `exp(delta / T)`, and the temperature `T` decays geometrically after
//! every block of inner iterations.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast Computing Machines"

mod config;
mod perturb;
mod runner;
mod types;

pub use config::AnnealConfig;
pub use perturb::{perturb, MAX_REDRAWS};
pub use runner::{accept, acceptance_probability, Acceptance, AnnealResult, Annealer};
pub use types::{Scorer, TryScore};
