//! Domain-agnostic simulated annealing for sequence arrangement.
//!
//! Given an ordered sequence and a score function, searches for the
//! ordering with the highest score:
//!
//! - **Simulated Annealing (SA)**: nested cooling loop with Metropolis
//!   acceptance, a segment-relocation neighbor operator, and injectable
//!   scoring ([`sa::Scorer`]) and randomness ([`rng::RandomSource`]).
//! - **Scoring**: ready-made scorers: a position-weighted sum for numeric
//!   sequences ([`scoring`]) and Latium island selection ([`islands`]).
//!
//! # Architecture
//!
//! The optimizer knows nothing about what the items mean. Scorers are
//! plain values or closures handed to [`sa::Annealer`]; the bundled
//! domains are consumers of the same interface an application would use.
//!
//! ```
//! use u_anneal::sa::{AnnealConfig, Annealer};
//! use u_anneal::scoring::WeightedPrefix;
//!
//! let initial: Vec<u32> = (0..25).map(|i| i * 10).collect();
//! let config = AnnealConfig::default()
//!     .with_outer_iterations(50)
//!     .with_inner_iterations(200)
//!     .with_seed(42);
//!
//! let result = Annealer::new(&initial, WeightedPrefix::default(), config)?
//!     .run()
//!     .unwrap();
//! assert!(result.score > 20.0);
//! # Ok::<(), u_anneal::AnnealError>(())
//! ```

pub mod error;
pub mod islands;
pub mod rng;
pub mod sa;
pub mod scoring;

pub use error::AnnealError;
