//! Sampling budgets for rank-approximate nearest-neighbor search.
//!
//! Rank-approximate search relaxes "the nearest neighbor" to "any of the top
//! `tau` percent" and then asks how many randomly sampled points it must
//! examine before that relaxed target is hit with confidence `alpha`. This
//! crate provides the three pieces of that machinery:
//!
//! | Piece | Role |
//! |-------|------|
//! | [`success_probability`] | binomial-tail chance that `>= k` of `m` draws land in the top band |
//! | [`required_sample_size`] | binary search for the smallest sufficient `m` |
//! | [`distinct_samples`] | materialise the sampled index set (with replacement, deduplicated) |
//!
//! # Quick start
//!
//! ```
//! use tau_sampling::{BudgetConfig, distinct_samples, required_sample_size};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! // How many of 1000 points must be sampled so that, with 95% confidence,
//! // at least one lands in the top 1%?
//! let config = BudgetConfig::new(1).with_tau(1.0).with_alpha(0.95);
//! let budget = required_sample_size(1000, &config).unwrap();
//! assert_eq!(budget, 300);
//!
//! // Pick which points to examine.
//! let mut rng = StdRng::seed_from_u64(42);
//! let picked = distinct_samples(budget, 1000, &mut rng);
//! assert!(picked.len() <= budget);
//! ```
//!
//! # Architecture
//!
//! ```text
//! required_sample_size()
//!   ├─ BudgetConfig::validate()    (config.rs)
//!   ├─ BudgetConfig::rank_cutoff() (config.rs)
//!   └─ success_probability()       (probability.rs)  -- probed by the search
//! distinct_samples()               (distinct.rs)     -- independent
//! ```
//!
//! The probability model is exact binomial arithmetic; the budget it feeds is
//! approximate by construction (the `tau` band itself is the approximation).
//! For hot per-query loops, [`distinct_samples_into`] reuses caller-owned
//! buffers.

pub mod budget;
pub mod config;
pub mod distinct;
pub mod error;
pub mod probability;

pub use budget::required_sample_size;
pub use config::BudgetConfig;
pub use distinct::{distinct_samples, distinct_samples_into};
pub use error::SamplingError;
pub use probability::success_probability;
