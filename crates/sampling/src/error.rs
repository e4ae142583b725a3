//! Error types for the tau-sampling crate.

/// Error type for all fallible operations in the tau-sampling crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SamplingError {
    /// Returned when the population size is zero.
    #[error("population is empty")]
    EmptyPopulation,

    /// Returned when k is zero.
    #[error("k must be >= 1, got {k}")]
    InvalidK {
        /// The invalid k value.
        k: usize,
    },

    /// Returned when k is larger than the population it should be found in.
    #[error("k ({k}) exceeds population size ({n})")]
    KExceedsPopulation {
        /// The requested match count.
        k: usize,
        /// The population size.
        n: usize,
    },

    /// Returned when tau is non-finite or outside `(0, 100]`.
    #[error("tau must be a percentage in (0, 100], got {tau}")]
    InvalidTau {
        /// The invalid tau value.
        tau: f64,
    },

    /// Returned when alpha is non-finite or outside `(0, 1]`.
    #[error("alpha must be a probability in (0, 1], got {alpha}")]
    InvalidAlpha {
        /// The invalid alpha value.
        alpha: f64,
    },
}
