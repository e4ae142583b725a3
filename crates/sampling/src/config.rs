//! Configuration for sampling-budget calculations.

use crate::error::SamplingError;

/// Parameters of a rank-approximation guarantee.
///
/// A budget computed under this config promises that, with probability at
/// least `alpha`, at least `k` of the sampled points rank inside the top
/// `tau` percent of the population.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use tau_sampling::BudgetConfig;
///
/// let config = BudgetConfig::new(2).with_tau(10.0).with_alpha(0.9);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.rank_cutoff(200), 20);
/// ```
#[derive(Debug, Clone)]
pub struct BudgetConfig {
    /// Number of sampled points required inside the top band.
    k: usize,
    /// Band size as a percentage of the population.
    tau: f64,
    /// Required success probability.
    alpha: f64,
}

impl BudgetConfig {
    /// Creates a new configuration with the given k.
    ///
    /// Defaults: `tau = 5.0`, `alpha = 0.95`.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            tau: 5.0,
            alpha: 0.95,
        }
    }

    /// Sets the band size as a percentage of the population.
    pub fn with_tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    /// Sets the required success probability.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns the required match count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the band size percentage.
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Returns the required success probability.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the rank cutoff `t = ceil(tau * n / 100)` for a population of
    /// `n` points, capped at `n`.
    ///
    /// A sampled point "succeeds" when its true rank is below this cutoff.
    pub fn rank_cutoff(&self, n: usize) -> usize {
        ((self.tau * n as f64 / 100.0).ceil() as usize).min(n)
    }

    /// Validates this configuration.
    ///
    /// Returns an error if k < 1, tau is outside `(0, 100]`, or alpha is
    /// outside `(0, 1]`. Out-of-range values are never clamped; an alpha of
    /// 1.05 is a caller bug, not a request for certainty.
    pub fn validate(&self) -> Result<(), SamplingError> {
        if self.k < 1 {
            return Err(SamplingError::InvalidK { k: self.k });
        }
        if !self.tau.is_finite() || self.tau <= 0.0 || self.tau > 100.0 {
            return Err(SamplingError::InvalidTau { tau: self.tau });
        }
        if !self.alpha.is_finite() || self.alpha <= 0.0 || self.alpha > 1.0 {
            return Err(SamplingError::InvalidAlpha { alpha: self.alpha });
        }
        Ok(())
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self::new(1)
    }
}
