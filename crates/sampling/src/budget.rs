//! Binary search for the minimum sampling budget.

use tracing::{debug, warn};

use crate::config::BudgetConfig;
use crate::error::SamplingError;
use crate::probability::success_probability;

/// Acceptance tolerance of the search: a probe whose success probability
/// exceeds alpha by less than this counts as converged.
const ALPHA_TOLERANCE: f64 = 1e-3;

/// Iterations granted beyond twice the bisection depth.
const CAP_SLACK: usize = 8;

/// Minimum number of with-replacement draws from a population of `n` points
/// so that, with probability at least `alpha`, at least `k` of them rank
/// inside the top `t = ceil(tau * n / 100)` of the population.
///
/// Binary-searches `m` over `[k, n]`, accepting the first probe within
/// [`ALPHA_TOLERANCE`] above `alpha` (or once the bounds close), then adds
/// one draw as a safety margin, capped at `n`. The search leans on
/// [`success_probability`] being non-decreasing in `m`; the iteration cap
/// keeps the function total if floating-point noise near the saturation
/// boundaries ever breaks that, or if `alpha` is not reachable for the given
/// `k` and `tau` (the cap case logs a warning and yields `n`).
///
/// Demanding certainty (`alpha == 1.0`) short-circuits to `n`: no smaller
/// sample can guarantee a hit.
///
/// # Errors
///
/// Returns [`SamplingError`] if the config fails validation, the population
/// is empty, or `k` exceeds the population size.
///
/// # Example
///
/// ```
/// use tau_sampling::{BudgetConfig, required_sample_size};
///
/// let config = BudgetConfig::new(1).with_tau(1.0).with_alpha(0.95);
/// assert_eq!(required_sample_size(1000, &config).unwrap(), 300);
/// ```
pub fn required_sample_size(n: usize, config: &BudgetConfig) -> Result<usize, SamplingError> {
    config.validate()?;
    if n == 0 {
        return Err(SamplingError::EmptyPopulation);
    }
    let k = config.k();
    if k > n {
        return Err(SamplingError::KExceedsPopulation { k, n });
    }

    let alpha = config.alpha();
    if alpha == 1.0 {
        return Ok(n);
    }

    let t = config.rank_cutoff(n);

    let mut lb = k;
    let mut ub = n;
    let mut m = k;
    let mut converged = false;

    // Plain bisection needs log2(n) probes; a stuck lower bound can add one
    // detour probe per level.
    let cap = 2 * (n.ilog2() as usize + 1) + CAP_SLACK;

    for _ in 0..cap {
        let prob = success_probability(n, k, m, t);

        if prob > alpha {
            if prob - alpha < ALPHA_TOLERANCE || ub < lb + 2 {
                converged = true;
                break;
            }
            ub = m;
        } else if prob < alpha {
            if m == lb {
                // Bisection has pinched m against the lower bound; nudge it
                // forward without moving the bounds.
                m += 1;
                continue;
            }
            lb = m;
        } else {
            converged = true;
            break;
        }

        m = (ub + lb) / 2;
    }

    if !converged {
        warn!(n, k, t, lb, ub, m, "sample size search stopped at the iteration cap");
    }

    let samples = (m + 1).min(n);
    debug!(n, k, t, alpha, samples, "sampling budget computed");
    Ok(samples)
}
