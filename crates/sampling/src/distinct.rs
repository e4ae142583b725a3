//! Distinct index extraction from with-replacement draws.

use rand::Rng;

/// Draws `num_samples` uniform indices in `[0, upper_bound)` with replacement
/// and returns the distinct indices touched, in ascending order.
///
/// Collisions mean the output typically holds fewer than `num_samples`
/// entries; this is deliberately not a without-replacement sampler.
/// Deterministic for a seeded `rng`.
///
/// Allocates two buffers per call. Use [`distinct_samples_into`] to reuse
/// buffers when sampling once per query in a hot loop.
pub fn distinct_samples(num_samples: usize, upper_bound: usize, rng: &mut impl Rng) -> Vec<usize> {
    let mut counts = Vec::new();
    let mut out = Vec::new();
    distinct_samples_into(num_samples, upper_bound, rng, &mut counts, &mut out);
    out
}

/// Buffer-reusing form of [`distinct_samples`].
///
/// `counts` holds the per-index draw tally, `out` receives the ascending
/// distinct indices. Both are cleared first and grow as needed, never
/// shrinking. `num_samples == 0` or `upper_bound == 0` leaves `out` empty.
pub fn distinct_samples_into(
    num_samples: usize,
    upper_bound: usize,
    rng: &mut impl Rng,
    counts: &mut Vec<usize>,
    out: &mut Vec<usize>,
) {
    counts.clear();
    out.clear();
    if num_samples == 0 || upper_bound == 0 {
        return;
    }

    counts.resize(upper_bound, 0);
    for _ in 0..num_samples {
        let idx = rng.random_range(0..upper_bound);
        counts[idx] += 1;
    }

    for (idx, &count) in counts.iter().enumerate() {
        if count > 0 {
            out.push(idx);
        }
    }
}
