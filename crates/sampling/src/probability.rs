//! Binomial-tail success probabilities for rank-approximate sampling.

/// Probability that at least `k` of `m` uniform with-replacement draws from a
/// population of `n` points land inside the top-`t` rank band.
///
/// With per-draw hit probability `eps = t / n`, this is the binomial tail
/// `P[X >= k]` for `X ~ Binomial(m, eps)`, with two saturation shortcuts
/// carried over from the sampling scheme this serves:
///
/// * `k = 1`: certain once `m > n - t`; otherwise `1 - (1 - eps)^m`.
/// * `k > 1`: impossible for `m < k`; certain once `m > n - t + k - 1`.
///
/// Between the shortcuts the tail is summed either directly or through its
/// complement, whichever needs fewer terms, with binomial coefficients built
/// incrementally rather than from factorials.
///
/// The result is non-decreasing in `m` for fixed `n, k, t`. The binary search
/// in [`required_sample_size`](crate::required_sample_size) relies on that
/// and must not be fed a modified version of this function that breaks it.
///
/// Preconditions (`n >= 1`, `k >= 1`, `t <= n`) are the caller's
/// responsibility and only checked in debug builds.
pub fn success_probability(n: usize, k: usize, m: usize, t: usize) -> f64 {
    debug_assert!(n > 0, "population must be non-empty");
    debug_assert!(k > 0, "k must be >= 1");
    debug_assert!(t <= n, "rank cutoff cannot exceed the population");

    let eps = t as f64 / n as f64;

    if k == 1 {
        // Once the budget exceeds the complement of the band, a hit is
        // treated as certain.
        if m > n - t {
            return 1.0;
        }
        return 1.0 - (1.0 - eps).powf(m as f64);
    }

    if m < k {
        return 0.0;
    }
    if m > n - t + k - 1 {
        return 1.0;
    }

    let prob = if 2 * k < m {
        // The head of the distribution has fewer terms than the tail.
        tail_via_complement(m, k, eps)
    } else {
        tail_direct(m, k, eps)
    };

    // The sums can drift an ulp past the unit interval.
    prob.clamp(0.0, 1.0)
}

/// Tail through its complement: `1 - sum_{j=0}^{k-1} C(m,j) eps^j (1-eps)^(m-j)`.
///
/// `k` terms; used when the direct tail would need more (`2k < m`).
fn tail_via_complement(m: usize, k: usize, eps: f64) -> f64 {
    // j = 0 term
    let mut sum = (1.0 - eps).powf(m as f64);
    for j in 1..k {
        sum += binomial(m, j) * eps.powf(j as f64) * (1.0 - eps).powf((m - j) as f64);
    }
    1.0 - sum
}

/// Tail summed directly: `sum_{j=k}^{m} C(m,j) eps^j (1-eps)^(m-j)`.
///
/// `m - k + 1` terms.
fn tail_direct(m: usize, k: usize, eps: f64) -> f64 {
    // j = m term
    let mut sum = eps.powf(m as f64);
    for j in k..m {
        sum += binomial(m, j) * eps.powf(j as f64) * (1.0 - eps).powf((m - j) as f64);
    }
    sum
}

/// Binomial coefficient `C(m, j)` as an `f64`.
///
/// Multiplicative recurrence over `min(j, m - j)` factors: start at `m`,
/// multiply by `(m - i + 1) / i`. No factorials, so no overflow for the
/// magnitudes seen here.
fn binomial(m: usize, j: usize) -> f64 {
    debug_assert!(j <= m, "C(m, j) needs j <= m");
    let j = j.min(m - j);
    if j == 0 {
        return 1.0;
    }
    let mut coeff = m as f64;
    for i in 2..=j {
        coeff *= (m - i + 1) as f64 / i as f64;
    }
    coeff
}
