//! Prob command: evaluate the success probability of a fixed sample count.

use anyhow::{Result, bail};
use tracing::{info, info_span};

use tau_sampling::success_probability;

use crate::cli::ProbArgs;

/// Run the probability evaluation.
pub fn run(args: ProbArgs) -> Result<()> {
    let _cmd = info_span!("prob").entered();

    if args.population == 0 {
        bail!("population must be at least 1");
    }
    if args.k == 0 {
        bail!("k must be at least 1");
    }
    if args.cutoff > args.population {
        bail!(
            "cutoff ({}) exceeds population size ({})",
            args.cutoff,
            args.population
        );
    }

    let prob = success_probability(args.population, args.k, args.samples, args.cutoff);

    info!(
        population = args.population,
        k = args.k,
        samples = args.samples,
        cutoff = args.cutoff,
        prob,
        "success probability evaluated"
    );
    println!("{prob}");

    Ok(())
}
