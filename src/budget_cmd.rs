//! Budget command: compute the minimum sample count for a rank guarantee.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use tau_sampling::{BudgetConfig, required_sample_size};

use crate::cli::BudgetArgs;

/// Run the budget computation.
pub fn run(args: BudgetArgs) -> Result<()> {
    let _cmd = info_span!("budget").entered();

    let config = BudgetConfig::new(args.k)
        .with_tau(args.tau)
        .with_alpha(args.alpha);

    let budget = required_sample_size(args.population, &config)
        .context("failed to compute sampling budget")?;

    info!(
        population = args.population,
        k = args.k,
        tau = args.tau,
        alpha = args.alpha,
        budget,
        "sampling budget computed"
    );
    println!("{budget}");

    Ok(())
}
