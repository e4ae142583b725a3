//! Draw command: sample distinct indices uniformly from a range.

use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use tau_sampling::distinct_samples;

use crate::cli::DrawArgs;

/// Run the drawing step.
pub fn run(args: DrawArgs) -> Result<()> {
    let _cmd = info_span!("draw").entered();

    if args.range == 0 {
        bail!("range must be at least 1");
    }

    let mut rng = match args.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let indices = distinct_samples(args.samples, args.range, &mut rng);

    info!(
        requested = args.samples,
        range = args.range,
        distinct = indices.len(),
        "distinct indices drawn"
    );
    for idx in indices {
        println!("{idx}");
    }

    Ok(())
}
