use clap::{Parser, Subcommand};

/// Tau rank-approximate sampling toolkit.
#[derive(Parser)]
#[command(
    name = "tau",
    version,
    about = "Sampling budgets for rank-approximate search"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute the minimum sample count for a rank guarantee.
    Budget(BudgetArgs),
    /// Evaluate the success probability of a fixed sample count.
    Prob(ProbArgs),
    /// Draw distinct indices uniformly from a range.
    Draw(DrawArgs),
}

/// Arguments for the `budget` subcommand.
#[derive(clap::Args)]
pub struct BudgetArgs {
    /// Population size (number of candidate points).
    #[arg(short = 'n', long)]
    pub population: usize,

    /// Number of required hits inside the top band.
    #[arg(short, long, default_value_t = 1)]
    pub k: usize,

    /// Band width as a percentage of the population.
    #[arg(short, long, default_value_t = 5.0)]
    pub tau: f64,

    /// Required success probability.
    #[arg(short, long, default_value_t = 0.95)]
    pub alpha: f64,
}

/// Arguments for the `prob` subcommand.
#[derive(clap::Args)]
pub struct ProbArgs {
    /// Population size (number of candidate points).
    #[arg(short = 'n', long)]
    pub population: usize,

    /// Number of required hits inside the top band.
    #[arg(short, long, default_value_t = 1)]
    pub k: usize,

    /// Number of uniform draws.
    #[arg(short = 'm', long)]
    pub samples: usize,

    /// Band width as an absolute element count.
    #[arg(short, long)]
    pub cutoff: usize,
}

/// Arguments for the `draw` subcommand.
#[derive(clap::Args)]
pub struct DrawArgs {
    /// Number of with-replacement draws.
    #[arg(short, long)]
    pub samples: usize,

    /// Exclusive upper bound of the index range.
    #[arg(short, long)]
    pub range: usize,

    /// RNG seed (random if omitted).
    #[arg(long)]
    pub seed: Option<u64>,
}
