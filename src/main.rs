use anyhow::Result;
use clap::Parser;

use percolate::monte_carlo::PercolationStats;

/// percolate - Monte Carlo estimation of the site percolation threshold
///
/// Runs independent trials on an n-by-n lattice, opening uniformly random
/// blocked sites until the system percolates, and prints the sample mean,
/// sample standard deviation, and 95% confidence interval of the observed
/// thresholds.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension (the lattice is n-by-n)
    n: usize,

    /// Number of independent trials
    trials: usize,

    /// Number of threads for parallel trial execution
    #[clap(short = 't', long = "threads", default_value = "8")]
    threads: usize,

    /// Seed for deterministic trial streams (thread-local randomness if omitted)
    #[clap(long = "seed")]
    seed: Option<u64>,

    /// Quiet mode (suppress the grid description line)
    #[clap(long = "quiet")]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Set up rayon thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    if !args.quiet {
        eprintln!("{} by {} grid, {} trials", args.n, args.n, args.trials);
    }

    let stats = match args.seed {
        Some(seed) => PercolationStats::with_seed(args.n, args.trials, seed)?,
        None => PercolationStats::new(args.n, args.trials)?,
    };

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_lo(),
        stats.confidence_hi()
    );

    Ok(())
}
