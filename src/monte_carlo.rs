/// Monte Carlo estimation of the percolation threshold
///
/// Runs independent trials that open uniformly random blocked sites until the
/// grid percolates, then aggregates the observed thresholds into a sample
/// mean, sample standard deviation, and 95% confidence interval.
use anyhow::{bail, Result};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::percolation::Percolation;

const CONFIDENCE_95_Z: f64 = 1.96;

/// Run one trial on a fresh n-by-n grid
///
/// Repeatedly draws a uniformly random blocked site (resampling draws that
/// land on open sites) and opens it until the system percolates. Returns the
/// fraction of sites open at that point, always in (0, 1].
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;

    while !grid.percolates() {
        let mut row = rng.gen_range(0..n) + 1;
        let mut col = rng.gen_range(0..n) + 1;
        while grid.is_open(row, col)? {
            row = rng.gen_range(0..n) + 1;
            col = rng.gen_range(0..n) + 1;
        }
        grid.open(row, col)?;
    }

    Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Threshold statistics over a batch of independent percolation trials
///
/// All trials run eagerly at construction; accessors afterwards are pure
/// reads of the recorded thresholds.
#[derive(Debug)]
pub struct PercolationStats {
    n: usize,
    trials: usize,
    thresholds: Vec<f64>,
}

impl PercolationStats {
    /// Run `trials` experiments on an n-by-n grid with thread-local randomness
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::run(n, trials, None)
    }

    /// Seeded variant: trial i draws from its own StdRng stream derived from
    /// the master seed, so results are identical for any thread count
    pub fn with_seed(n: usize, trials: usize, seed: u64) -> Result<Self> {
        Self::run(n, trials, Some(seed))
    }

    fn run(n: usize, trials: usize, seed: Option<u64>) -> Result<Self> {
        if n == 0 {
            bail!("grid dimension must be greater than 0");
        }
        if trials == 0 {
            bail!("trial count must be greater than 0");
        }

        // One owned grid per trial, one result slot per index
        let thresholds = (0..trials)
            .into_par_iter()
            .map(|i| {
                let threshold = match seed {
                    Some(s) => {
                        let mut rng = StdRng::seed_from_u64(s.wrapping_add(i as u64));
                        run_trial(n, &mut rng)?
                    }
                    None => run_trial(n, &mut rand::thread_rng())?,
                };
                debug!("trial {i}: percolated at threshold {threshold:.4}");
                Ok(threshold)
            })
            .collect::<Result<Vec<f64>>>()?;

        info!("{trials} trials complete on a {n}x{n} grid");

        Ok(PercolationStats {
            n,
            trials,
            thresholds,
        })
    }

    /// Grid dimension the trials ran on
    pub fn grid_dimension(&self) -> usize {
        self.n
    }

    /// Number of trials
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Recorded per-trial thresholds, one per trial
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Sample mean of the percolation threshold
    pub fn mean(&self) -> f64 {
        self.thresholds.iter().sum::<f64>() / self.trials as f64
    }

    /// Sample standard deviation (divisor trials - 1); NaN for a single trial
    pub fn stddev(&self) -> f64 {
        if self.trials == 1 {
            return f64::NAN;
        }
        let mean = self.mean();
        let variance = self
            .thresholds
            .iter()
            .map(|t| (t - mean) * (t - mean))
            .sum::<f64>()
            / (self.trials - 1) as f64;
        variance.sqrt()
    }

    /// Low endpoint of the 95% confidence interval
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - CONFIDENCE_95_Z * self.stddev() / (self.trials as f64).sqrt()
    }

    /// High endpoint of the 95% confidence interval
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + CONFIDENCE_95_Z * self.stddev() / (self.trials as f64).sqrt()
    }
}
