//! Random minimum cut using Karger's contraction algorithm.
//!
//! Each trial repeatedly picks a uniformly random edge whose endpoints lie in
//! different partitions and merges the two partitions, until exactly two
//! partitions remain; the edges still crossing them form one candidate cut.
//! Contraction works on per-trial partition labels, so the graph itself is
//! never mutated. With ⌈n² ln n⌉ trials the probability of missing the true
//! minimum cut is below 1/n.

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{EdgeId, UndirectedGraph};

/// Configuration for minimum-cut computation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinCutConfig {
    /// Number of contraction trials. `None` means the ⌈n² ln n⌉ bound.
    pub trials: Option<usize>,
    /// RNG seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl MinCutConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }

    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of minimum-cut computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCutResult {
    /// Smallest crossing-edge count found over all trials.
    pub cut_size: usize,
    /// Number of contraction trials performed.
    pub trials: usize,
}

impl UndirectedGraph {
    /// Estimate the minimum cut of the graph by repeated random contraction.
    ///
    /// Runs the configured number of trials (default ⌈n² ln n⌉) and reports
    /// the smallest cut seen. Graphs with fewer than two vertices have no cut
    /// and report size 0 in 0 trials; a disconnected graph reports 0.
    ///
    /// Time complexity: O(trials · V · E) in this label-relabeling form.
    #[must_use]
    pub fn min_cut(&self, config: &MinCutConfig) -> MinCutResult {
        let n = self.vertex_count() as usize;
        if n < 2 {
            return MinCutResult {
                cut_size: 0,
                trials: 0,
            };
        }

        let trials = config.trials.unwrap_or_else(|| default_trials(n));
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut best = usize::MAX;
        for _ in 0..trials {
            best = best.min(self.contraction_trial(&mut rng));
            if best == 0 {
                // Disconnected; no later trial can do better.
                break;
            }
        }

        debug!(vertices = n, trials, cut_size = best, "min-cut run complete");
        MinCutResult {
            cut_size: if best == usize::MAX { 0 } else { best },
            trials,
        }
    }

    /// One contraction trial: merge random edges until two partitions remain,
    /// then count the surviving crossing edges.
    fn contraction_trial(&self, rng: &mut StdRng) -> usize {
        let n = self.vertex_count() as usize;
        // partition[i] is the label of the partition vertex i+1 belongs to.
        let mut partition: Vec<usize> = (0..n).collect();
        let mut live: Vec<EdgeId> = (0..self.edges.len()).collect();
        let mut partitions = n;

        while partitions > 2 && !live.is_empty() {
            let pick = rng.gen_range(0..live.len());
            let edge = &self.edges[live[pick]];
            let pa = partition[(edge.a - 1) as usize];
            let pb = partition[(edge.b - 1) as usize];
            live.swap_remove(pick);
            if pa == pb {
                // Loop within a partition; discard without contracting.
                continue;
            }
            for label in &mut partition {
                if *label == pb {
                    *label = pa;
                }
            }
            partitions -= 1;
        }

        live.iter()
            .filter(|&&id| {
                let edge = &self.edges[id];
                partition[(edge.a - 1) as usize] != partition[(edge.b - 1) as usize]
            })
            .count()
    }
}

/// The ⌈n² ln n⌉ trial count from the success-probability bound.
fn default_trials(n: usize) -> usize {
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
    let bound = ((n * n) as f64 * (n as f64).ln()).ceil() as usize;
    bound.max(1)
}
