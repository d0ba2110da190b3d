//! The percolation-threshold sweep. For one symmetry-unique channel, the
//! sweep raises an energy threshold in fixed steps above the channel's local
//! minimum and re-evaluates periodic connectivity until some sub-cluster of
//! the channel first spans a crystallographic axis. That first crossing is
//! the channel's diffusion barrier.

use super::dimensionality::DimensionalityClassifier;
use super::labeling::{ComponentLabeler, Labeling};
use crate::core::models::grid::Grid;
use tracing::debug;

/// The barrier found for one channel: the channel's local minimum energy and
/// the smallest tested threshold at which it percolates. At most one record
/// exists per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyBarrierRecord {
    pub min_energy: f64,
    pub barrier: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct SweepParams {
    /// Global energy ceiling, in kJ/mol. Thresholds never exceed it.
    pub energy_threshold: f64,
    /// Threshold increment, in kJ/mol. Strictly positive.
    pub energy_step: f64,
}

/// Reusable per-channel buffers: one active mask and one re-labeling, both
/// grid-sized. Sharing them across channels bounds the sweep's peak extra
/// memory to O(grid) regardless of channel count or step count.
#[derive(Debug)]
pub struct SweepScratch {
    mask: Vec<bool>,
    relabeling: Labeling,
}

impl SweepScratch {
    pub fn new(len: usize) -> Self {
        Self {
            mask: vec![false; len],
            relabeling: Labeling::with_len(len),
        }
    }
}

/// The sweep engine, generic over the labeling and dimensionality
/// collaborators it re-invokes at every threshold step.
#[derive(Debug)]
pub struct PercolationSweep<'a, L, C> {
    labeler: &'a L,
    classifier: &'a C,
    params: SweepParams,
}

impl<'a, L, C> PercolationSweep<'a, L, C>
where
    L: ComponentLabeler,
    C: DimensionalityClassifier,
{
    pub fn new(labeler: &'a L, classifier: &'a C, params: SweepParams) -> Self {
        Self {
            labeler,
            classifier,
            params,
        }
    }

    /// Finds the lowest energy threshold at which the channel identified by
    /// `representative` in the loose-cutoff labeling becomes periodically
    /// connected.
    ///
    /// Thresholds form the arithmetic sequence `min_energy + k·step`,
    /// k = 1, 2, …, capped by the global energy threshold; the first
    /// crossing wins and ends the sweep. A channel that never percolates
    /// within the cap contributes no record, as does the degenerate channel
    /// whose first candidate threshold already exceeds the cap.
    pub fn barrier_for_channel(
        &self,
        grid: &Grid,
        loose: &Labeling,
        representative: u16,
        scratch: &mut SweepScratch,
    ) -> Option<EnergyBarrierRecord> {
        let mut min_energy = self.params.energy_threshold;
        for (i, &label) in loose.labels.iter().enumerate() {
            scratch.mask[i] = label == representative;
            if scratch.mask[i] {
                min_energy = min_energy.min(grid.data[i]);
            }
        }

        for k in 1_i32.. {
            let threshold = min_energy + f64::from(k) * self.params.energy_step;
            if threshold > self.params.energy_threshold {
                break;
            }
            self.labeler
                .label_into(grid, &scratch.mask, threshold, &mut scratch.relabeling);
            let spans = self.classifier.classify(grid, &scratch.relabeling);
            if spans.iter().any(|span| span.is_percolating()) {
                debug!(
                    channel = representative,
                    min_energy, barrier = threshold, "Channel percolates"
                );
                return Some(EnergyBarrierRecord {
                    min_energy,
                    barrier: threshold,
                });
            }
        }
        debug!(
            channel = representative,
            min_energy, "No crossing below the energy ceiling"
        );
        None
    }
}
