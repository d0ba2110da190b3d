use crate::core::models::grid::Grid;
use std::collections::VecDeque;

/// A connected-component labeling of the grid at one energy threshold.
///
/// `labels[i] == 0` marks a cell outside every counted component; labels
/// `1..=count` enumerate components. A labeling is always recomputed into a
/// reusable buffer when the threshold changes, never patched in place.
#[derive(Debug, Clone)]
pub struct Labeling {
    pub labels: Vec<u16>,
    pub count: usize,
    pub threshold: f64,
}

impl Labeling {
    pub fn with_len(len: usize) -> Self {
        Self {
            labels: vec![0; len],
            count: 0,
            threshold: f64::NAN,
        }
    }
}

/// Connectivity labeling over grid cells whose energy lies below a
/// threshold, restricted to an active-cell mask.
pub trait ComponentLabeler {
    fn label_into(&self, grid: &Grid, mask: &[bool], threshold: f64, out: &mut Labeling);
}

/// Breadth-first flood fill over the 6-neighbor stencil with periodic wrap
/// across the unit-cell boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodicBfsLabeler;

impl ComponentLabeler for PeriodicBfsLabeler {
    fn label_into(&self, grid: &Grid, mask: &[bool], threshold: f64, out: &mut Labeling) {
        out.labels.clear();
        out.labels.resize(grid.len(), 0);
        out.count = 0;
        out.threshold = threshold;

        let active = |i: usize| mask[i] && grid.data[i] < threshold;
        let mut queue = VecDeque::new();
        for start in 0..grid.len() {
            if out.labels[start] != 0 || !active(start) {
                continue;
            }
            if out.count == usize::from(u16::MAX) {
                break;
            }
            out.count += 1;
            let label = out.count as u16;
            out.labels[start] = label;
            queue.push_back(start);
            while let Some(i) = queue.pop_front() {
                for (n, _) in grid.neighbors6(i) {
                    if out.labels[n] == 0 && active(n) {
                        out.labels[n] = label;
                        queue.push_back(n);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::cell::UnitCell;

    fn grid_4x4x1(energies: &[f64]) -> Grid {
        let cell = UnitCell::new(4.0, 4.0, 1.0, 90.0, 90.0, 90.0);
        Grid::from_data(4, 4, 1, energies.to_vec(), cell, 1.0)
    }

    // A low-energy row at v = 1 inside a high-energy background.
    fn row_channel() -> Grid {
        let mut energies = vec![100.0; 16];
        for u in 0..4 {
            energies[(u * 4 + 1) * 1] = -2.0;
        }
        grid_4x4x1(&energies)
    }

    #[test]
    fn wrapped_row_is_one_component() {
        let grid = row_channel();
        let mask = vec![true; grid.len()];
        let mut labeling = Labeling::with_len(grid.len());
        PeriodicBfsLabeler.label_into(&grid, &mask, 0.0, &mut labeling);
        assert_eq!(labeling.count, 1);
        for u in 0..4 {
            assert_eq!(labeling.labels[grid.idx(u, 1, 0)], 1);
        }
        assert_eq!(labeling.labels[grid.idx(0, 0, 0)], 0);
    }

    #[test]
    fn disjoint_pockets_get_distinct_labels() {
        let mut energies = vec![100.0; 16];
        energies[0] = -1.0; // (0, 0, 0)
        energies[10] = -1.0; // (2, 2, 0)
        let grid = grid_4x4x1(&energies);
        let mask = vec![true; grid.len()];
        let mut labeling = Labeling::with_len(grid.len());
        PeriodicBfsLabeler.label_into(&grid, &mask, 0.0, &mut labeling);
        assert_eq!(labeling.count, 2);
        assert_ne!(labeling.labels[0], labeling.labels[10]);
        assert_ne!(labeling.labels[0], 0);
    }

    #[test]
    fn mask_restricts_the_fill() {
        let grid = row_channel();
        let mut mask = vec![true; grid.len()];
        mask[grid.idx(2, 1, 0)] = false;
        let mut labeling = Labeling::with_len(grid.len());
        PeriodicBfsLabeler.label_into(&grid, &mask, 0.0, &mut labeling);
        // Cutting one cell of the wrapped row leaves a single open arc.
        assert_eq!(labeling.count, 1);
        assert_eq!(labeling.labels[grid.idx(2, 1, 0)], 0);
    }

    #[test]
    fn threshold_is_exclusive() {
        let grid = row_channel();
        let mask = vec![true; grid.len()];
        let mut labeling = Labeling::with_len(grid.len());
        PeriodicBfsLabeler.label_into(&grid, &mask, -2.0, &mut labeling);
        assert_eq!(labeling.count, 0);
        assert!(labeling.labels.iter().all(|&l| l == 0));
    }

    #[test]
    fn buffer_is_fully_reset_between_runs() {
        let grid = row_channel();
        let mask = vec![true; grid.len()];
        let mut labeling = Labeling::with_len(grid.len());
        PeriodicBfsLabeler.label_into(&grid, &mask, 0.0, &mut labeling);
        PeriodicBfsLabeler.label_into(&grid, &mask, -2.0, &mut labeling);
        assert_eq!(labeling.count, 0);
        assert!(labeling.labels.iter().all(|&l| l == 0));
        assert!((labeling.threshold + 2.0).abs() < 1e-12);
    }
}
