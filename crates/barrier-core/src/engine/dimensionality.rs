use super::labeling::Labeling;
use crate::core::models::grid::Grid;
use std::collections::VecDeque;
use std::fmt;

/// Which crystallographic axes a labeled component percolates along, i.e.
/// connects to its own periodic image. An empty span is a closed pocket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodicSpan {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl PeriodicSpan {
    pub fn is_percolating(&self) -> bool {
        self.x || self.y || self.z
    }
}

impl fmt::Display for PeriodicSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.x {
            write!(f, "x")?;
        }
        if self.y {
            write!(f, "y")?;
        }
        if self.z {
            write!(f, "z")?;
        }
        Ok(())
    }
}

/// Reports, for each label of a labeling, which periodic axes the component
/// spans. Index `label - 1` holds the span of `label`.
pub trait DimensionalityClassifier {
    fn classify(&self, grid: &Grid, labeling: &Labeling) -> Vec<PeriodicSpan>;
}

/// Detects percolation by tracking periodic image shifts during a traversal
/// of each component: reaching an already-visited cell through a path whose
/// accumulated image shift disagrees with the stored one means the component
/// winds around the cell along every axis where the shifts differ.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindingClassifier;

impl DimensionalityClassifier for WindingClassifier {
    fn classify(&self, grid: &Grid, labeling: &Labeling) -> Vec<PeriodicSpan> {
        let mut spans = vec![PeriodicSpan::default(); labeling.count];
        let mut visited = vec![false; grid.len()];
        let mut shift = vec![[0i32; 3]; grid.len()];
        let mut queue = VecDeque::new();

        for start in 0..grid.len() {
            let label = labeling.labels[start];
            if label == 0 || visited[start] {
                continue;
            }
            let span = &mut spans[usize::from(label) - 1];
            visited[start] = true;
            shift[start] = [0; 3];
            queue.push_back(start);
            while let Some(i) = queue.pop_front() {
                for (n, image) in grid.neighbors6(i) {
                    if labeling.labels[n] != label {
                        continue;
                    }
                    let reached = [
                        shift[i][0] + image[0],
                        shift[i][1] + image[1],
                        shift[i][2] + image[2],
                    ];
                    if visited[n] {
                        span.x |= shift[n][0] != reached[0];
                        span.y |= shift[n][1] != reached[1];
                        span.z |= shift[n][2] != reached[2];
                    } else {
                        visited[n] = true;
                        shift[n] = reached;
                        queue.push_back(n);
                    }
                }
            }
        }
        spans
    }
}
