use super::cell::UnitCell;

/// A 3D field of guest-framework interaction energies sampled over the unit
/// cell, in kJ/mol. Immutable after construction; one grid is built per run.
///
/// Cells are stored u-major: the linear index of `(u, v, w)` is
/// `(u * nv + v) * nw + w`.
#[derive(Debug, Clone)]
pub struct Grid {
    pub nu: usize,
    pub nv: usize,
    pub nw: usize,
    pub data: Vec<f64>,
    pub cell: UnitCell,
    pub molar_mass: f64,
}

/// Aggregate sums accumulated while the energy field is built, returned by
/// value alongside the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridSums {
    /// Σ E·exp(−E/RT) over all sampled cells, in kJ/mol.
    pub boltzmann_energy: f64,
    /// Σ exp(−E/RT) over all sampled cells (dimensionless).
    pub partition: f64,
}

impl Grid {
    pub fn new(nu: usize, nv: usize, nw: usize, cell: UnitCell, molar_mass: f64) -> Self {
        Self {
            nu,
            nv,
            nw,
            data: vec![f64::INFINITY; nu * nv * nw],
            cell,
            molar_mass,
        }
    }

    pub fn from_data(
        nu: usize,
        nv: usize,
        nw: usize,
        data: Vec<f64>,
        cell: UnitCell,
        molar_mass: f64,
    ) -> Self {
        debug_assert_eq!(data.len(), nu * nv * nw);
        Self {
            nu,
            nv,
            nw,
            data,
            cell,
            molar_mass,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn idx(&self, u: usize, v: usize, w: usize) -> usize {
        (u * self.nv + v) * self.nw + w
    }

    #[inline]
    pub fn uvw(&self, idx: usize) -> (usize, usize, usize) {
        let w = idx % self.nw;
        let rest = idx / self.nw;
        (rest / self.nv, rest % self.nv, w)
    }

    /// The six face neighbors of a cell under periodic boundary conditions.
    ///
    /// Each entry is the neighbor's linear index plus the periodic image
    /// shift incurred by the move: `[±1, 0, 0]` when the step wraps across
    /// the u boundary, and so on; `[0, 0, 0]` for interior steps.
    pub fn neighbors6(&self, idx: usize) -> [(usize, [i32; 3]); 6] {
        let (u, v, w) = self.uvw(idx);
        let wrap = |coord: usize, delta: i32, n: usize| -> (usize, i32) {
            if delta > 0 {
                if coord + 1 == n {
                    (0, 1)
                } else {
                    (coord + 1, 0)
                }
            } else if coord == 0 {
                (n - 1, -1)
            } else {
                (coord - 1, 0)
            }
        };
        let mut out = [(0usize, [0i32; 3]); 6];
        let mut slot = 0;
        for (axis, (coord, n)) in [(u, self.nu), (v, self.nv), (w, self.nw)]
            .into_iter()
            .enumerate()
        {
            for delta in [-1i32, 1] {
                let (next, image) = wrap(coord, delta, n);
                let nidx = match axis {
                    0 => self.idx(next, v, w),
                    1 => self.idx(u, next, w),
                    _ => self.idx(u, v, next),
                };
                let mut shift = [0i32; 3];
                shift[axis] = image;
                out[slot] = (nidx, shift);
                slot += 1;
            }
        }
        out
    }
}
