use super::config::ScreeningConfig;
use super::error::EngineError;
use crate::core::constants::GAS_CONSTANT;
use crate::core::forcefield::params::{GuestForcefield, LjParams};
use crate::core::forcefield::potentials::lennard_jones_shifted;
use crate::core::models::grid::{Grid, GridSums};
use crate::core::models::structure::Structure;
use nalgebra::Vector3;
use tracing::info;

/// Builds the guest-framework interaction field and its Boltzmann-weighted
/// aggregate sums for one structure.
pub trait EnergyGridProvider {
    fn build(
        &self,
        structure: &Structure,
        forcefield: &GuestForcefield,
        config: &ScreeningConfig,
    ) -> Result<(Grid, GridSums), EngineError>;
}

/// Tail-shifted Lennard-Jones 12-6 sampling over a regular grid, summed over
/// all periodic framework images within the cutoff. Cells closer to a
/// framework atom than `access_coeff` times the combined Lennard-Jones
/// diameter are blocked: their energy is pinned to +∞ so they never join a
/// channel, and they contribute nothing to the aggregate sums.
#[derive(Debug, Clone, Copy, Default)]
pub struct LjGridProvider;

impl EnergyGridProvider for LjGridProvider {
    fn build(
        &self,
        structure: &Structure,
        forcefield: &GuestForcefield,
        config: &ScreeningConfig,
    ) -> Result<(Grid, GridSums), EngineError> {
        let molar_mass = structure.molar_mass()?;
        let cell = structure.cell;
        let nu = grid_points(cell.a, config.approx_spacing);
        let nv = grid_points(cell.b, config.approx_spacing);
        let nw = grid_points(cell.c, config.approx_spacing);
        info!(nu, nv, nw, "Sampling energy grid");

        let pairs: Vec<(LjParams, Vector3<f64>)> = structure
            .sites
            .iter()
            .map(|site| {
                forcefield
                    .mixed(&config.guest_element, &site.element)
                    .map(|params| (params, site.frac))
                    .ok_or_else(|| EngineError::MissingParameters {
                        element: if forcefield.get(&config.guest_element).is_none() {
                            config.guest_element.clone()
                        } else {
                            site.element.clone()
                        },
                    })
            })
            .collect::<Result<_, _>>()?;

        let to_cart = cell.frac_to_cart();
        let cutoff_sq = config.cutoff * config.cutoff;
        // Image counts follow the perpendicular plane spacings, not the
        // edge lengths; in a skewed cell the edges overestimate the spacing
        // and would drop images still inside the cutoff.
        let widths = cell.perpendicular_widths();
        let images = [
            image_range(widths[0], config.cutoff),
            image_range(widths[1], config.cutoff),
            image_range(widths[2], config.cutoff),
        ];

        let mut grid = Grid::new(nu, nv, nw, cell, molar_mass);
        let mut sums = GridSums::default();
        let rt = GAS_CONSTANT * config.temperature;

        for u in 0..nu {
            for v in 0..nv {
                for w in 0..nw {
                    let frac_p = Vector3::new(
                        u as f64 / nu as f64,
                        v as f64 / nv as f64,
                        w as f64 / nw as f64,
                    );
                    let mut energy = 0.0;
                    let mut blocked = false;

                    'sites: for (params, frac_site) in &pairs {
                        let mut d0 = frac_p - frac_site;
                        // Nearest-image base offset; the shift loops cover
                        // the remaining images within the cutoff.
                        for axis in 0..3 {
                            d0[axis] -= d0[axis].round();
                        }
                        let min_access = config.access_coeff * params.sigma;
                        for su in -images[0]..=images[0] {
                            for sv in -images[1]..=images[1] {
                                for sw in -images[2]..=images[2] {
                                    let shifted =
                                        d0 + Vector3::new(f64::from(su), f64::from(sv), f64::from(sw));
                                    let r_sq = (&to_cart * shifted).norm_squared();
                                    if r_sq > cutoff_sq {
                                        continue;
                                    }
                                    let r = r_sq.sqrt();
                                    if r < min_access {
                                        blocked = true;
                                        break 'sites;
                                    }
                                    energy += lennard_jones_shifted(
                                        r,
                                        config.cutoff,
                                        params.sigma,
                                        params.epsilon,
                                    );
                                }
                            }
                        }
                    }

                    let idx = grid.idx(u, v, w);
                    if blocked {
                        grid.data[idx] = f64::INFINITY;
                    } else {
                        grid.data[idx] = energy;
                        let weight = (-energy / rt).exp();
                        sums.boltzmann_energy += energy * weight;
                        sums.partition += weight;
                    }
                }
            }
        }

        Ok((grid, sums))
    }
}

fn grid_points(length: f64, spacing: f64) -> usize {
    ((length / spacing).ceil() as usize).max(1)
}

fn image_range(plane_spacing: f64, cutoff: f64) -> i32 {
    (cutoff / plane_spacing).ceil() as i32
}
