//! # Engine Module
//!
//! The algorithmic layer of porebarrier. It turns a structure and a guest
//! force field into per-channel diffusion barriers:
//!
//! - **Configuration** ([`config`]) - Screening parameters and their
//!   validation rules
//! - **Energy field** ([`fieldmap`]) - Construction of the guest-framework
//!   interaction grid and its Boltzmann-weighted aggregate sums
//! - **Labeling** ([`labeling`]) - Periodic connected-component labeling of
//!   sub-threshold grid cells
//! - **Dimensionality** ([`dimensionality`]) - Classification of which
//!   crystallographic axes each component percolates along
//! - **Symmetry** ([`symmetry`]) - Reduction of channels to symmetry-orbit
//!   representatives
//! - **Sweep** ([`sweep`]) - The percolation-threshold sweep locating each
//!   channel's energy barrier
//! - **Report** ([`report`]) - Assembly of output records with the bulk
//!   thermodynamic descriptors
//! - **Progress** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod dimensionality;
pub mod error;
pub mod fieldmap;
pub mod labeling;
pub mod progress;
pub mod report;
pub mod sweep;
pub mod symmetry;
