//! # Workflows Module
//!
//! High-level entry points that tie the `core` and `engine` layers together
//! into complete screening procedures.
//!
//! - **Screening Workflow** ([`screen`]) - End-to-end treatment of one
//!   structure: energy-field construction, channel partitioning, symmetry
//!   reduction, per-channel percolation sweeps, and output-record assembly.

pub mod screen;
