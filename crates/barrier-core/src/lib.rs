//! # porebarrier Core Library
//!
//! A library for estimating the energy barriers that a guest molecule must
//! cross to diffuse through the channels of a nanoporous crystalline
//! framework, alongside bulk adsorption descriptors (enthalpy of adsorption,
//! Henry's constant). It is built for high-throughput screening of porous
//! materials such as zeolites and metal-organic frameworks.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   (`UnitCell`, `Structure`, `Grid`), pure pair potentials, and I/O
//!   utilities for structure and force-field files.
//!
//! - **[`engine`]: The Logic Core.** This layer hosts the algorithmic
//!   machinery: periodic connected-component labeling, dimensionality
//!   classification, symmetry-orbit reduction, and the percolation-threshold
//!   sweep that locates each channel's diffusion barrier.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   [`workflows::screen::run`] ties the `engine` and `core` together to
//!   screen one structure end to end and assemble its output records.

pub mod core;
pub mod engine;
pub mod workflows;
