//! Stateless foundations: physical constants, crystallographic data models,
//! guest-framework pair potentials, and structure/force-field file I/O.

pub mod constants;
pub mod forcefield;
pub mod io;
pub mod models;
