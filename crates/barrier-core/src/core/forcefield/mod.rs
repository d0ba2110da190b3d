pub mod params;
pub mod potentials;
