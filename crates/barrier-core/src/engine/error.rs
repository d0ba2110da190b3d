use thiserror::Error;

use super::config::ConfigError;
use crate::core::forcefield::params::ParamLoadError;
use crate::core::io::cif::CifError;
use crate::core::models::structure::CompositionError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Structure input failed: {source}")]
    Structure {
        #[from]
        source: CifError,
    },

    #[error("Force field input failed: {source}")]
    Forcefield {
        #[from]
        source: ParamLoadError,
    },

    #[error("Framework composition error: {source}")]
    Composition {
        #[from]
        source: CompositionError,
    },

    #[error("No Lennard-Jones parameters for element '{element}'")]
    MissingParameters { element: String },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
