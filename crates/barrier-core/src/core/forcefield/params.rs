use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamLoadError {
    #[error("Failed to read force field file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse force field file '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Lennard-Jones parameters for one element: `sigma` in Å, `epsilon` in
/// kJ/mol.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LjParams {
    pub sigma: f64,
    pub epsilon: f64,
}

/// Per-element Lennard-Jones parameter table for guest-framework
/// interactions, loaded from a TOML file with one `[elements.<symbol>]`
/// entry per element.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestForcefield {
    pub elements: HashMap<String, LjParams>,
}

impl GuestForcefield {
    pub fn load(path: &Path) -> Result<Self, ParamLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ParamLoadError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ParamLoadError::Toml {
            path: path.display().to_string(),
            source: e,
        })
    }

    pub fn get(&self, symbol: &str) -> Option<LjParams> {
        self.elements.get(symbol).copied()
    }

    /// Lorentz-Berthelot cross parameters for a guest/framework element pair.
    pub fn mixed(&self, guest: &str, framework: &str) -> Option<LjParams> {
        let g = self.get(guest)?;
        let f = self.get(framework)?;
        Some(LjParams {
            sigma: 0.5 * (g.sigma + f.sigma),
            epsilon: (g.epsilon * f.epsilon).sqrt(),
        })
    }
}
