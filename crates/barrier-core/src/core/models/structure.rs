use super::cell::UnitCell;
use crate::core::constants::element_molar_mass;
use nalgebra::Vector3;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CompositionError {
    #[error("Unknown element symbol '{0}' in framework composition")]
    UnknownElement(String),
}

/// One framework atom site in fractional coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub element: String,
    pub frac: Vector3<f64>,
}

/// A crystal structure: unit cell plus the asymmetric framework sites
/// expanded to the full cell content.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub name: String,
    pub cell: UnitCell,
    pub sites: Vec<Site>,
}

impl Structure {
    /// Total molar mass of the framework atoms in g/mol.
    pub fn molar_mass(&self) -> Result<f64, CompositionError> {
        let mut total = 0.0;
        for site in &self.sites {
            total += element_molar_mass(&site.element)
                .ok_or_else(|| CompositionError::UnknownElement(site.element.clone()))?;
        }
        Ok(total)
    }
}
