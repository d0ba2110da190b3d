use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_ENERGY_THRESHOLD: f64 = 40.0;
pub const DEFAULT_ACCESS_COEFF: f64 = 0.8;
pub const DEFAULT_ENERGY_STEP: f64 = 0.1;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Received negative value for the temperature: {0} K")]
    NegativeTemperature(f64),

    #[error("Received negative value for the energy threshold: {0} kJ/mol")]
    NegativeEnergyThreshold(f64),

    #[error("Accessibility coefficient out of range [0, 1]: {0}")]
    AccessCoeffOutOfRange(f64),

    #[error("Interaction cutoff must be positive, got {0} Å")]
    NonPositiveCutoff(f64),

    #[error("Grid spacing must be positive, got {0} Å")]
    NonPositiveSpacing(f64),

    #[error("Energy step must be positive, got {0} kJ/mol")]
    NonPositiveEnergyStep(f64),
}

/// All parameters of one screening run. Validation happens before any
/// computation; a config that fails [`ScreeningConfig::validate`] produces
/// no output at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningConfig {
    pub structure_file: PathBuf,
    pub forcefield_path: PathBuf,
    /// Temperature in K.
    pub temperature: f64,
    /// Interaction distance cutoff in Å.
    pub cutoff: f64,
    /// Element symbol of the guest species.
    pub guest_element: String,
    /// Requested grid resolution in Å.
    pub approx_spacing: f64,
    /// Global energy ceiling of the sweep, in kJ/mol.
    pub energy_threshold: f64,
    /// Fraction of the combined Lennard-Jones diameter below which a cell is
    /// considered blocked by a framework atom. In [0, 1].
    pub access_coeff: f64,
    /// Threshold increment of the percolation sweep, in kJ/mol. Fixed and
    /// temperature-independent.
    pub energy_step: f64,
}

impl ScreeningConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.temperature < 0.0 {
            return Err(ConfigError::NegativeTemperature(self.temperature));
        }
        if self.energy_threshold < 0.0 {
            return Err(ConfigError::NegativeEnergyThreshold(self.energy_threshold));
        }
        if !(0.0..=1.0).contains(&self.access_coeff) {
            return Err(ConfigError::AccessCoeffOutOfRange(self.access_coeff));
        }
        if self.cutoff <= 0.0 {
            return Err(ConfigError::NonPositiveCutoff(self.cutoff));
        }
        if self.approx_spacing <= 0.0 {
            return Err(ConfigError::NonPositiveSpacing(self.approx_spacing));
        }
        if self.energy_step <= 0.0 {
            return Err(ConfigError::NonPositiveEnergyStep(self.energy_step));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ScreeningConfigBuilder {
    structure_file: Option<PathBuf>,
    forcefield_path: Option<PathBuf>,
    temperature: Option<f64>,
    cutoff: Option<f64>,
    guest_element: Option<String>,
    approx_spacing: Option<f64>,
    energy_threshold: Option<f64>,
    access_coeff: Option<f64>,
    energy_step: Option<f64>,
}

impl ScreeningConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn structure_file(mut self, path: PathBuf) -> Self {
        self.structure_file = Some(path);
        self
    }

    pub fn forcefield_path(mut self, path: PathBuf) -> Self {
        self.forcefield_path = Some(path);
        self
    }

    pub fn temperature(mut self, kelvin: f64) -> Self {
        self.temperature = Some(kelvin);
        self
    }

    pub fn cutoff(mut self, angstrom: f64) -> Self {
        self.cutoff = Some(angstrom);
        self
    }

    pub fn guest_element(mut self, symbol: impl Into<String>) -> Self {
        self.guest_element = Some(symbol.into());
        self
    }

    pub fn approx_spacing(mut self, angstrom: f64) -> Self {
        self.approx_spacing = Some(angstrom);
        self
    }

    pub fn energy_threshold(mut self, kj_mol: f64) -> Self {
        self.energy_threshold = Some(kj_mol);
        self
    }

    pub fn access_coeff(mut self, coeff: f64) -> Self {
        self.access_coeff = Some(coeff);
        self
    }

    pub fn energy_step(mut self, kj_mol: f64) -> Self {
        self.energy_step = Some(kj_mol);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<ScreeningConfig, ConfigError> {
        let config = ScreeningConfig {
            structure_file: self
                .structure_file
                .ok_or(ConfigError::MissingParameter("structure_file"))?,
            forcefield_path: self
                .forcefield_path
                .ok_or(ConfigError::MissingParameter("forcefield_path"))?,
            temperature: self
                .temperature
                .ok_or(ConfigError::MissingParameter("temperature"))?,
            cutoff: self.cutoff.ok_or(ConfigError::MissingParameter("cutoff"))?,
            guest_element: self
                .guest_element
                .ok_or(ConfigError::MissingParameter("guest_element"))?,
            approx_spacing: self
                .approx_spacing
                .ok_or(ConfigError::MissingParameter("approx_spacing"))?,
            energy_threshold: self.energy_threshold.unwrap_or(DEFAULT_ENERGY_THRESHOLD),
            access_coeff: self.access_coeff.unwrap_or(DEFAULT_ACCESS_COEFF),
            energy_step: self.energy_step.unwrap_or(DEFAULT_ENERGY_STEP),
        };
        config.validate()?;
        Ok(config)
    }
}
