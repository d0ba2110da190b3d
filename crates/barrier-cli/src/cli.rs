use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "porebarrier - estimates the energy barrier a guest molecule must cross to diffuse \
             through each symmetry-unique channel of a nanoporous framework, with enthalpy of \
             adsorption and Henry's constant. One CSV line per channel on stdout.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the structure file (CIF, P1 cell).
    pub structure_file: PathBuf,

    /// Path to the guest force-field parameter file (TOML).
    pub forcefield_path: PathBuf,

    /// Temperature in K.
    #[arg(allow_negative_numbers = true)]
    pub temperature: f64,

    /// Interaction distance cutoff in Å.
    pub cutoff: f64,

    /// Element symbol of the guest species (e.g. He).
    pub guest_element: String,

    /// Approximate grid spacing in Å.
    pub approx_spacing: f64,

    /// Global energy ceiling of the percolation sweep, in kJ/mol.
    #[arg(default_value_t = 40.0, allow_negative_numbers = true)]
    pub energy_threshold: f64,

    /// Accessibility coefficient in [0, 1]: fraction of the combined
    /// Lennard-Jones diameter below which a grid cell counts as blocked.
    #[arg(default_value_t = 0.8, allow_negative_numbers = true)]
    pub access_coeff: f64,

    /// Threshold increment of the percolation sweep, in kJ/mol.
    #[arg(long, value_name = "FLOAT", default_value_t = 0.1)]
    pub energy_step: f64,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable the progress bar even on a terminal
    #[arg(long)]
    pub no_progress: bool,
}
