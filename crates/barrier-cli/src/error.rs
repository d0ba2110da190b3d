use porebarrier::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Exit code for configuration errors caught before any computation.
pub const EXIT_CONFIG: i32 = 2;
/// Exit code for any other failure (I/O, parsing, internal).
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output error: {0}")]
    Output(#[from] csv::Error),
}

impl CliError {
    /// Configuration errors and everything else map to distinct exit codes;
    /// soft symmetry failures never reach this path.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Engine(EngineError::Config { .. }) => EXIT_CONFIG,
            _ => EXIT_FAILURE,
        }
    }
}
