/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use thiserror::Error;

// Re-export the subsystem errors
pub use crate::memory::MemoryError;
pub use crate::shell::CommandError;

/// Simulator operation result
pub type SimResult<T> = Result<T, SimulatorError>;

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Clone, Diagnostic)]
pub enum SimulatorError {
    #[error("Memory error: {0}")]
    #[diagnostic(transparent)]
    Memory(#[from] MemoryError),

    #[error("Command error: {0}")]
    #[diagnostic(transparent)]
    Command(#[from] CommandError),

    #[error("Serialization error: {0}")]
    #[diagnostic(
        code(sim::serialization_error),
        help("The snapshot could not be encoded as JSON.")
    )]
    Serialization(String),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Reading the command script failed. Check the path and permissions.")
    )]
    Io(String),
}

impl From<std::io::Error> for SimulatorError {
    fn from(err: std::io::Error) -> Self {
        SimulatorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimulatorError {
    fn from(err: serde_json::Error) -> Self {
        SimulatorError::Serialization(err.to_string())
    }
}

impl SimulatorError {
    /// Whether the error came from the allocation core rather than input handling
    pub fn is_memory_error(&self) -> bool {
        matches!(self, SimulatorError::Memory(_))
    }
}
