//! Error types for dmf2csv.

use std::fmt;

/// Errors that can occur during conversion.
///
/// Wrong-length record lines are deliberately NOT represented here: they are
/// skipped with a diagnostic and the run continues. Everything in this enum
/// is fatal to the run.
#[derive(Debug)]
pub enum ConvertError {
    /// An I/O error occurred while reading input data.
    Io(std::io::Error),

    /// The CSV sink reported a write failure.
    Csv(csv::Error),

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Io(e) => write!(f, "io error: {}", e),
            ConvertError::Csv(e) => write!(f, "csv write error: {}", e),
            ConvertError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Io(e) => Some(e),
            ConvertError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(e: std::io::Error) -> Self {
        ConvertError::Io(e)
    }
}

impl From<csv::Error> for ConvertError {
    fn from(e: csv::Error) -> Self {
        ConvertError::Csv(e)
    }
}
