// error.rs - Error types for the simulation core

use std::fmt;

/// Contract violations on grid construction and cell access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Rows or columns were zero
    InvalidDimension { rows: usize, cols: usize },
    /// Cell coordinates outside the grid extent
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidDimension { rows, cols } => {
                write!(f, "invalid grid dimensions {}x{}: rows and cols must be positive", rows, cols)
            }
            GridError::OutOfBounds { row, col, rows, cols } => {
                write!(f, "cell ({}, {}) is outside the {}x{} grid", row, col, rows, cols)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Errors raised while loading or validating a configuration file
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
            Self::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_cell() {
        let err = GridError::OutOfBounds { row: 7, col: 2, rows: 5, cols: 5 };
        assert_eq!(err.to_string(), "cell (7, 2) is outside the 5x5 grid");
    }

    #[test]
    fn invalid_config_has_no_source() {
        use std::error::Error;
        let err = ConfigError::Invalid("width must be positive".into());
        assert!(err.source().is_none());
        assert!(err.to_string().contains("width must be positive"));
    }
}
