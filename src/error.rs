//! Crate-level error types.

use std::fmt;

/// Errors produced by the arcview crate.
///
/// The camera and gesture code is infallible by design (degenerate inputs
/// are clamped, ambiguous gestures are dropped); only the options preset
/// layer touches the filesystem and can fail.
#[derive(Debug)]
pub enum ArcviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ArcviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ArcviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for ArcviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
