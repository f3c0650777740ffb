use std::path::Path;

use thiserror::Error;

/// Error types for the autoclock configuration core.
///
/// The store and the string derivations themselves never fail; these
/// variants cover the fallible edges — rebuilding a configuration from
/// query parameters and loading deployment settings.
#[derive(Error, Debug)]
pub enum AutoclockError {
    /// A style parameter carried a value outside its closed enum set.
    #[error("unknown {kind} '{value}'")]
    UnknownStyle {
        /// Which style set was being parsed (e.g. "gear style")
        kind: &'static str,
        /// The offending value
        value: String,
    },

    /// A query-string component was not a `key=value` pair.
    #[error("malformed query pair '{pair}'")]
    MalformedQueryPair {
        /// The component that failed to split
        pair: String,
    },

    /// A numeric query parameter failed to parse.
    #[error("invalid value '{value}' for '{key}': {details}")]
    InvalidParameter {
        /// Parameter key
        key: &'static str,
        /// The offending value
        value: String,
        /// Parse error details
        details: String,
    },

    /// I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },
}

/// A specialized `Result` type for autoclock operations.
pub type Result<T> = std::result::Result<T, AutoclockError>;

impl AutoclockError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        AutoclockError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }
}
