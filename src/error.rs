//! Error types and Result aliases for the console

use std::path::PathBuf;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the console
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Command errors ===
    /// The command interpreter could not be started
    #[error("Failed to spawn command '{command}': {reason}")]
    CommandSpawnFailed { command: String, reason: String },

    /// A program lookup on the search path failed
    #[error("Failed to look up program '{program}': {reason}")]
    ProgramLookupFailed { program: String, reason: String },

    // === Configuration errors ===
    /// Failed to load a configuration file
    #[error("Failed to load config from '{}': {reason}", path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to save a configuration file
    #[error("Failed to save config to '{}': {reason}", path.display())]
    ConfigSaveFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    /// Alias names must be a single non-empty token
    #[error("Invalid alias name '{name}'")]
    InvalidAliasName { name: String },

    // === I/O and serialization errors ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
