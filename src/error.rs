//! Error types for Binwheel

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Binwheel operations
pub type Result<T> = std::result::Result<T, BinwheelError>;

/// Main error type for Binwheel
#[derive(Error, Debug)]
pub enum BinwheelError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Task execution errors
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    /// Variable interpolation errors
    #[error("Interpolation error: {0}")]
    Interpolation(#[from] InterpolationError),

    /// Wheel collection errors
    #[error("Artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// YAML parsing errors
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl BinwheelError {
    /// Process exit code to report for this error.
    ///
    /// A failed tool passes its own exit code through; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BinwheelError::Execution(ExecutionError::CommandFailed {
                code: Some(code), ..
            }) if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Configuration parsing and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to find config file (searched: {0})")]
    NotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No module configured; set `module` in binwheel.yml or pass --module")]
    NoModules,

    #[error("'{0}' is not a valid Python module name")]
    InvalidModuleName(String),

    #[error("Tool command for '{0}' is empty")]
    EmptyToolCommand(String),

    #[error("Task '{0}' is not defined")]
    TaskNotFound(String),

    #[error("Failed to load env file '{path}': {error}")]
    EnvFile { path: PathBuf, error: String },
}

/// Task execution errors
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("Command `{command}` failed with exit code {code:?}")]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Failed to start `{command}`: {error}")]
    Spawn { command: String, error: String },

    #[error("Interpreter is empty")]
    EmptyInterpreter,
}

/// Variable interpolation errors
#[derive(Error, Debug)]
pub enum InterpolationError {
    #[error("Variable '{0}' is not defined")]
    UndefinedVariable(String),

    #[error("Recursive interpolation detected")]
    RecursiveInterpolation,
}

/// Errors raised while collecting and copying built wheels
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Invalid wheel pattern '{pattern}': {error}")]
    InvalidPattern { pattern: String, error: String },

    #[error("Failed to read '{path}': {error}")]
    Read { path: PathBuf, error: String },

    #[error("Failed to copy '{path}': {error}")]
    Copy { path: PathBuf, error: String },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for interpolation operations
pub type InterpolationResult<T> = std::result::Result<T, InterpolationError>;

/// Specialized result type for artifact operations
pub type ArtifactResult<T> = std::result::Result<T, ArtifactError>;
