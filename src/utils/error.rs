use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeakError {
    #[error("Could not open file {path}: {source}")]
    FileAccessError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid time '{value}' on line {line}: {reason}")]
    ParseError {
        line: u64,
        value: String,
        reason: String,
    },

    #[error("Invalid visit on line {line}: entry {entry} is after exit {exit}")]
    InvalidVisitError { line: u64, entry: String, exit: String },

    #[error("Input contains no visitor records")]
    EmptyDatasetError,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Parse,
    Config,
    Internal,
}

impl PeakError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PeakError::FileAccessError { .. } | PeakError::EmptyDatasetError => {
                ErrorCategory::Input
            }
            PeakError::CsvError(_)
            | PeakError::ParseError { .. }
            | PeakError::InvalidVisitError { .. } => ErrorCategory::Parse,
            PeakError::ConfigError { .. } | PeakError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            PeakError::IoError(_) | PeakError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input file exists, is readable and is not empty",
            ErrorCategory::Parse => {
                "Each line must be HH:MM,HH:MM with entry not after exit; pass --mode lenient to accept legacy input"
            }
            ErrorCategory::Config => "Check the command line flags and the TOML settings file",
            ErrorCategory::Internal => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, PeakError>;
