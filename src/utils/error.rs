use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalizerError {
    #[error("Failed to {operation} '{path}': {source}")]
    IoError {
        operation: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown language code: '{code}'")]
    UnknownLanguageError { code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    FileSystem,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LocalizerError {
    pub fn io(operation: &'static str, path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError { .. } => ErrorCategory::FileSystem,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. }
            | Self::UnknownLanguageError { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_) | Self::PatternError(_) => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::FileSystem => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::IoError { operation, path, source } => match source.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    format!("Check write permissions for '{}'", path)
                }
                std::io::ErrorKind::AlreadyExists | std::io::ErrorKind::NotADirectory => format!(
                    "Remove or rename the file blocking '{}' so a directory can be created",
                    path
                ),
                std::io::ErrorKind::InvalidData => {
                    format!("Make sure '{}' is UTF-8 encoded text", path)
                }
                _ => format!("Retry after fixing the problem that prevented '{}'", operation),
            },
            Self::SerializationError(_) => "Check that the report path is writable".to_string(),
            Self::PatternError(_) => "Check the configured main page name".to_string(),
            Self::ConfigValidationError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration", field)
            }
            Self::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            Self::UnknownLanguageError { .. } => {
                "Use one of the configured language codes".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::FileSystem => format!("File system problem: {}", self),
            ErrorCategory::Processing => format!("Processing problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LocalizerError>;
