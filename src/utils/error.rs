use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowRosterError {
    #[error("Invalid input: {input:?} is not an integer literal")]
    InvalidInput { input: String },

    #[error("Empty name at index {index}: no first name to extract")]
    EmptyName { index: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}': {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code the CLI reports for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl RowRosterError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RowRosterError::InvalidInput { .. } | RowRosterError::EmptyName { .. } => {
                ErrorSeverity::High
            }
            RowRosterError::ConfigValidationError { .. }
            | RowRosterError::InvalidConfigValueError { .. }
            | RowRosterError::MissingConfigError { .. } => ErrorSeverity::Medium,
            RowRosterError::IoError(_) | RowRosterError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Short message suitable for printing straight to a terminal.
    pub fn user_friendly_message(&self) -> String {
        match self {
            RowRosterError::InvalidInput { input } => {
                format!("Unrecognized characters in input string: {:?}", input)
            }
            RowRosterError::EmptyName { index } => {
                format!("Name #{} is empty", index + 1)
            }
            RowRosterError::IoError(e) => format!("Could not read or write a file: {}", e),
            RowRosterError::SerializationError(e) => format!("Could not encode report: {}", e),
            RowRosterError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            RowRosterError::InvalidConfigValueError { field, value, reason } => {
                format!("{} has an invalid value {:?}: {}", field, value, reason)
            }
            RowRosterError::MissingConfigError { field } => {
                format!("{} is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RowRosterError::InvalidInput { .. } => {
                "Pass a row made of decimal digits, optionally signed"
            }
            RowRosterError::EmptyName { .. } => "Remove blank entries from the roster",
            RowRosterError::IoError(_) => "Check that the file exists and is readable",
            RowRosterError::SerializationError(_) => "Retry without --json",
            RowRosterError::ConfigValidationError { .. }
            | RowRosterError::InvalidConfigValueError { .. }
            | RowRosterError::MissingConfigError { .. } => {
                "Fix the job file and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RowRosterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_high_severity() {
        let err = RowRosterError::InvalidInput {
            input: "abc".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("Unrecognized characters"));

        let err = RowRosterError::EmptyName { index: 2 };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.user_friendly_message(), "Name #3 is empty");
    }

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = RowRosterError::MissingConfigError {
            field: "job.name".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.to_string(), "Missing required configuration: job.name");
    }

    #[test]
    fn test_serialization_error_is_critical() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RowRosterError::from(source);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.recovery_suggestion(), "Retry without --json");
    }

    #[test]
    fn test_exit_codes_are_distinct_and_non_zero() {
        let codes = [
            ErrorSeverity::High.exit_code(),
            ErrorSeverity::Medium.exit_code(),
            ErrorSeverity::Critical.exit_code(),
        ];
        assert_eq!(codes, [1, 2, 3]);
    }
}
