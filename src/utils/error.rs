use crate::domain::model::LabId;
use crate::utils::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Lab id {id} already exists")]
    DuplicateId { id: LabId },

    #[error("Lab id {id} not found")]
    NotFound { id: LabId },

    #[error("Lab id {id} is invalid: ids start at 1")]
    InvalidId { id: LabId },

    #[error("No lab id left after {last}")]
    IdSpaceExhausted { last: LabId },

    #[error("Seed entry #{index} rejected: {message}")]
    SeedError { index: usize, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

impl From<ValidationErrors> for LabError {
    fn from(errors: ValidationErrors) -> Self {
        LabError::Validation(errors)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Consistency,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LabError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LabError::Validation(_) => ErrorCategory::Input,
            LabError::DuplicateId { .. }
            | LabError::NotFound { .. }
            | LabError::InvalidId { .. }
            | LabError::IdSpaceExhausted { .. } => ErrorCategory::Consistency,
            LabError::SeedError { .. }
            | LabError::ConfigError { .. }
            | LabError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LabError::IoError(_) | LabError::SerializationError(_) | LabError::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 使用者可以修正後重新送出
            LabError::Validation(_) => ErrorSeverity::Low,
            LabError::SerializationError(_) => ErrorSeverity::Medium,
            LabError::DuplicateId { .. }
            | LabError::NotFound { .. }
            | LabError::InvalidId { .. }
            | LabError::IdSpaceExhausted { .. } => ErrorSeverity::High,
            LabError::SeedError { .. }
            | LabError::ConfigError { .. }
            | LabError::InvalidConfigValueError { .. }
            | LabError::IoError(_)
            | LabError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LabError::Validation(errors) => format!(
                "Correct the following fields and submit again: {}",
                errors.fields().join(", ")
            ),
            LabError::DuplicateId { .. } => {
                "Let the store assign the id instead of supplying one".to_string()
            }
            LabError::NotFound { id } => {
                format!("Run `list` to check that lab {} exists before editing", id)
            }
            LabError::InvalidId { .. } => "Use a positive lab id".to_string(),
            LabError::IdSpaceExhausted { .. } => {
                "Renumber the seed data so the largest id is below u64::MAX".to_string()
            }
            LabError::SeedError { index, .. } => {
                format!("Fix entry #{} of the seed file", index)
            }
            LabError::ConfigError { .. } | LabError::InvalidConfigValueError { .. } => {
                "Check the TOML configuration and command line flags".to_string()
            }
            LabError::IoError(_) => "Check that the file exists and is readable".to_string(),
            LabError::SerializationError(_) => "Make sure the input is valid JSON".to_string(),
            LabError::CsvError(_) => "Try a different output format".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LabError::Validation(errors) => {
                let mut message = String::from("The lab record is invalid:");
                for error in errors.iter() {
                    message.push_str(&format!("\n  - {}: {}", error.field, error.message));
                }
                message
            }
            LabError::DuplicateId { id } => format!("A lab with id {} is already registered", id),
            LabError::NotFound { id } => format!("No lab with id {} was found", id),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabError>;
