use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: f64, available: f64 },

    #[error("Invalid amount for {operation}: {amount} ({reason})")]
    InvalidAmount {
        operation: String,
        amount: f64,
        reason: String,
    },

    #[error("Unknown lesson: {name}")]
    UnknownLesson { name: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Account,
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

impl TourError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TourError::InsufficientBalance { .. } | TourError::InvalidAmount { .. } => {
                ErrorCategory::Account
            }
            TourError::UnknownLesson { .. }
            | TourError::ConfigValidationError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::MissingConfigError { .. } => ErrorCategory::Configuration,
            TourError::IoError(_) | TourError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TourError::InsufficientBalance { .. } => ErrorSeverity::Low,
            TourError::InvalidAmount { .. } => ErrorSeverity::Medium,
            TourError::UnknownLesson { .. }
            | TourError::ConfigValidationError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::MissingConfigError { .. } => ErrorSeverity::High,
            TourError::IoError(_) | TourError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TourError::InsufficientBalance { available, .. } => {
                format!("Withdraw at most {} or deposit funds first", available)
            }
            TourError::InvalidAmount { .. } => {
                "Use a finite, non-negative amount".to_string()
            }
            TourError::UnknownLesson { .. } => {
                "Valid lessons: class, object, inheritance, polymorphism, encapsulation, abstraction"
                    .to_string()
            }
            TourError::ConfigValidationError { .. } => {
                "Check the scenario file is valid TOML".to_string()
            }
            TourError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the scenario file", field)
            }
            TourError::MissingConfigError { field } => {
                format!("Add '{}' to the scenario file", field)
            }
            TourError::IoError(_) => "Check the file path and permissions".to_string(),
            TourError::SerializationError(_) => "Retry with --format text".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::InsufficientBalance { .. } => "Insufficient balance.".to_string(),
            TourError::InvalidAmount { operation, amount, .. } => {
                format!("Cannot {} an amount of {}", operation, amount)
            }
            TourError::UnknownLesson { name } => format!("There is no lesson called '{}'", name),
            TourError::ConfigValidationError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::MissingConfigError { .. } => {
                format!("The scenario configuration is invalid: {}", self)
            }
            TourError::IoError(e) => format!("Could not read or write a file: {}", e),
            TourError::SerializationError(e) => format!("Could not render the report: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
