use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Invalid price '{value}': {reason}")]
    InvalidPriceError { value: String, reason: String },

    #[error("Unknown course: {value}")]
    UnknownCourseError { value: String },

    #[error("Unknown command: {command}")]
    UnknownCommandError { command: String },

    #[error("Unreadable input: {reason}")]
    InvalidInputError { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
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

impl MenuError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MenuError::IoError(_) | MenuError::SerializationError(_) => ErrorCategory::System,
            MenuError::ConfigParseError { .. } | MenuError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            MenuError::MissingFieldError { .. }
            | MenuError::InvalidPriceError { .. }
            | MenuError::UnknownCourseError { .. }
            | MenuError::UnknownCommandError { .. }
            | MenuError::InvalidInputError { .. } => ErrorCategory::Input,
        }
    }

    /// Input errors are recoverable inside the shell; configuration errors stop startup.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MenuError::IoError(_) => "Check that the file exists and is readable".to_string(),
            MenuError::SerializationError(_) => {
                "Retry with --output text to bypass JSON rendering".to_string()
            }
            MenuError::ConfigParseError { .. } => {
                "Make sure the settings file is valid TOML".to_string()
            }
            MenuError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the settings file", field)
            }
            MenuError::MissingFieldError { field } => {
                format!("Provide a value for '{}'", field)
            }
            MenuError::InvalidPriceError { .. } => {
                "Enter the price as a non-negative amount such as 25 or 25.50".to_string()
            }
            MenuError::UnknownCourseError { .. } => {
                "Use one of: Starters, Mains, Desserts".to_string()
            }
            MenuError::UnknownCommandError { .. } => {
                "Type 'help' to list the available commands".to_string()
            }
            MenuError::InvalidInputError { .. } => {
                "Re-enter the command using UTF-8 text".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => self.to_string(),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
