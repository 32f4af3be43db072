use thiserror::Error;

#[derive(Error, Debug)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound { activity: String },

    #[error("{participant} is already signed up for {activity}")]
    AlreadyEnrolled {
        activity: String,
        participant: String,
    },

    #[error("{participant} is not signed up for {activity}")]
    NotEnrolled {
        activity: String,
        participant: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caused by caller-supplied identifiers; never fatal.
    Client,
    Configuration,
    System,
}

impl ActivityError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ActivityError::ActivityNotFound { .. }
            | ActivityError::AlreadyEnrolled { .. }
            | ActivityError::NotEnrolled { .. } => ErrorCategory::Client,
            ActivityError::ConfigError { .. }
            | ActivityError::InvalidConfigValueError { .. }
            | ActivityError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ActivityError::IoError(_) | ActivityError::ServerError { .. } => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ActivityError::ActivityNotFound { .. } => {
                "Check the activity name against GET /activities".to_string()
            }
            ActivityError::AlreadyEnrolled { .. } => "No action needed".to_string(),
            ActivityError::NotEnrolled { .. } => {
                "Check the participant list before unregistering".to_string()
            }
            ActivityError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            ActivityError::ConfigError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            ActivityError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file or CLI flags", field)
            }
            ActivityError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            ActivityError::ServerError { .. } => {
                "Check that the address is free and the port is allowed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Client => self.to_string(),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("Service failure: {}", self),
        }
    }

    /// Process exit code for failures that reach the binary.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Client => 0,
            ErrorCategory::Configuration => 1,
            ErrorCategory::System => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, ActivityError>;
