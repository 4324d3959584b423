use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistantError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Generative backend unavailable: {reason}")]
    BackendUnavailable { reason: String },

    #[error("Generative backend request failed: {0}")]
    BackendRequestError(#[from] reqwest::Error),

    #[error("Generative backend returned HTTP {status}: {body}")]
    BackendStatusError { status: u16, body: String },

    #[error("Unexpected failure: {message}")]
    UnexpectedFailure { message: String },

    #[error("Invalid relevance pattern: {0}")]
    PatternError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },
}

/// 錯誤分類，用於日誌與降級策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidInput,
    BackendUnavailable,
    BackendFailure,
    UnexpectedFailure,
    Configuration,
}

impl AssistantError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            reason: reason.into(),
        }
    }

    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::UnexpectedFailure {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::InvalidInput,
            Self::BackendUnavailable { .. } => ErrorCategory::BackendUnavailable,
            Self::BackendRequestError(_)
            | Self::BackendStatusError { .. } => ErrorCategory::BackendFailure,
            Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::ConfigValidationError { .. }
            | Self::PatternError(_) => ErrorCategory::Configuration,
            Self::UnexpectedFailure { .. } | Self::IoError(_) => ErrorCategory::UnexpectedFailure,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::InvalidInput => "Message cannot be empty".to_string(),
            ErrorCategory::BackendUnavailable => {
                "The AI assistant is not available right now".to_string()
            }
            ErrorCategory::BackendFailure => {
                "The AI assistant could not be reached".to_string()
            }
            ErrorCategory::UnexpectedFailure => {
                "Something went wrong while processing your message".to_string()
            }
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::InvalidInput => "Type a question about your pet and try again",
            ErrorCategory::BackendUnavailable => {
                "Set GOOGLE_API_KEY to enable AI-generated answers"
            }
            ErrorCategory::BackendFailure => {
                "Check network connectivity, the API key and the backend base URL"
            }
            ErrorCategory::UnexpectedFailure => "Try again in a moment",
            ErrorCategory::Configuration => {
                "Review the command line flags, environment variables or TOML file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AssistantError>;
