use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("Invalid input for {field}: {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required input: {field}")]
    MissingInput { field: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 依錯誤嚴重程度決定的程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::High => 1,     // 輸入或設定錯誤
            ErrorSeverity::Medium => 2,   // 可重試的錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        }
    }
}

impl RatingError {
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::MissingInput { .. } => ErrorCategory::Input,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) => ErrorCategory::Io,
            Self::CsvError(_) | Self::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidInput { .. } | Self::MissingInput { .. } => ErrorSeverity::High,
            Self::ConfigError { .. } | Self::CsvError(_) => ErrorSeverity::High,
            // 檔案可能只是暫時不可讀，重試即可
            Self::IoError(_) => ErrorSeverity::Medium,
            Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidInput { field, .. } => {
                format!("Check the value of '{}' and try again", field)
            }
            Self::MissingInput { field } => {
                format!("Provide '{}' on the command line or in the config file", field)
            }
            Self::ConfigError { .. } => {
                "Make sure the config file exists and is valid TOML format".to_string()
            }
            Self::IoError(_) => "Check that the file exists and is readable".to_string(),
            Self::CsvError(_) => {
                "History CSV must have a 'zone,profit' header and one voyage per line".to_string()
            }
            Self::SerializationError(_) => "This is a bug, please report it".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidInput { field, reason, .. } => format!("{} is invalid: {}", field, reason),
            Self::MissingInput { field } => format!("{} is required", field),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::IoError(e) => format!("Could not read input: {}", e),
            Self::CsvError(e) => format!("Could not parse voyage history: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, RatingError>;
