use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("'{candidate}' is not a full name")]
    NotAFullName { candidate: String },

    #[error("Loan of {amount} rejected")]
    LoanRejected { amount: f64 },

    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ModelError::NotAFullName { .. } => "Provide a first and last name separated by a space",
            ModelError::LoanRejected { .. } => "Request a positive loan amount",
            ModelError::UnknownScenario { .. } => {
                "Use one of: constructor, vehicle, class, electric, account, prototype"
            }
            ModelError::InvalidConfigValue { .. } | ModelError::ConfigParse { .. } => {
                "Check the configuration file"
            }
            ModelError::Io(_) => "Check that the file exists and the output stream is open",
            ModelError::Serialization(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
