use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("Missing required fields: {fields}")]
    MissingFields { fields: String },

    #[error("Invalid email address: {value}")]
    InvalidEmail { value: String },

    #[error("Webhook endpoint is not configured")]
    NotConfigured,

    #[error("Webhook request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, LeadError>;

impl LeadError {
    /// Short message suitable for showing to the person filling the form.
    pub fn user_message(&self) -> String {
        match self {
            LeadError::MissingFields { fields } => {
                format!("Please fill in the required fields: {}", fields)
            }
            LeadError::InvalidEmail { .. } => {
                "Please enter a valid email address (name@domain.com)".to_string()
            }
            LeadError::NotConfigured => {
                "The contact form is not configured yet; the administrator must set the webhook URL"
                    .to_string()
            }
            LeadError::TransportError(_) => "Your message could not be sent".to_string(),
            other => other.to_string(),
        }
    }

    /// Every delivery failure points at the alternative contact channel.
    pub fn recovery_suggestion(&self) -> String {
        match self {
            LeadError::MissingFields { .. } | LeadError::InvalidEmail { .. } => {
                "Correct the highlighted fields and submit again".to_string()
            }
            LeadError::NotConfigured => {
                "Set WEBHOOK_URL (or [webhook].url in the config file) and retry".to_string()
            }
            LeadError::TransportError(_) => {
                "Reach us directly on WhatsApp while the form is unavailable".to_string()
            }
            LeadError::InvalidConfigValueError { .. } | LeadError::MissingConfigError { .. } => {
                "Review the configuration file and environment variables".to_string()
            }
            _ => "Try again in a few minutes".to_string(),
        }
    }

    /// True for errors the visitor can fix locally without any network call.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            LeadError::MissingFields { .. } | LeadError::InvalidEmail { .. }
        )
    }
}
