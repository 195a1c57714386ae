use crate::core::ConfigProvider;
use crate::utils::error::{LeadError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration for deployments that keep the webhook endpoint
/// out of the command line. Values support `${VAR}` environment substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub webhook: WebhookConfig,
    pub contact: Option<ContactConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    pub whatsapp: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LeadError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LeadError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value from the environment; unknown
    /// variables are left as-is so validation can name them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env var regex");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn webhook_url(&self) -> Option<&str> {
        if self.webhook.url.trim().is_empty() {
            None
        } else {
            Some(&self.webhook.url)
        }
    }

    fn whatsapp_link(&self) -> Option<&str> {
        self.contact.as_ref().and_then(|c| c.whatsapp.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("webhook.url", &self.webhook.url)?;

        if let Some(contact) = &self.contact {
            if let Some(whatsapp) = &contact.whatsapp {
                validate_non_empty_string("contact.whatsapp", whatsapp)?;
            }
        }

        Ok(())
    }
}
