pub mod toml_config;

pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lead-relay")]
#[command(about = "Masks, validates and relays a contact-form lead to a spreadsheet webhook")]
pub struct CliConfig {
    /// Full name of the lead (masked to letters and spaces)
    #[arg(long)]
    pub nome: String,

    /// Contact email address
    #[arg(long)]
    pub email: String,

    /// Phone number; any formatting is stripped and re-applied
    #[arg(long)]
    pub telefone: String,

    /// Free text or a project name
    #[arg(long, default_value = "")]
    pub interesse: String,

    /// Optional free-text message
    #[arg(long, default_value = "")]
    pub mensagem: String,

    /// Webhook endpoint; falls back to the WEBHOOK_URL environment variable
    #[arg(long, env = "WEBHOOK_URL")]
    pub webhook_url: Option<String>,

    /// WhatsApp link suggested when delivery fails
    #[arg(long, env = "WHATSAPP_LINK")]
    pub whatsapp: Option<String>,

    /// TOML config file; webhook/contact settings in it take precedence
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    fn whatsapp_link(&self) -> Option<&str> {
        self.whatsapp.as_deref()
    }
}

/// Settings after merging the command line with an optional TOML file.
/// File values win for the webhook endpoint; the WhatsApp link falls back to
/// the command line when the file does not set one.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub webhook_url: Option<String>,
    pub whatsapp: Option<String>,
}

impl ConfigProvider for AppConfig {
    fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    fn whatsapp_link(&self) -> Option<&str> {
        self.whatsapp.as_deref()
    }
}

#[cfg(feature = "cli")]
impl AppConfig {
    pub fn resolve(cli: &CliConfig) -> crate::utils::error::Result<Self> {
        use crate::utils::validation::{validate_url, Validate};

        if let Some(path) = &cli.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            return Ok(Self {
                webhook_url: file.webhook_url().map(str::to_string),
                whatsapp: file
                    .whatsapp_link()
                    .map(str::to_string)
                    .or_else(|| cli.whatsapp.clone()),
            });
        }

        if let Some(url) = &cli.webhook_url {
            validate_url("webhook-url", url)?;
        }

        Ok(Self {
            webhook_url: cli.webhook_url.clone(),
            whatsapp: cli.whatsapp.clone(),
        })
    }
}
