pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{AppConfig, TomlConfig};

pub use crate::core::delivery::{DeliveryClient, HttpTransport};
pub use crate::core::engine::SubmitEngine;
pub use crate::core::{mask, validate};
pub use crate::domain::model::{DeliveryOutcome, Lead, LeadForm, LeadPayload};
pub use crate::domain::ports::{ConfigProvider, PostOutcome, Transport};
pub use crate::utils::error::{LeadError, Result};
