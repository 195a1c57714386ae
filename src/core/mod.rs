pub mod delivery;
pub mod engine;
pub mod mask;
pub mod validate;

pub use crate::domain::model::{DeliveryOutcome, Lead, LeadForm, LeadPayload};
pub use crate::domain::ports::{ConfigProvider, PostOutcome, Transport};
pub use crate::utils::error::Result;
