use crate::core::delivery::DeliveryClient;
use crate::core::{mask, validate, ConfigProvider, Transport};
use crate::domain::model::{DeliveryOutcome, LeadForm};
use crate::utils::error::{LeadError, Result};

/// Runs the submission stages in order: mask, validate, configured-check,
/// deliver. Validation failures never reach the network.
pub struct SubmitEngine<T: Transport, C: ConfigProvider> {
    client: DeliveryClient<T, C>,
}

impl<T: Transport, C: ConfigProvider> SubmitEngine<T, C> {
    pub fn new(client: DeliveryClient<T, C>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &DeliveryClient<T, C> {
        &self.client
    }

    pub async fn submit(&self, form: LeadForm) -> Result<DeliveryOutcome> {
        tracing::debug!("masking lead input");
        let masked = mask::apply(form);

        tracing::debug!("validating lead");
        let lead = validate::validate(&masked)?;

        if !self.client.is_configured() {
            return Err(LeadError::NotConfigured);
        }

        tracing::info!("submitting lead for {}", lead.nome);
        self.client.deliver(&lead).await
    }
}
