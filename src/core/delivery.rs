use crate::core::{ConfigProvider, PostOutcome, Transport};
use crate::domain::model::{DeliveryOutcome, Lead, LeadPayload, WebhookReply};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Production transport. The webhook host (a spreadsheet script) answers the
/// JSON path with a readable body when it feels like it; when the response
/// cannot be read at all we report `NetworkBlocked` so the client can fall
/// back to the form-encoded path.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, payload: &LeadPayload) -> PostOutcome {
        let response = match self.client.post(url).json(payload).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("primary POST failed before a response: {}", e);
                return PostOutcome::NetworkBlocked;
            }
        };

        let status = response.status();
        if !status.is_success() {
            return PostOutcome::HttpError {
                status: status.as_u16(),
            };
        }

        match response.json::<WebhookReply>().await {
            Ok(reply) => PostOutcome::Accepted {
                success: reply.success,
            },
            // 2xx but the body could not be read or parsed. Same treatment as
            // a blocked response: the request went out, the answer is opaque.
            Err(e) => {
                tracing::debug!("primary response body unreadable: {}", e);
                PostOutcome::NetworkBlocked
            }
        }
    }

    async fn post_form(&self, url: &str, payload: &LeadPayload) -> Result<()> {
        // Fire-and-forget: dispatch the form POST and drop the response
        // without inspecting it.
        self.client.post(url).form(payload).send().await?;
        Ok(())
    }
}

/// Delivers a validated lead to the configured webhook. Holds its own
/// configuration and transport; constructed once at startup and passed by
/// reference to callers.
pub struct DeliveryClient<T: Transport, C: ConfigProvider> {
    transport: T,
    config: C,
}

impl<T: Transport, C: ConfigProvider> DeliveryClient<T, C> {
    pub fn new(transport: T, config: C) -> Self {
        Self { transport, config }
    }

    pub fn is_configured(&self) -> bool {
        self.config
            .webhook_url()
            .map(|u| !u.trim().is_empty())
            .unwrap_or(false)
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// One primary attempt; on a blocked response, exactly one fallback
    /// attempt. No retries, no queuing.
    pub async fn deliver(&self, lead: &Lead) -> Result<DeliveryOutcome> {
        let url = match self.config.webhook_url() {
            Some(url) if !url.trim().is_empty() => url,
            _ => return Err(crate::utils::error::LeadError::NotConfigured),
        };

        let payload = LeadPayload::from_lead(lead);

        tracing::debug!("posting lead to webhook: {}", url);
        match self.transport.post_json(url, &payload).await {
            PostOutcome::Accepted { success } => {
                if success == Some(false) {
                    tracing::warn!("webhook reported failure for lead");
                    Ok(DeliveryOutcome::Rejected {
                        reason: "webhook reported failure".to_string(),
                    })
                } else {
                    tracing::info!("lead delivered and confirmed by webhook");
                    Ok(DeliveryOutcome::Delivered)
                }
            }
            PostOutcome::HttpError { status } => {
                tracing::warn!("webhook answered HTTP {}", status);
                Ok(DeliveryOutcome::Rejected {
                    reason: format!("webhook returned HTTP {}", status),
                })
            }
            PostOutcome::NetworkBlocked => {
                tracing::info!("primary path blocked, falling back to form POST");
                self.transport.post_form(url, &payload).await?;
                // The fallback response is unobservable; report that honestly
                // instead of a confirmed delivery.
                Ok(DeliveryOutcome::Unknown)
            }
        }
    }
}
