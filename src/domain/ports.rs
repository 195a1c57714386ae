use crate::domain::model::LeadPayload;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Result of a primary-path POST, as far as the transport can observe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOutcome {
    /// 2xx with a readable body; `success` is the reply's optional flag.
    Accepted { success: Option<bool> },
    /// The server answered with a non-success status.
    HttpError { status: u16 },
    /// The request may have been delivered but no response could be read
    /// (connection failure or unreadable body). Triggers the fallback path.
    NetworkBlocked,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Primary path: JSON POST, response inspected.
    async fn post_json(&self, url: &str, payload: &LeadPayload) -> PostOutcome;

    /// Fallback path: form-encoded POST, fire-and-forget. `Ok(())` means the
    /// request was dispatched; the remote result is deliberately not read.
    async fn post_form(&self, url: &str, payload: &LeadPayload) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn webhook_url(&self) -> Option<&str>;
    fn whatsapp_link(&self) -> Option<&str>;
}
