use chrono::Local;
use serde::{Deserialize, Serialize};

/// Raw form state as entered by a visitor, before masking and validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadForm {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub interesse: String,
    pub mensagem: String,
}

/// A validated lead. Only the validator constructs this, so holding one means
/// `nome`, `email` and `telefone` are non-empty and the email is well-shaped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub interesse: String,
    pub mensagem: String,
}

/// Wire shape posted to the webhook. Field names match what the spreadsheet
/// script expects, both as JSON keys and as form-encoded field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadPayload {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub interesse: String,
    pub mensagem: String,
    pub data: String,
}

impl LeadPayload {
    /// Builds the payload, stamping `data` at call time.
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            nome: lead.nome.clone(),
            email: lead.email.clone(),
            telefone: lead.telefone.clone(),
            interesse: lead.interesse.clone(),
            mensagem: lead.mensagem.clone(),
            data: Local::now().format("%d/%m/%Y, %H:%M:%S").to_string(),
        }
    }
}

/// What the delivery client can actually tell the caller about a submission.
///
/// `Unknown` is the fallback path: the request was dispatched but the remote
/// result is unobservable, so it must not be conflated with a confirmed
/// `Delivered`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Rejected { reason: String },
    Unknown,
}

/// Optional reply body on the primary path. Anything other than an explicit
/// `"success": false` counts as accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookReply {
    pub success: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_carries_all_lead_fields() {
        let lead = Lead {
            nome: "Maria Silva".to_string(),
            email: "maria@example.com".to_string(),
            telefone: "(41) 99999-8888".to_string(),
            interesse: "Empreendimentos".to_string(),
            mensagem: "Gostaria de mais informações".to_string(),
        };

        let payload = LeadPayload::from_lead(&lead);

        assert_eq!(payload.nome, lead.nome);
        assert_eq!(payload.email, lead.email);
        assert_eq!(payload.telefone, lead.telefone);
        assert_eq!(payload.interesse, lead.interesse);
        assert_eq!(payload.mensagem, lead.mensagem);
        assert!(!payload.data.is_empty());
    }

    #[test]
    fn payload_timestamp_is_locale_formatted() {
        let lead = Lead {
            nome: "x".to_string(),
            email: "x@y.z".to_string(),
            telefone: "(41) 99999-8888".to_string(),
            interesse: String::new(),
            mensagem: String::new(),
        };

        let payload = LeadPayload::from_lead(&lead);

        // dd/mm/yyyy, HH:MM:SS
        let re = regex::Regex::new(r"^\d{2}/\d{2}/\d{4}, \d{2}:\d{2}:\d{2}$").unwrap();
        assert!(re.is_match(&payload.data), "got: {}", payload.data);
    }

    #[test]
    fn webhook_reply_success_is_optional() {
        let reply: WebhookReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.success, None);

        let reply: WebhookReply = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(reply.success, Some(false));
    }
}
