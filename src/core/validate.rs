use crate::domain::model::{Lead, LeadForm};
use crate::utils::error::{LeadError, Result};
use regex::Regex;
use std::sync::LazyLock;

// localpart@domain.tld shape; deliverability is not our problem.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Gates submission on a synchronous local check. Rules apply in order and
/// short-circuit: required fields first, then email shape. On success the
/// trimmed fields are promoted into a `Lead`.
pub fn validate(form: &LeadForm) -> Result<Lead> {
    let nome = form.nome.trim();
    let email = form.email.trim();
    let telefone = form.telefone.trim();

    let mut missing = Vec::new();
    if nome.is_empty() {
        missing.push("nome");
    }
    if email.is_empty() {
        missing.push("email");
    }
    if telefone.is_empty() {
        missing.push("telefone");
    }
    if !missing.is_empty() {
        return Err(LeadError::MissingFields {
            fields: missing.join(", "),
        });
    }

    if !EMAIL_RE.is_match(email) {
        return Err(LeadError::InvalidEmail {
            value: email.to_string(),
        });
    }

    Ok(Lead {
        nome: nome.to_string(),
        email: email.to_string(),
        telefone: telefone.to_string(),
        interesse: form.interesse.trim().to_string(),
        mensagem: form.mensagem.trim().to_string(),
    })
}
