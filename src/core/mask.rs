//! Display masks applied to raw form input on every change, before validation.
//! Both masks are projections: re-applying one to its own output is a no-op.

use crate::domain::model::LeadForm;

/// Maximum rendered length of a masked phone: `(DD) DDDDD-DDDD`.
/// Consuming inputs enforce this as a second line of defense.
pub const PHONE_MAX_LEN: usize = 15;

/// Brazilian phone mask. Strips every non-digit, then renders stepwise on the
/// digit count: `(DD`, `(DD) DDDDD`, `(DD) DDDDD-DDDD`. Digits past the 11th
/// are dropped.
pub fn mask_phone(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    let d = digits.as_str();

    match d.len() {
        0 => String::new(),
        1..=2 => format!("({}", d),
        3..=7 => format!("({}) {}", &d[..2], &d[2..]),
        8..=11 => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..11]),
    }
}

/// Name mask: keeps ASCII letters, Latin-1 accented letters (U+00C0..=U+00FF)
/// and whitespace; everything else is dropped in place.
pub fn mask_name(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || ('\u{C0}'..='\u{FF}').contains(c) || c.is_whitespace())
        .collect()
}

/// Applies both masks to a raw form, leaving the free-text fields untouched.
pub fn apply(mut form: LeadForm) -> LeadForm {
    form.nome = mask_name(&form.nome);
    form.telefone = mask_phone(&form.telefone);
    form
}
