//! Validation utilities for certificate records
//!
//! Required-field and format checks enforced at the input boundary, before a
//! record is sent to the gateway. The remote store itself accepts anything.

use validator::ValidationError;

/// Email is optional, but must look like an address when present
pub fn optional_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Ok(());
    }
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email"))
    }
}

/// Coerce a spreadsheet lead-time cell into whole days.
///
/// Malformed input is 0, never an error; negative values clamp to 0.
pub fn coerce_lead_days(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0).max(0)
}

/// Validate CNPJ shape: 14 digits once punctuation is stripped.
///
/// Empty is accepted, the field is optional on the form.
pub fn validate_tax_id(tax_id: &str) -> Result<(), &'static str> {
    if tax_id.is_empty() {
        return Ok(());
    }
    let digits = tax_id.chars().filter(|c| c.is_ascii_digit()).count();
    if digits == 14 {
        Ok(())
    } else {
        Err("CNPJ must contain 14 digits")
    }
}
