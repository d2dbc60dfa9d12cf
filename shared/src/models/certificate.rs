//! Certificate record model
//!
//! Wire field names are the spreadsheet store's (Portuguese); this module is
//! the only place they appear. Everything coming off the wire is normalized
//! here, at the ingestion boundary: status labels, date strings, and lead
//! times never reach the rest of the pipeline in raw form.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::Validate;

use crate::status::{classify, CertificateStatus};

/// Expiration of a certificate: a concrete date or the open-ended sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expiration {
    /// The spreadsheet sentinel `INDETERMINADO`: the document never expires
    #[default]
    Indeterminate,
    On(NaiveDate),
}

impl Expiration {
    /// Parse a wire value. Empty or unparseable input behaves as
    /// no-expiration, matching how an unset form field is classified.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("INDETERMINADO") {
            return Expiration::Indeterminate;
        }
        match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            Ok(date) => Expiration::On(date),
            Err(_) => Expiration::Indeterminate,
        }
    }
}

impl std::fmt::Display for Expiration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expiration::Indeterminate => write!(f, "INDETERMINADO"),
            Expiration::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for Expiration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Expiration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Expiration::parse(&raw))
    }
}

/// A tracked compliance certificate record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Certificate {
    /// Assigned by the remote store; `None` only on a record being created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "empresa", default)]
    #[validate(length(min = 1, message = "company is required"))]
    pub company: String,

    #[serde(rename = "cnpj", default)]
    pub tax_id: String,

    #[serde(default)]
    #[validate(custom = "crate::validation::optional_email")]
    pub email: String,

    #[serde(rename = "tipoDocumento", default)]
    #[validate(length(min = 1, message = "document type is required"))]
    pub document_type: String,

    #[serde(rename = "orgao", default)]
    pub issuing_authority: String,

    #[serde(rename = "dataEmissao", default, with = "optional_date")]
    pub issue_date: Option<NaiveDate>,

    #[serde(rename = "fimVigencia", default)]
    pub expiration: Expiration,

    #[serde(
        rename = "antecedenciaDias",
        default = "default_lead_days",
        deserialize_with = "lenient_lead_days"
    )]
    pub warning_lead_days: i64,

    #[serde(rename = "statusNovoVenc", default)]
    pub status: CertificateStatus,

    #[serde(rename = "gestor", default)]
    pub manager: String,

    #[serde(rename = "responsavel", default)]
    pub owner: String,

    /// Kept as display text, the way the remote store treats it
    #[serde(rename = "taxRenovacao", default)]
    pub renewal_fee: String,

    #[serde(rename = "anexoUrl", default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl Certificate {
    /// Rederive the status from the temporal fields.
    ///
    /// Called at save time: the remote store does not recompute status
    /// server-side, so what is sent is what gets stored.
    pub fn recompute_status(&mut self, today: NaiveDate) {
        self.status = classify(self.expiration, self.warning_lead_days, today);
    }
}

impl Default for Certificate {
    fn default() -> Self {
        Self {
            id: None,
            company: String::new(),
            tax_id: String::new(),
            email: String::new(),
            document_type: String::new(),
            issuing_authority: String::new(),
            issue_date: None,
            expiration: Expiration::Indeterminate,
            warning_lead_days: default_lead_days(),
            status: CertificateStatus::Current,
            manager: String::new(),
            owner: String::new(),
            renewal_fee: "R$ 0,00".to_string(),
            attachment_url: None,
        }
    }
}

fn default_lead_days() -> i64 {
    30
}

/// Lead time tolerant of spreadsheet typing: numbers pass through, numeric
/// strings are parsed, anything else is 0. Never negative.
fn lenient_lead_days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_i64().unwrap_or(0).max(0),
        serde_json::Value::String(s) => crate::validation::coerce_lead_days(&s),
        _ => 0,
    })
}

/// Calendar date or empty string, sheet-style
mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
    }
}
