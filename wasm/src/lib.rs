//! WebAssembly module for the Compliance Certificate Dashboard
//!
//! Provides client-side computation for the dashboard frontend:
//! - Status classification at save time
//! - Stored-label normalization
//! - Filter/search and summary counts
//! - Form field validation

use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

use shared::dashboard::{filter_certificates, DashboardStats, StatusFilter};
use shared::models::{Certificate, Expiration};
use shared::status::{classify, CertificateStatus};

// Re-export shared types for use in JavaScript glue
pub use shared::dashboard::*;
pub use shared::models::*;
pub use shared::status::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    web_sys::console::log_1(&"compliance dashboard wasm initialized".into());
}

/// Today's date in the browser timezone
fn browser_today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or(NaiveDate::MIN)
}

/// Classify a certificate for a given reference date.
///
/// `expiration` is a `YYYY-MM-DD` string or `INDETERMINADO`; the result is
/// the stored label ("NO PRAZO" / "A RENOVAR" / "VENCIDO").
#[wasm_bindgen]
pub fn classify_certificate_status(
    expiration: &str,
    lead_days: i32,
    today: &str,
) -> Result<String, JsValue> {
    let today = NaiveDate::parse_from_str(today.trim(), "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date: {}", e)))?;
    let status = classify(Expiration::parse(expiration), lead_days as i64, today);
    Ok(status.label().to_string())
}

/// Classify a certificate as of today (browser clock)
#[wasm_bindgen]
pub fn classify_certificate_status_now(expiration: &str, lead_days: i32) -> String {
    classify(Expiration::parse(expiration), lead_days as i64, browser_today())
        .label()
        .to_string()
}

/// Normalize a stored status label into its canonical form
#[wasm_bindgen]
pub fn normalize_status_label(raw: &str) -> String {
    CertificateStatus::from_raw(raw).label().to_string()
}

/// Filter a JSON array of certificates by query and status selector
#[wasm_bindgen]
pub fn filter_certificates_json(
    records_json: &str,
    query: &str,
    selector: &str,
) -> Result<String, JsValue> {
    let records: Vec<Certificate> = serde_json::from_str(records_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid records JSON: {}", e)))?;

    let hits = filter_certificates(&records, query, StatusFilter::parse(selector));
    serde_json::to_string(&hits).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute the dashboard summary counts from a JSON array of certificates
#[wasm_bindgen]
pub fn dashboard_stats_json(records_json: &str) -> Result<String, JsValue> {
    let records: Vec<Certificate> = serde_json::from_str(records_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid records JSON: {}", e)))?;

    let stats = DashboardStats::compute(&records);
    serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate a CNPJ shape for form feedback
#[wasm_bindgen]
pub fn validate_certificate_tax_id(tax_id: &str) -> bool {
    shared::validation::validate_tax_id(tax_id).is_ok()
}

/// Validate an optional email for form feedback
#[wasm_bindgen]
pub fn validate_certificate_email(email: &str) -> bool {
    shared::validation::optional_email(email).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_with_reference_date() {
        let label = classify_certificate_status("2024-06-30", 30, "2024-06-15").unwrap();
        assert_eq!(label, "A RENOVAR");

        let label = classify_certificate_status("INDETERMINADO", 30, "2024-06-15").unwrap();
        assert_eq!(label, "NO PRAZO");
    }

    #[test]
    fn filter_json_round_trip() {
        let records = r#"[
            { "id": "1", "empresa": "Acme", "cnpj": "11.111", "statusNovoVenc": "NO PRAZO" },
            { "id": "2", "empresa": "Beta", "cnpj": "22.222", "statusNovoVenc": "VENCIDO" }
        ]"#;

        let hits = filter_certificates_json(records, "acme", "all").unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&hits).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0]["empresa"], "Acme");
    }

    #[test]
    fn stats_json() {
        let records = r#"[
            { "empresa": "Acme", "statusNovoVenc": "NO PRAZO" },
            { "empresa": "Beta", "statusNovoVenc": "vencido" }
        ]"#;

        let stats = dashboard_stats_json(records).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&stats).unwrap();
        assert_eq!(parsed["total"], 2);
        assert_eq!(parsed["current"], 1);
        assert_eq!(parsed["expired"], 1);
    }
}
