//! Certificate lifecycle status: classification and label normalization

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::Expiration;

/// Canonical lifecycle status of a compliance certificate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CertificateStatus {
    /// Within validity, outside the warning window
    #[default]
    Current,
    /// Inside the warning window, not yet expired
    DueSoon,
    /// Strictly past the expiration date
    Expired,
}

impl CertificateStatus {
    /// Label as stored by the spreadsheet service
    pub fn label(&self) -> &'static str {
        match self {
            CertificateStatus::Current => "NO PRAZO",
            CertificateStatus::DueSoon => "A RENOVAR",
            CertificateStatus::Expired => "VENCIDO",
        }
    }

    /// Normalize an arbitrary stored label into a canonical status.
    ///
    /// The spreadsheet is a weakly typed document store and may carry legacy
    /// casing, stray whitespace, or decorated labels. Matching is
    /// case-insensitive substring containment; unrecognized input falls back
    /// to `Current`.
    pub fn from_raw(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        if normalized.contains("vencido") {
            CertificateStatus::Expired
        } else if normalized.contains("a renovar") {
            CertificateStatus::DueSoon
        } else {
            CertificateStatus::Current
        }
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for CertificateStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CertificateStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(CertificateStatus::from_raw(&raw))
    }
}

/// Classify a certificate from its expiration date and warning lead time.
///
/// Pure and total. A certificate is `Expired` strictly after its expiration
/// date, `DueSoon` from `expiration - lead_days` through the expiration date
/// inclusive, and `Current` otherwise. A certificate with no expiration is
/// always `Current`. Negative lead times are treated as zero.
pub fn classify(expiration: Expiration, lead_days: i64, today: NaiveDate) -> CertificateStatus {
    let Expiration::On(expiry) = expiration else {
        return CertificateStatus::Current;
    };
    let warning_start = expiry - Duration::days(lead_days.max(0));

    if today > expiry {
        CertificateStatus::Expired
    } else if today >= warning_start {
        CertificateStatus::DueSoon
    } else {
        CertificateStatus::Current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn classify_boundaries() {
        let expiry = Expiration::On(date(2024, 6, 30));

        assert_eq!(classify(expiry, 30, date(2024, 5, 1)), CertificateStatus::Current);
        // Warning window opens exactly at expiration - lead
        assert_eq!(classify(expiry, 30, date(2024, 5, 31)), CertificateStatus::DueSoon);
        assert_eq!(classify(expiry, 30, date(2024, 6, 15)), CertificateStatus::DueSoon);
        // The expiration day itself is still DueSoon
        assert_eq!(classify(expiry, 30, date(2024, 6, 30)), CertificateStatus::DueSoon);
        assert_eq!(classify(expiry, 30, date(2024, 7, 1)), CertificateStatus::Expired);
    }

    #[test]
    fn no_expiration_is_always_current() {
        assert_eq!(
            classify(Expiration::Indeterminate, 30, date(2999, 1, 1)),
            CertificateStatus::Current
        );
    }

    #[test]
    fn normalizer_examples() {
        assert_eq!(CertificateStatus::from_raw("no prazo"), CertificateStatus::Current);
        assert_eq!(CertificateStatus::from_raw("NO PRAZO "), CertificateStatus::Current);
        assert_eq!(CertificateStatus::from_raw("A Renovar"), CertificateStatus::DueSoon);
        assert_eq!(CertificateStatus::from_raw("VENCIDO!!"), CertificateStatus::Expired);
        assert_eq!(CertificateStatus::from_raw(""), CertificateStatus::Current);
        assert_eq!(CertificateStatus::from_raw("unknown"), CertificateStatus::Current);
    }
}
