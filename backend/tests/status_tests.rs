//! Certificate status tests
//!
//! Covers the classifier boundary semantics and the stored-label normalizer:
//! - expired strictly after the expiration date
//! - due-soon window inclusive at both ends
//! - no-expiration records are always current
//! - arbitrary stored labels always normalize to a canonical status

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use shared::models::Expiration;
use shared::status::{classify, CertificateStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[test]
fn classifier_dated_examples() {
    let expiry = Expiration::On(date(2024, 6, 30));

    assert_eq!(classify(expiry, 30, date(2024, 6, 15)), CertificateStatus::DueSoon);
    assert_eq!(classify(expiry, 30, date(2024, 5, 1)), CertificateStatus::Current);
    assert_eq!(classify(expiry, 30, date(2024, 7, 1)), CertificateStatus::Expired);
}

#[test]
fn expiration_day_is_not_yet_expired() {
    let expiry = Expiration::On(date(2024, 6, 30));
    assert_eq!(classify(expiry, 30, date(2024, 6, 30)), CertificateStatus::DueSoon);
}

#[test]
fn warning_window_opens_inclusively() {
    let expiry = Expiration::On(date(2024, 6, 30));
    // Exactly expiration - lead
    assert_eq!(classify(expiry, 30, date(2024, 5, 31)), CertificateStatus::DueSoon);
    assert_eq!(classify(expiry, 30, date(2024, 5, 30)), CertificateStatus::Current);
}

#[test]
fn zero_lead_warns_only_on_expiration_day() {
    let expiry = Expiration::On(date(2024, 6, 30));
    assert_eq!(classify(expiry, 0, date(2024, 6, 29)), CertificateStatus::Current);
    assert_eq!(classify(expiry, 0, date(2024, 6, 30)), CertificateStatus::DueSoon);
    assert_eq!(classify(expiry, 0, date(2024, 7, 1)), CertificateStatus::Expired);
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

// ============================================================================
// Property Tests
// ============================================================================

fn day_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..=4000).prop_map(|offset| date(2015, 1, 1) + Duration::days(offset))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Expired exactly when today is strictly after the expiration date
    #[test]
    fn prop_expired_iff_strictly_after(
        expiry in day_strategy(),
        today in day_strategy(),
        lead in 0i64..365,
    ) {
        let status = classify(Expiration::On(expiry), lead, today);
        prop_assert_eq!(status == CertificateStatus::Expired, today > expiry);
    }

    /// DueSoon exactly inside [expiration - lead, expiration]
    #[test]
    fn prop_due_soon_iff_in_warning_window(
        expiry in day_strategy(),
        today in day_strategy(),
        lead in 0i64..365,
    ) {
        let status = classify(Expiration::On(expiry), lead, today);
        let in_window = today >= expiry - Duration::days(lead) && today <= expiry;
        prop_assert_eq!(status == CertificateStatus::DueSoon, in_window);
    }

    /// Current in every remaining case
    #[test]
    fn prop_exactly_one_status(
        expiry in day_strategy(),
        today in day_strategy(),
        lead in 0i64..365,
    ) {
        let status = classify(Expiration::On(expiry), lead, today);
        let expired = today > expiry;
        let due_soon = !expired && today >= expiry - Duration::days(lead);

        if expired {
            prop_assert_eq!(status, CertificateStatus::Expired);
        } else if due_soon {
            prop_assert_eq!(status, CertificateStatus::DueSoon);
        } else {
            prop_assert_eq!(status, CertificateStatus::Current);
        }
    }

    /// No expiration is always Current, whatever today or the lead time is
    #[test]
    fn prop_indeterminate_always_current(today in day_strategy(), lead in 0i64..365) {
        prop_assert_eq!(
            classify(Expiration::Indeterminate, lead, today),
            CertificateStatus::Current
        );
    }

    /// Negative lead times behave as zero
    #[test]
    fn prop_negative_lead_is_zero(
        expiry in day_strategy(),
        today in day_strategy(),
        lead in -365i64..0,
    ) {
        prop_assert_eq!(
            classify(Expiration::On(expiry), lead, today),
            classify(Expiration::On(expiry), 0, today)
        );
    }

    /// The normalizer is total: any input yields a canonical status
    #[test]
    fn prop_normalizer_is_total(raw in ".*") {
        let status = CertificateStatus::from_raw(&raw);
        prop_assert!(matches!(
            status,
            CertificateStatus::Current | CertificateStatus::DueSoon | CertificateStatus::Expired
        ));
    }

    /// Decorated and re-cased labels still normalize to the right status
    #[test]
    fn prop_decorated_labels_normalize(decoration in "[!?. ]{0,4}") {
        prop_assert_eq!(
            CertificateStatus::from_raw(&format!("VENCIDO{decoration}")),
            CertificateStatus::Expired
        );
        prop_assert_eq!(
            CertificateStatus::from_raw(&format!(" A Renovar{decoration}")),
            CertificateStatus::DueSoon
        );
        prop_assert_eq!(
            CertificateStatus::from_raw(&format!("no prazo{decoration}")),
            CertificateStatus::Current
        );
    }
}
