//! Derived dashboard views: filter/search and summary counts
//!
//! Both derivations are pure functions over the full collection; neither
//! mutates or reorders the source.

use serde::{Deserialize, Serialize};

use crate::models::Certificate;
use crate::status::CertificateStatus;

/// Status selector for the filter engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(CertificateStatus),
}

impl StatusFilter {
    /// Parse a selector value from the UI: empty or "all" selects everything,
    /// anything else goes through the status normalizer.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            StatusFilter::All
        } else {
            StatusFilter::Only(CertificateStatus::from_raw(trimmed))
        }
    }

    pub fn matches(&self, status: CertificateStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Apply the status selector and free-text query to the collection.
///
/// Order-preserving, no ranking. Company, document type, and issuing
/// authority match case-insensitively; the tax id matches by literal
/// substring so a pasted formatted CNPJ fragment still hits.
pub fn filter_certificates<'a>(
    certificates: &'a [Certificate],
    query: &str,
    selector: StatusFilter,
) -> Vec<&'a Certificate> {
    let query_lower = query.to_lowercase();
    certificates
        .iter()
        .filter(|cert| selector.matches(cert.status))
        .filter(|cert| {
            query.is_empty()
                || cert.company.to_lowercase().contains(&query_lower)
                || cert.tax_id.contains(query)
                || cert.document_type.to_lowercase().contains(&query_lower)
                || cert.issuing_authority.to_lowercase().contains(&query_lower)
        })
        .collect()
}

/// Summary counts for the dashboard cards.
///
/// Always computed over the unfiltered collection, independent of the
/// current search or selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub current: usize,
    pub due_soon: usize,
    pub expired: usize,
}

impl DashboardStats {
    pub fn compute(certificates: &[Certificate]) -> Self {
        let mut stats = DashboardStats {
            total: certificates.len(),
            ..DashboardStats::default()
        };
        for cert in certificates {
            match cert.status {
                CertificateStatus::Current => stats.current += 1,
                CertificateStatus::DueSoon => stats.due_soon += 1,
                CertificateStatus::Expired => stats.expired += 1,
            }
        }
        stats
    }
}
