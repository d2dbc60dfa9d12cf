//! Client-side record store
//!
//! The in-memory ordered collection of certificates and its transitions. The
//! collection is populated by one bulk fetch and mutated only after the
//! gateway confirms an operation; a failed call leaves it exactly as it was.
//! There is no local persistence: everything is re-fetched on restart.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use validator::Validate;

use crate::models::Certificate;

/// Error surfaced by a gateway operation
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("remote store returned {status}: {body}")]
    Remote { status: u16, body: String },

    #[error("malformed response from remote store: {0}")]
    Malformed(String),
}

/// Remote store operations the record store synchronizes through.
///
/// The production implementation speaks HTTP to the spreadsheet script
/// service; tests provide stubs.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Certificate>, GatewayError>;
    async fn create(&self, record: &Certificate) -> Result<Certificate, GatewayError>;
    async fn update(&self, record: &Certificate) -> Result<Certificate, GatewayError>;
    async fn delete(&self, id: &str) -> Result<(), GatewayError>;
}

/// Error surfaced by a store operation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("record has no identifier")]
    MissingId,
}

/// In-memory ordered collection of certificate records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Certificate>,
    loading: bool,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current collection, in original fetch/insert order
    pub fn records(&self) -> &[Certificate] {
        &self.records
    }

    /// Busy flag for the full-collection load
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Bulk-load the collection from the gateway.
    ///
    /// A failed load is logged and degrades to an empty collection so the
    /// dashboard stays usable instead of crashing. No retry.
    pub async fn load<G: Gateway>(&mut self, gateway: &G) {
        self.loading = true;
        match gateway.list().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "loaded certificates");
                self.records = records;
            }
            Err(err) => {
                tracing::error!("failed to load certificates: {err}");
                self.records = Vec::new();
            }
        }
        self.loading = false;
    }

    /// Save a record: create when it has no identifier, update otherwise.
    ///
    /// Required fields are validated and the status is recomputed here, at
    /// save time; the remote store does not rederive it server-side. The
    /// local collection changes only after the gateway confirms.
    pub async fn save<G: Gateway>(
        &mut self,
        gateway: &G,
        mut record: Certificate,
        today: NaiveDate,
    ) -> Result<Certificate, StoreError> {
        record.validate()?;
        record.recompute_status(today);

        match record.id.clone() {
            None => {
                let created = gateway.create(&record).await?;
                self.records.push(created.clone());
                Ok(created)
            }
            Some(id) => {
                let updated = gateway.update(&record).await?;
                if let Some(slot) = self
                    .records
                    .iter_mut()
                    .find(|c| c.id.as_deref() == Some(id.as_str()))
                {
                    *slot = updated.clone();
                }
                Ok(updated)
            }
        }
    }

    /// Remove a record by identifier.
    ///
    /// The local entry is dropped only on confirmed success, so a delete
    /// the remote rejects leaves the collection unchanged.
    pub async fn remove<G: Gateway>(&mut self, gateway: &G, id: &str) -> Result<(), StoreError> {
        if id.is_empty() {
            return Err(StoreError::MissingId);
        }
        gateway.delete(id).await?;
        self.records.retain(|c| c.id.as_deref() != Some(id));
        Ok(())
    }
}
