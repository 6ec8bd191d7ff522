//! # Spreadsheet Store
//!
//! Adapter between a row-oriented spreadsheet and typed client records.
//!
//! All reads and appends go through one fixed range (`<sheet>!A2:F`; row 1
//! is the header). The store keeps no copy of the rows between calls.

use async_trait::async_trait;
use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::rows::{record_to_row, row_to_record};
use super::{ClientStore, IdPolicy};
use crate::clients::{today_string, ClientRecord, NewClient};

/// Raw row access to an external spreadsheet.
///
/// No transactional guarantees: an append is not conditioned on what a
/// previous read returned.
#[async_trait]
pub trait SheetTransport: Send + Sync {
    /// Every row in `range`, top to bottom
    async fn read_rows(&self, range: &str) -> StoreResult<Vec<Vec<Value>>>;

    /// Append `rows` after the last non-empty row of `range`
    async fn append_rows(&self, range: &str, rows: Vec<Vec<Value>>) -> StoreResult<()>;
}

#[async_trait]
impl<T: SheetTransport + ?Sized> SheetTransport for std::sync::Arc<T> {
    async fn read_rows(&self, range: &str) -> StoreResult<Vec<Vec<Value>>> {
        (**self).read_rows(range).await
    }

    async fn append_rows(&self, range: &str, rows: Vec<Vec<Value>>) -> StoreResult<()> {
        (**self).append_rows(range, rows).await
    }
}

/// Client store backed by spreadsheet rows
pub struct SheetStore<T> {
    transport: T,
    range: String,
    id_policy: IdPolicy,
    verify_writes: bool,
}

impl<T: SheetTransport> SheetStore<T> {
    /// Create a store over `range` with the default identity policy
    pub fn new(transport: T, range: impl Into<String>) -> Self {
        Self {
            transport,
            range: range.into(),
            id_policy: IdPolicy::default(),
            verify_writes: false,
        }
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    /// Re-read the range after each append and confirm the new row landed
    pub fn with_verify_writes(mut self, verify_writes: bool) -> Self {
        self.verify_writes = verify_writes;
        self
    }

    pub fn range(&self) -> &str {
        &self.range
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn read_records(&self) -> StoreResult<Vec<ClientRecord>> {
        let rows = self.transport.read_rows(&self.range).await?;
        Ok(rows.iter().map(|row| row_to_record(row)).collect())
    }

    /// Read back after an append and check the new id is present
    async fn verify_append(&self, record: &ClientRecord) -> StoreResult<()> {
        let records = self.read_records().await?;
        let matches = records.iter().filter(|r| r.id == record.id).count();

        match matches {
            0 => Err(StoreError::AppendNotVisible(record.id)),
            1 => Ok(()),
            n => {
                tracing::warn!(
                    id = record.id,
                    occurrences = n,
                    range = %self.range,
                    "duplicate client identity detected after append"
                );
                Ok(())
            }
        }
    }
}

#[async_trait]
impl<T: SheetTransport> ClientStore for SheetStore<T> {
    async fn list(&self) -> StoreResult<Vec<ClientRecord>> {
        self.read_records().await
    }

    async fn append(&self, input: NewClient) -> StoreResult<ClientRecord> {
        let existing = self.read_records().await?;
        let id = self.id_policy.next_id(&existing)?;
        let record = ClientRecord::from_input(id, input, today_string());

        self.transport
            .append_rows(&self.range, vec![record_to_row(&record)])
            .await?;

        tracing::debug!(id, range = %self.range, policy = %self.id_policy, "appended client row");

        if self.verify_writes {
            self.verify_append(&record).await?;
        }

        Ok(record)
    }

    fn kind(&self) -> &'static str {
        "sheets"
    }
}
