//! # Client Record Stores
//!
//! A store owns all client records durably (or, for the memory store, for
//! the life of the process). Records are only ever listed or appended.
//!
//! Two implementations share the [`ClientStore`] contract:
//!
//! - [`SheetStore`] reads and appends spreadsheet rows through a
//!   [`SheetTransport`]
//! - [`MemoryStore`] keeps records in process
//!
//! # Concurrency
//!
//! Identity assignment in [`SheetStore`] is read-then-append with no
//! precondition on the write. Two concurrent appends may read the same last
//! row and assign the same id. Deployments are expected to run a single
//! writer.

pub mod errors;
pub mod memory;
pub mod rows;
pub mod sheet;

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::clients::{ClientRecord, NewClient};

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use sheet::{SheetStore, SheetTransport};

/// List/append contract shared by every store
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// All records in store order
    async fn list(&self) -> StoreResult<Vec<ClientRecord>>;

    /// Assign identity and date, persist, and return the new record
    async fn append(&self, input: NewClient) -> StoreResult<ClientRecord>;

    /// Short backend name for health output and logs
    fn kind(&self) -> &'static str;
}

/// How the next id is derived from existing records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdPolicy {
    /// One past the id of the last row in store order
    #[default]
    LastRow,
    /// One past the largest id anywhere in the store
    MaxId,
}

impl IdPolicy {
    /// Next id given the current records. An empty store yields 1.
    ///
    /// Fails when the base id is already `u64::MAX`.
    pub fn next_id(&self, records: &[ClientRecord]) -> StoreResult<u64> {
        let base = match self {
            IdPolicy::LastRow => records.last().map(|r| r.id),
            IdPolicy::MaxId => records.iter().map(|r| r.id).max(),
        };
        base.unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| StoreError::decode("id space exhausted"))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IdPolicy::LastRow => "last-row",
            IdPolicy::MaxId => "max-id",
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "last-row" => Ok(IdPolicy::LastRow),
            "max-id" => Ok(IdPolicy::MaxId),
            other => Err(format!("unknown id policy '{}'", other)),
        }
    }
}
