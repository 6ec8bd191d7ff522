//! # In-Memory Store
//!
//! Used when no spreadsheet is configured. Records live as long as the
//! handle; nothing survives a restart.

use std::sync::RwLock;

use async_trait::async_trait;

use super::errors::{StoreError, StoreResult};
use super::ClientStore;
use crate::clients::{today_string, ClientRecord, NewClient};

/// Process-local client store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<ClientRecord>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the single demo client
    pub fn with_demo_client() -> Self {
        Self::with_records(vec![ClientRecord {
            id: 1,
            name: "Test Client".to_string(),
            email: "test@example.com".to_string(),
            phone: "0212345678".to_string(),
            note: "First test client".to_string(),
            last_contacted: "2025-12-01".to_string(),
        }])
    }

    /// Create a store pre-populated with `records`
    pub fn with_records(records: Vec<ClientRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn list(&self) -> StoreResult<Vec<ClientRecord>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    async fn append(&self, input: NewClient) -> StoreResult<ClientRecord> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;

        let id = records.len() as u64 + 1;
        let record = ClientRecord::from_input(id, input, today_string());
        records.push(record.clone());

        Ok(record)
    }

    fn kind(&self) -> &'static str {
        "memory"
    }
}
