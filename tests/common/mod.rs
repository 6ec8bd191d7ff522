//! Shared fixtures for integration tests
//!
//! `FakeSheet` stands in for the spreadsheet: it keeps rows in memory,
//! counts reads and appends, and can be told to fail either call.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Barrier;

use clientbook::store::{SheetStore, SheetTransport, StoreError, StoreResult};

pub const RANGE: &str = "Sheet1!A2:F";

#[derive(Default)]
pub struct FakeSheet {
    rows: Mutex<Vec<Vec<Value>>>,
    reads: AtomicUsize,
    appends: AtomicUsize,
    fail_reads: AtomicBool,
    fail_appends: AtomicBool,
    read_barrier: Option<Barrier>,
}

impl FakeSheet {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_rows(rows: Vec<Vec<Value>>) -> Arc<Self> {
        Arc::new(Self {
            rows: Mutex::new(rows),
            ..Default::default()
        })
    }

    /// Every read waits until `readers` reads are in flight, so they all
    /// observe the same rows
    pub fn with_read_barrier(readers: usize) -> Arc<Self> {
        Arc::new(Self {
            read_barrier: Some(Barrier::new(readers)),
            ..Default::default()
        })
    }

    pub fn rows(&self) -> Vec<Vec<Value>> {
        self.rows.lock().unwrap().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn appends(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SheetTransport for FakeSheet {
    async fn read_rows(&self, range: &str) -> StoreResult<Vec<Vec<Value>>> {
        assert_eq!(range, RANGE);
        self.reads.fetch_add(1, Ordering::SeqCst);

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Status {
                status: 401,
                body: "invalid_grant: secret-service-account@example.iam".to_string(),
            });
        }

        let snapshot = self.rows();
        if let Some(barrier) = &self.read_barrier {
            barrier.wait().await;
        }
        Ok(snapshot)
    }

    async fn append_rows(&self, range: &str, rows: Vec<Vec<Value>>) -> StoreResult<()> {
        assert_eq!(range, RANGE);

        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(StoreError::transport("connection reset"));
        }

        self.appends.fetch_add(1, Ordering::SeqCst);
        self.rows.lock().unwrap().extend(rows);
        Ok(())
    }
}

/// A store over `sheet` at the standard range
pub fn sheet_store(sheet: &Arc<FakeSheet>) -> SheetStore<Arc<FakeSheet>> {
    SheetStore::new(sheet.clone(), RANGE)
}

/// A row as Sheets returns it with formatted values (all strings)
pub fn row(id: u64, name: &str) -> Vec<Value> {
    vec![
        json!(id.to_string()),
        json!(name),
        json!(""),
        json!(""),
        json!(""),
        json!("2025-12-01"),
    ]
}
