//! # Mock Store & Failure Injection
//!
//! [`MockSnapshotStore`] implements [`SnapshotStore`] from a queue of scripted
//! expectations instead of real storage. It exists for the cases the in-memory
//! backend cannot produce on demand: a backend that refuses an append, a replay
//! that fails outright, a rewrite that reports an unexpected count.
//!
//! ## When to use the Mock vs the In-Memory Store
//!
//! | Feature | MockSnapshotStore | InMemorySnapshotStore |
//! |---------|-------------------|-----------------------|
//! | **State** | None (expectations) | Real record list |
//! | **Error Injection** | Easy (`return_err`) | Not possible |
//! | **Use Case** | Failure paths of a repository | Normal behavior and recovery |
//!
//! ## Example
//!
//! ```rust
//! use snapshot_store::mock::MockSnapshotStore;
//! use snapshot_store::{Record, SnapshotStore, StoreError};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut store = MockSnapshotStore::new();
//!     store.expect_append().return_err(StoreError::Unavailable("disk full".into()));
//!
//!     let result = store.append(Record::new("k", json!({}))).await;
//!     assert!(matches!(result, Err(StoreError::Unavailable(_))));
//!
//!     store.verify();
//! }
//! ```
//!
//! Expectations are consumed in order. A call that does not match the next
//! expectation panics, which fails the test at the offending call site.

use crate::error::StoreError;
use crate::store::{Record, SnapshotStore};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted call and the result it should produce.
#[derive(Debug)]
enum Expectation {
    Append {
        response: Result<(), StoreError>,
    },
    Rewrite {
        key: String,
        response: Result<usize, StoreError>,
    },
    Replay {
        response: Result<Vec<Record>, StoreError>,
    },
}

type Expectations = Arc<Mutex<VecDeque<Expectation>>>;

/// A scripted [`SnapshotStore`] with expectation tracking.
///
/// Cloning shares the expectation queue and the captured appends, so a test can
/// keep a handle after moving the store into a repository.
#[derive(Debug, Default, Clone)]
pub struct MockSnapshotStore {
    expectations: Expectations,
    appended: Arc<Mutex<Vec<Record>>>,
}

impl MockSnapshotStore {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects an `append` call.
    pub fn expect_append(&mut self) -> AppendExpectationBuilder {
        AppendExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `rewrite` call for `key`.
    pub fn expect_rewrite(&mut self, key: impl Into<String>) -> RewriteExpectationBuilder {
        RewriteExpectationBuilder {
            key: key.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `replay` call.
    pub fn expect_replay(&mut self) -> ReplayExpectationBuilder {
        ReplayExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Records passed to `append` calls that were answered with `Ok`.
    pub fn appended(&self) -> Vec<Record> {
        self.appended.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn next(&self) -> Option<Expectation> {
        self.expectations.lock().unwrap().pop_front()
    }
}

#[async_trait]
impl SnapshotStore for MockSnapshotStore {
    async fn append(&mut self, record: Record) -> Result<(), StoreError> {
        match self.next() {
            Some(Expectation::Append { response }) => {
                if response.is_ok() {
                    self.appended.lock().unwrap().push(record);
                }
                response
            }
            other => panic!("Unexpected append of {}; next expectation: {:?}", record.key, other),
        }
    }

    async fn rewrite(&mut self, key: &str, _body: Value) -> Result<usize, StoreError> {
        match self.next() {
            Some(Expectation::Rewrite {
                key: expected,
                response,
            }) => {
                assert_eq!(expected, key, "rewrite called with unexpected key");
                response
            }
            other => panic!("Unexpected rewrite of {key}; next expectation: {:?}", other),
        }
    }

    async fn replay(&self) -> Result<Vec<Record>, StoreError> {
        match self.next() {
            Some(Expectation::Replay { response }) => response,
            other => panic!("Unexpected replay; next expectation: {:?}", other),
        }
    }
}

/// Builder for `append` expectations.
pub struct AppendExpectationBuilder {
    expectations: Expectations,
}

impl AppendExpectationBuilder {
    /// Sets the expectation to accept the record.
    pub fn return_ok(self) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Append { response: Ok(()) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Append {
                response: Err(error),
            });
    }
}

/// Builder for `rewrite` expectations.
pub struct RewriteExpectationBuilder {
    key: String,
    expectations: Expectations,
}

impl RewriteExpectationBuilder {
    /// Sets the expectation to report `rewritten` records.
    pub fn return_ok(self, rewritten: usize) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Rewrite {
                key: self.key,
                response: Ok(rewritten),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Rewrite {
                key: self.key,
                response: Err(error),
            });
    }
}

/// Builder for `replay` expectations.
pub struct ReplayExpectationBuilder {
    expectations: Expectations,
}

impl ReplayExpectationBuilder {
    /// Sets the expectation to return `records`.
    pub fn return_ok(self, records: Vec<Record>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Replay {
                response: Ok(records),
            });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Replay {
                response: Err(error),
            });
    }
}
