//! # In-Memory Audit Store Implementation
//!
//! Thread-safe in-memory implementation of the audit store. State lives only
//! for the process lifetime; there is no persistence layer by design.

use crate::audit::Audit;
use crate::store::{AuditStore, AuditStoreError};
use crate::AuditId;
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory audit store
///
/// Uses RwLock for concurrent access with minimal contention. Audits are
/// kept in creation order; lookups scan by id.
#[derive(Clone, Default)]
pub struct InMemoryAuditStore {
    audits: Arc<RwLock<Vec<Audit>>>,
}

impl InMemoryAuditStore {
    /// Create new empty store
    pub fn new() -> Self {
        Self {
            audits: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create store pre-populated with audits
    pub fn with_audits(audits: Vec<Audit>) -> Self {
        Self {
            audits: Arc::new(RwLock::new(audits)),
        }
    }

    /// Number of audits currently held
    pub fn len(&self) -> usize {
        self.audits.read().unwrap().len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.audits.read().unwrap().is_empty()
    }
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn create(&self, audit: Audit) -> Result<(), AuditStoreError> {
        let mut audits = self.audits.write().unwrap();
        if audits.iter().any(|a| a.id == audit.id) {
            return Err(AuditStoreError::DuplicateId { id: audit.id });
        }
        audits.push(audit);
        Ok(())
    }

    async fn update(&self, audit: Audit) -> Result<(), AuditStoreError> {
        let mut audits = self.audits.write().unwrap();
        match audits.iter_mut().find(|a| a.id == audit.id) {
            Some(slot) => {
                *slot = audit;
                Ok(())
            }
            None => Err(AuditStoreError::NotFound { id: audit.id }),
        }
    }

    async fn find_by_id(&self, id: AuditId) -> Result<Audit, AuditStoreError> {
        self.audits
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(AuditStoreError::NotFound { id })
    }

    async fn list(&self) -> Vec<Audit> {
        self.audits.read().unwrap().clone()
    }
}

#[cfg(test)]
#[path = "memory_store_tests.rs"]
mod tests;
