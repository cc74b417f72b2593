//! # Audit Store Module
//!
//! Trait abstraction over audit record storage. Records are replaced whole;
//! there is no partial in-place mutation and no delete operation.

use crate::audit::Audit;
use crate::AuditId;
use async_trait::async_trait;

/// Error type for audit store operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditStoreError {
    /// No audit with the given id exists
    ///
    /// `update` fails explicitly rather than silently ignoring an unknown
    /// id, so callers cannot lose writes without noticing.
    #[error("Audit not found: {id}")]
    NotFound { id: AuditId },

    /// An audit with the given id already exists
    #[error("Audit already exists: {id}")]
    DuplicateId { id: AuditId },
}

/// Storage abstraction for the session's audit collection
///
/// The store is the single source of truth consumed by all views. Mutations
/// are synchronous, atomic whole-record replacements.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Append a new audit
    ///
    /// # Errors
    /// - `AuditStoreError::DuplicateId` - an audit with this id exists
    async fn create(&self, audit: Audit) -> Result<(), AuditStoreError>;

    /// Replace the audit whose id matches `audit.id`
    ///
    /// # Errors
    /// - `AuditStoreError::NotFound` - no audit with this id exists
    async fn update(&self, audit: Audit) -> Result<(), AuditStoreError>;

    /// Look up an audit by id
    ///
    /// # Errors
    /// - `AuditStoreError::NotFound` - no audit with this id exists
    async fn find_by_id(&self, id: AuditId) -> Result<Audit, AuditStoreError>;

    /// All audits in creation order
    async fn list(&self) -> Vec<Audit>;
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
