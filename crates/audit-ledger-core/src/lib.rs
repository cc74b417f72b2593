//! # Audit-Ledger Core
//!
//! Core business logic for the audit-ledger ISO 27001 compliance tracking tool.
//!
//! This crate contains the domain logic for tracking audits against a fixed
//! checklist of required documents, matching uploaded files to checklist
//! entries, deriving audit progress, and maintaining the clause/control
//! self-assessment ledger with manual reviewer overrides.
//!
//! ## Architecture
//!
//! The core follows clean architecture principles:
//! - Business logic depends only on trait abstractions
//! - Infrastructure implementations are injected at runtime
//! - Matching and progress derivation are pure functions over record state
//!
//! ## Usage
//!
//! ```rust
//! use audit_ledger_core::{AuditId, Timestamp};
//!
//! // Core types are available for use across the system
//! let audit_id = AuditId::new();
//! let created_at = Timestamp::now();
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Re-export commonly used types
pub use uuid::Uuid;

// ============================================================================
// Domain Identifier Types
// ============================================================================

/// Unique identifier for audit records
///
/// Uses UUID v4 for global uniqueness; callers supply the id at creation
/// time and the store treats it as the identity key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuditId(Uuid);

impl AuditId {
    /// Generate a new unique audit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get string representation of audit ID
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for AuditId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AuditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AuditId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = s.parse::<Uuid>().map_err(|_| ParseError::InvalidFormat {
            expected: "UUID format".to_string(),
            actual: s.to_string(),
        })?;
        Ok(Self(uuid))
    }
}

/// Unique identifier for documents attached to an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a new unique document ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get string representation of document ID
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = s.parse::<Uuid>().map_err(|_| ParseError::InvalidFormat {
            expected: "UUID format".to_string(),
            actual: s.to_string(),
        })?;
        Ok(Self(uuid))
    }
}

/// Unique identifier for evidence files attached to assessment items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceId(Uuid);

impl EvidenceId {
    /// Generate a new unique evidence ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get string representation of evidence ID
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for EvidenceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EvidenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EvidenceId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = s.parse::<Uuid>().map_err(|_| ParseError::InvalidFormat {
            expected: "UUID format".to_string(),
            actual: s.to_string(),
        })?;
        Ok(Self(uuid))
    }
}

// ============================================================================
// Time Types
// ============================================================================

/// UTC timestamp recorded on audits, documents, and evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create timestamp for current moment
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parse timestamp from RFC3339 string
    pub fn from_rfc3339(s: &str) -> Result<Self, ParseError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|_| ParseError::InvalidFormat {
                expected: "RFC3339 datetime".to_string(),
                actual: s.to_string(),
            })?
            .with_timezone(&Utc);
        Ok(Self(dt))
    }

    /// Convert to RFC3339 string
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Calendar date portion formatted as `YYYY-MM-DD`
    pub fn iso_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Get underlying DateTime
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_rfc3339())
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Error type for string parsing failures
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid format: expected {expected}, got '{actual}'")]
    InvalidFormat { expected: String, actual: String },
}

// ============================================================================
// Module declarations
// ============================================================================

/// Pinned reference catalogs: required documents, ISO requirements, and
/// assessment seed data
pub mod catalog;

/// Audit and document record types
pub mod audit;

/// Checklist matching and progress derivation rules
pub mod matcher;

/// Audit store trait and error taxonomy
pub mod store;

/// Document analysis service coordinating matcher and store
pub mod analysis;

/// Assessment ledger for management clauses and Annex A controls
pub mod assessment;

/// CSV export for assessment rows
pub mod export;

/// Storage adapters module for infrastructure implementations
pub mod adapters;

// Re-export key types for convenience
pub use adapters::InMemoryAuditStore;
pub use analysis::{AnalysisError, AnalysisReport, AnalysisService};
pub use assessment::{
    AssessmentItem, AssessmentKind, AssessmentLedger, AssessmentStatus, Confidence,
    DocumentReference, Evidence, ItemFilter, LedgerError, NonConformity, NonconformitySeverity,
    OverrideRejected, OverrideRequest,
};
pub use audit::{
    Audit, AuditLifecycle, AuditType, Document, DocumentStatus, FileHandle, MissingInformation,
};
pub use catalog::{DocumentType, IsoRequirement, RequiredDocument};
pub use export::{AssessmentRow, CsvExport};
pub use matcher::{
    derive_progress, match_uploads, requirement_completion, AuditProgress, MatchOutcome,
    RequirementCompletion,
};
pub use store::{AuditStore, AuditStoreError};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
