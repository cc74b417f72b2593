//! # Audit Record Module
//!
//! Record types for audits and their attached documents. Audits are owned
//! exclusively by the audit store and mutated only through whole-record
//! replacement; nothing outside the store performs partial in-place edits.

use crate::catalog::{DocumentType, RequiredDocument};
use crate::{AuditId, DocumentId, ParseError, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compliance framework tracked by every audit
pub const FRAMEWORK: &str = "ISO 27001";

// ============================================================================
// Enumerations
// ============================================================================

/// Kind of audit engagement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditType {
    Internal,
    Certification,
    Surveillance,
    Recertification,
}

impl AuditType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Internal => "Internal",
            Self::Certification => "Certification",
            Self::Surveillance => "Surveillance",
            Self::Recertification => "Recertification",
        }
    }
}

impl fmt::Display for AuditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "internal" => Ok(Self::Internal),
            "certification" => Ok(Self::Certification),
            "surveillance" => Ok(Self::Surveillance),
            "recertification" => Ok(Self::Recertification),
            _ => Err(ParseError::InvalidFormat {
                expected: "Internal, Certification, Surveillance, or Recertification".to_string(),
                actual: s.to_string(),
            }),
        }
    }
}

/// Lifecycle state of an audit record
///
/// Driven by explicit lifecycle actions only: creation yields `Draft`,
/// beginning the assessment yields `Completed`. `InProgress` is a declared
/// value that no core path currently sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditLifecycle {
    Draft,
    InProgress,
    Completed,
}

impl AuditLifecycle {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for AuditLifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Status of a document slot on an audit
///
/// The matcher moves a slot straight from `Pending` to `Validated`;
/// `Uploaded` and `Invalid` are reserved states with no core transition
/// into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Uploaded,
    Validated,
    Invalid,
}

impl DocumentStatus {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Uploaded => "uploaded",
            Self::Validated => "validated",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// File and Document Types
// ============================================================================

/// Opaque handle to an uploaded file
///
/// Only the filename participates in matching; content is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileHandle {
    pub filename: String,
    pub mime_type: String,
}

impl FileHandle {
    /// Create a new file handle
    pub fn new(filename: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: mime_type.into(),
        }
    }
}

/// Document slot on an audit
///
/// `name` must match a checklist label for the matcher to recognize it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub document_type: DocumentType,
    pub file: Option<FileHandle>,
    pub uploaded_at: Option<Timestamp>,
    pub status: DocumentStatus,
}

impl Document {
    /// Create the pending placeholder slot for a checklist entry
    pub fn pending(entry: &RequiredDocument) -> Self {
        Self {
            id: DocumentId::new(),
            name: entry.label.clone(),
            document_type: entry.document_type,
            file: None,
            uploaded_at: None,
            status: DocumentStatus::Pending,
        }
    }

    /// Create a validated document accepted by the matcher for a checklist entry
    pub fn validated(entry: &RequiredDocument, file: FileHandle, uploaded_at: Timestamp) -> Self {
        Self {
            id: DocumentId::new(),
            name: entry.label.clone(),
            document_type: entry.document_type,
            file: Some(file),
            uploaded_at: Some(uploaded_at),
            status: DocumentStatus::Validated,
        }
    }

    /// Whether this slot has been validated
    pub fn is_validated(&self) -> bool {
        self.status == DocumentStatus::Validated
    }
}

/// Human-readable record of an incomplete requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingInformation {
    pub requirement: String,
    pub iso_reference: String,
    pub document_type: String,
    pub description: String,
}

// ============================================================================
// Audit Record
// ============================================================================

/// An audit record: the single source of truth for one compliance engagement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audit {
    pub id: AuditId,
    pub name: String,
    pub framework: String,
    pub audit_type: AuditType,
    pub status: AuditLifecycle,
    pub created_at: Timestamp,
    pub start_date: Timestamp,
    pub updated_at: Timestamp,
    pub documents: Vec<Document>,
    pub missing_documents: Vec<String>,
    pub missing_information: Vec<MissingInformation>,
}

impl Audit {
    /// Create a new draft audit with one pending document slot per checklist entry
    pub fn new(name: impl Into<String>, audit_type: AuditType, checklist: &[RequiredDocument]) -> Self {
        let now = Timestamp::now();
        Self {
            id: AuditId::new(),
            name: name.into(),
            framework: FRAMEWORK.to_string(),
            audit_type,
            status: AuditLifecycle::Draft,
            created_at: now,
            start_date: now,
            updated_at: now,
            documents: checklist.iter().map(Document::pending).collect(),
            missing_documents: Vec::new(),
            missing_information: Vec::new(),
        }
    }

    /// Count of validated document slots
    pub fn validated_count(&self) -> usize {
        self.documents.iter().filter(|d| d.is_validated()).count()
    }

    /// Count of slots still pending
    pub fn pending_count(&self) -> usize {
        self.documents
            .iter()
            .filter(|d| d.status == DocumentStatus::Pending)
            .count()
    }

    /// Replace a document slot by case-insensitive name, or append when no
    /// slot with that name exists
    pub fn upsert_document(&mut self, document: Document) {
        let name_lower = document.name.to_lowercase();
        match self
            .documents
            .iter_mut()
            .find(|d| d.name.to_lowercase() == name_lower)
        {
            Some(slot) => *slot = document,
            None => self.documents.push(document),
        }
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
