//! # Assessment Ledger Module
//!
//! Editable self-assessment state: management clauses and Annex A controls
//! with status, confidence, evidence, and non-conformity trails. Items are
//! pre-seeded from the pinned catalogs; the only runtime mutation of status
//! is a manual reviewer override, which requires justification notes and,
//! for nonconformities, a severity classification.

use crate::audit::FileHandle;
use crate::catalog;
use crate::{EvidenceId, ParseError, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Enumerations
// ============================================================================

/// Which half of the assessment an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    Management,
    AnnexA,
}

impl AssessmentKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Management => "management",
            Self::AnnexA => "annex-a",
        }
    }
}

impl fmt::Display for AssessmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssessmentKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "management" => Ok(Self::Management),
            "annex-a" | "annexa" => Ok(Self::AnnexA),
            _ => Err(ParseError::InvalidFormat {
                expected: "management or annex-a".to_string(),
                actual: s.to_string(),
            }),
        }
    }
}

/// Status of an assessment item
///
/// Fully connected: any status is reachable from any other via a manual
/// override. There are no automatic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentStatus {
    Acceptable,
    Nonconformity,
    NotApplicable,
}

impl AssessmentStatus {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Acceptable => "Acceptable",
            Self::Nonconformity => "Nonconformity",
            Self::NotApplicable => "Not Applicable",
        }
    }
}

impl fmt::Display for AssessmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssessmentStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "acceptable" => Ok(Self::Acceptable),
            "nonconformity" => Ok(Self::Nonconformity),
            "not applicable" | "not-applicable" => Ok(Self::NotApplicable),
            _ => Err(ParseError::InvalidFormat {
                expected: "Acceptable, Nonconformity, or Not Applicable".to_string(),
                actual: s.to_string(),
            }),
        }
    }
}

/// Informational confidence attached to a seeded determination
///
/// The ledger never recomputes confidence; its value comes from seed data
/// and display layers substitute a fixed "manually edited" label once an
/// item has been overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
    Uncertain,
}

impl Confidence {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Uncertain => "Uncertain",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            "uncertain" => Ok(Self::Uncertain),
            _ => Err(ParseError::InvalidFormat {
                expected: "High, Medium, Low, or Uncertain".to_string(),
                actual: s.to_string(),
            }),
        }
    }
}

/// Severity classification for a recorded nonconformity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NonconformitySeverity {
    Major,
    Minor,
    Observation,
    OpportunityForImprovement,
}

impl NonconformitySeverity {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::Minor => "Minor",
            Self::Observation => "Observation",
            Self::OpportunityForImprovement => "Opportunity for Improvement",
        }
    }
}

impl fmt::Display for NonconformitySeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Sub-record Types
// ============================================================================

/// Citation of a document supporting an assessment determination
///
/// Referenced by id and name only; not an enforced foreign key against any
/// live audit's document list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    pub document_id: String,
    pub document_name: String,
    pub sections: Vec<String>,
    pub justification: String,
}

/// A recorded finding that a requirement is not met
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonConformity {
    pub id: String,
    pub description: String,
    pub severity: NonconformitySeverity,
    pub evidence: String,
}

/// Supporting file attached to an assessment item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: EvidenceId,
    pub file_name: String,
    pub uploaded_at: Timestamp,
    pub description: String,
    pub file: Option<FileHandle>,
}

// ============================================================================
// Assessment Item
// ============================================================================

/// An assessable item of the audit framework
///
/// Covers both management clauses and Annex A controls; the two are
/// structurally identical except for the key namespace and the extra
/// `control` text carried by Annex A items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentItem {
    pub kind: AssessmentKind,
    /// Clause number (e.g. "4.1") or control number (e.g. "A.5.1")
    pub number: String,
    pub requirement: String,
    pub category: String,
    /// Full control text; present only on Annex A items
    pub control: Option<String>,
    pub status: AssessmentStatus,
    pub confidence: Confidence,
    pub documents_referenced: Vec<DocumentReference>,
    pub non_conformities: Vec<NonConformity>,
    pub evidence: Vec<Evidence>,
    pub is_manual_override: bool,
    /// Status before the first override; preserved across later overrides
    pub original_status: Option<AssessmentStatus>,
    pub nonconformity_severity: Option<NonconformitySeverity>,
    pub auditor_notes: Option<String>,
    pub is_ai_generated: bool,
}

impl AssessmentItem {
    /// Build a seeded item from catalog data
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn seeded(
        kind: AssessmentKind,
        number: &str,
        requirement: &str,
        category: &str,
        control: Option<&str>,
        status: AssessmentStatus,
        confidence: Confidence,
        documents_referenced: Vec<DocumentReference>,
        non_conformities: Vec<NonConformity>,
    ) -> Self {
        Self {
            kind,
            number: number.to_string(),
            requirement: requirement.to_string(),
            category: category.to_string(),
            control: control.map(|c| c.to_string()),
            status,
            confidence,
            documents_referenced,
            non_conformities,
            evidence: Vec::new(),
            is_manual_override: false,
            original_status: None,
            nonconformity_severity: None,
            auditor_notes: None,
            is_ai_generated: true,
        }
    }
}

// ============================================================================
// Filtering
// ============================================================================

/// Conjunction of optional item filters; an empty filter matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFilter {
    /// Case-insensitive substring match against requirement text or number
    pub search: Option<String>,
    /// Exact category match
    pub category: Option<String>,
    /// Exact status match
    pub status: Option<AssessmentStatus>,
    /// Exact confidence match
    pub confidence: Option<Confidence>,
}

impl ItemFilter {
    /// Whether an item passes every supplied constraint
    pub fn matches(&self, item: &AssessmentItem) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let hit = item.requirement.to_lowercase().contains(&needle)
                || item.number.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &item.category != category {
                return false;
            }
        }
        if let Some(status) = self.status {
            if item.status != status {
                return false;
            }
        }
        if let Some(confidence) = self.confidence {
            if item.confidence != confidence {
                return false;
            }
        }
        true
    }
}

// ============================================================================
// Override Requests and Errors
// ============================================================================

/// Reviewer-entered correction to an item's status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRequest {
    pub new_status: AssessmentStatus,
    pub severity: Option<NonconformitySeverity>,
    pub auditor_notes: String,
}

/// Rejection reasons for an override save
///
/// Resolved locally at the ledger boundary; these never reach the audit
/// store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OverrideRejected {
    #[error("Auditor notes are required for a manual override")]
    EmptyNotes,

    #[error("A severity classification is required for a Nonconformity override")]
    MissingSeverityForNonconformity,
}

/// Error type for ledger operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("Unknown assessment item: {kind} {number}")]
    UnknownItem { kind: AssessmentKind, number: String },

    #[error("Override rejected: {0}")]
    Rejected(#[from] OverrideRejected),
}

// ============================================================================
// Ledger
// ============================================================================

/// Per-session assessment state
///
/// Seeded from the pinned catalogs in static catalog order; independent of
/// the audit store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentLedger {
    items: Vec<AssessmentItem>,
}

impl AssessmentLedger {
    /// Create a ledger seeded from the pinned catalogs
    pub fn new() -> Self {
        let mut items = catalog::management_clauses();
        items.extend(catalog::annex_a_controls());
        Self { items }
    }

    /// Create a ledger over explicit items (primarily for tests)
    pub fn with_items(items: Vec<AssessmentItem>) -> Self {
        Self { items }
    }

    /// Items of one kind, in static catalog order
    pub fn items(&self, kind: AssessmentKind) -> Vec<&AssessmentItem> {
        self.items.iter().filter(|i| i.kind == kind).collect()
    }

    /// Items of one kind passing a filter, in static catalog order
    pub fn filtered_items(&self, kind: AssessmentKind, filter: &ItemFilter) -> Vec<&AssessmentItem> {
        self.items
            .iter()
            .filter(|i| i.kind == kind && filter.matches(i))
            .collect()
    }

    /// Distinct categories of one kind, in first-seen order
    pub fn categories(&self, kind: AssessmentKind) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in self.items.iter().filter(|i| i.kind == kind) {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Look up one item by key
    pub fn find(&self, kind: AssessmentKind, number: &str) -> Option<&AssessmentItem> {
        self.items.iter().find(|i| i.kind == kind && i.number == number)
    }

    fn find_mut(
        &mut self,
        kind: AssessmentKind,
        number: &str,
    ) -> Result<&mut AssessmentItem, LedgerError> {
        self.items
            .iter_mut()
            .find(|i| i.kind == kind && i.number == number)
            .ok_or_else(|| LedgerError::UnknownItem {
                kind,
                number: number.to_string(),
            })
    }

    /// Apply a manual status override to one item
    ///
    /// `original_status` is recorded only on the first override so the true
    /// pre-override status survives repeated edits. The stored severity is
    /// set for Nonconformity overrides and cleared for any other status.
    ///
    /// # Errors
    /// - `LedgerError::UnknownItem` - no item with this key
    /// - `OverrideRejected::EmptyNotes` - auditor notes missing or blank
    /// - `OverrideRejected::MissingSeverityForNonconformity` - new status is
    ///   Nonconformity and no severity was supplied
    pub fn apply_override(
        &mut self,
        kind: AssessmentKind,
        number: &str,
        request: OverrideRequest,
    ) -> Result<AssessmentItem, LedgerError> {
        if request.auditor_notes.trim().is_empty() {
            return Err(OverrideRejected::EmptyNotes.into());
        }
        if request.new_status == AssessmentStatus::Nonconformity && request.severity.is_none() {
            return Err(OverrideRejected::MissingSeverityForNonconformity.into());
        }

        let item = self.find_mut(kind, number)?;

        if !item.is_manual_override {
            item.original_status = Some(item.status);
        }
        item.status = request.new_status;
        item.is_manual_override = true;
        item.is_ai_generated = false;
        item.auditor_notes = Some(request.auditor_notes);
        item.nonconformity_severity = if request.new_status == AssessmentStatus::Nonconformity {
            request.severity
        } else {
            None
        };

        Ok(item.clone())
    }

    /// Attach evidence files to one item
    ///
    /// Each file becomes a fresh Evidence entry with its own id and upload
    /// timestamp; existing evidence is never replaced.
    ///
    /// # Errors
    /// - `LedgerError::UnknownItem` - no item with this key
    pub fn attach_evidence(
        &mut self,
        kind: AssessmentKind,
        number: &str,
        files: &[FileHandle],
    ) -> Result<AssessmentItem, LedgerError> {
        let item = self.find_mut(kind, number)?;
        for file in files {
            item.evidence.push(Evidence {
                id: EvidenceId::new(),
                file_name: file.filename.clone(),
                uploaded_at: Timestamp::now(),
                description: String::new(),
                file: Some(file.clone()),
            });
        }
        Ok(item.clone())
    }

    /// Remove one evidence entry by id
    ///
    /// Removing a non-existent id is a no-op.
    ///
    /// # Errors
    /// - `LedgerError::UnknownItem` - no item with this key
    pub fn remove_evidence(
        &mut self,
        kind: AssessmentKind,
        number: &str,
        evidence_id: EvidenceId,
    ) -> Result<AssessmentItem, LedgerError> {
        let item = self.find_mut(kind, number)?;
        item.evidence.retain(|e| e.id != evidence_id);
        Ok(item.clone())
    }
}

impl Default for AssessmentLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "assessment_tests.rs"]
mod tests;
