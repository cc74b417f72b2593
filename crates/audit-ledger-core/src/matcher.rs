//! # Checklist Matcher Module
//!
//! Pure matching and derivation rules: uploaded filenames against the
//! required-document checklist, validated documents against the ISO
//! requirement mapping, and aggregate audit progress.
//!
//! Matching is deliberately loose, case-insensitive substring containment,
//! checked both verbatim and with whitespace stripped from the catalog
//! string. False positives from one document name being a substring of
//! another requirement's document type are part of the contract.

use crate::audit::{Document, FileHandle};
use crate::catalog::{IsoRequirement, RequiredDocument};
use crate::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

// ============================================================================
// Result Types
// ============================================================================

/// Result of matching one upload batch against the checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// Accepted documents keyed by checklist label; within a batch the last
    /// file matching a label wins
    pub accepted: HashMap<String, Document>,
    /// Filenames that matched no checklist label, in batch order
    ///
    /// Not an error: unmatched files are dropped from consideration. They
    /// are reported here so callers may surface them if they choose.
    pub unmatched: Vec<String>,
}

impl MatchOutcome {
    /// Accepted document for a checklist label, if any
    pub fn accepted_for(&self, label: &str) -> Option<&Document> {
        self.accepted.get(label)
    }
}

/// Completion split of the ISO requirement mapping after an analysis pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCompletion {
    pub complete: Vec<IsoRequirement>,
    pub incomplete: Vec<IsoRequirement>,
}

impl RequirementCompletion {
    /// Whether a given requirement was satisfied
    pub fn is_complete(&self, requirement: &IsoRequirement) -> bool {
        self.complete.contains(requirement)
    }
}

/// Aggregate audit progress derived from document state
///
/// Recomputed on every read; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditProgress {
    /// No checklist label validated yet
    Draft,
    /// Some but not all checklist labels validated
    DocumentationPending { remaining: usize, total: usize },
    /// All labels validated, analysis not yet run
    DocumentsUploaded,
    /// All labels validated and a completion analysis exists
    DocumentsAnalysed,
}

impl AuditProgress {
    /// Display label for the progress state
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::DocumentationPending { .. } => "Documentation Pending",
            Self::DocumentsUploaded => "Documents Uploaded",
            Self::DocumentsAnalysed => "Documents Analysed",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> String {
        match self {
            Self::Draft => "New Audit Created - No documents uploaded".to_string(),
            Self::DocumentationPending { remaining, total } => {
                format!("{} of {} documents needed", remaining, total)
            }
            Self::DocumentsUploaded => "Ready for analysis".to_string(),
            Self::DocumentsAnalysed => "ISO assessment ready".to_string(),
        }
    }
}

impl fmt::Display for AuditProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Matching Rules
// ============================================================================

fn strip_whitespace(s: &str) -> String {
    s.split_whitespace().collect()
}

/// Whether a lower-cased filename satisfies a catalog string
///
/// True when the filename contains the string verbatim (with spaces) or
/// with all whitespace stripped from the catalog side.
fn filename_matches(filename_lower: &str, catalog_text: &str) -> bool {
    let text_lower = catalog_text.to_lowercase();
    filename_lower.contains(&strip_whitespace(&text_lower)) || filename_lower.contains(&text_lower)
}

/// Match an upload batch against the checklist
///
/// Files are processed in the order supplied. A file is accepted for the
/// first checklist label its lower-cased filename contains; a later file
/// matching the same label replaces the earlier one (last-write-wins, no
/// duplicate warning). Files matching no label land in `unmatched`.
///
/// Accepted documents carry status `Validated`, a fresh id, and an upload
/// timestamp; the caller applies them to the audit through the store.
pub fn match_uploads(files: &[FileHandle], checklist: &[RequiredDocument]) -> MatchOutcome {
    let mut accepted: HashMap<String, Document> = HashMap::new();
    let mut unmatched = Vec::new();

    for file in files {
        let filename_lower = file.filename.to_lowercase();
        let matched = checklist
            .iter()
            .find(|entry| filename_matches(&filename_lower, &entry.label));

        match matched {
            Some(entry) => {
                let document = Document::validated(entry, file.clone(), Timestamp::now());
                accepted.insert(entry.label.clone(), document);
            }
            None => unmatched.push(file.filename.clone()),
        }
    }

    MatchOutcome { accepted, unmatched }
}

/// Compute requirement completion from already-validated documents
///
/// A requirement is complete iff some validated document name contains the
/// requirement's document-type string as a case-insensitive substring,
/// checked both verbatim and with internal whitespace removed from both
/// sides. This second fuzzy pass is independent of the upload-to-label pass.
pub fn requirement_completion(
    documents: &[Document],
    requirements: &[IsoRequirement],
) -> RequirementCompletion {
    let mut complete = Vec::new();
    let mut incomplete = Vec::new();

    for requirement in requirements {
        let type_lower = requirement.document_type.to_lowercase();
        let type_stripped = strip_whitespace(&type_lower);

        let satisfied = documents.iter().any(|doc| {
            if !doc.is_validated() {
                return false;
            }
            let name_lower = doc.name.to_lowercase();
            name_lower.contains(&type_lower) || strip_whitespace(&name_lower).contains(&type_stripped)
        });

        if satisfied {
            complete.push(requirement.clone());
        } else {
            incomplete.push(requirement.clone());
        }
    }

    RequirementCompletion { complete, incomplete }
}

/// Derive aggregate audit progress from document state
///
/// Validated labels are counted by unique validated document name. The
/// count saturates at the checklist size, keeping the result total within
/// `0..=N` even if extra validated documents were appended.
pub fn derive_progress(
    documents: &[Document],
    checklist: &[RequiredDocument],
    analysis_ran: bool,
) -> AuditProgress {
    let unique_validated: HashSet<&str> = documents
        .iter()
        .filter(|d| d.is_validated())
        .map(|d| d.name.as_str())
        .collect();
    let total = checklist.len();
    let validated = unique_validated.len().min(total);

    if validated == 0 {
        return AuditProgress::Draft;
    }

    if validated < total {
        return AuditProgress::DocumentationPending {
            remaining: total - validated,
            total,
        };
    }

    if analysis_ran {
        AuditProgress::DocumentsAnalysed
    } else {
        AuditProgress::DocumentsUploaded
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
