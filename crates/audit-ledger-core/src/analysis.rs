//! # Document Analysis Module
//!
//! Coordinates the checklist matcher with the audit store. Analysis is an
//! explicit asynchronous operation: results become observable only after the
//! returned future resolves, and the document replacement plus the
//! missing-information recomputation land in the same store update.

use crate::audit::{Audit, AuditLifecycle, FileHandle, MissingInformation};
use crate::catalog::{self, IsoRequirement, RequiredDocument};
use crate::matcher::{derive_progress, match_uploads, requirement_completion, AuditProgress, RequirementCompletion};
use crate::store::{AuditStore, AuditStoreError};
use crate::{AuditId, Timestamp};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Error type for analysis operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Store error: {0}")]
    Store(#[from] AuditStoreError),
}

/// Result of one analysis run over an upload batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub audit_id: AuditId,
    pub completion: RequirementCompletion,
    /// Filenames that matched no checklist label; informational only
    pub unmatched: Vec<String>,
    pub progress: AuditProgress,
}

/// Service running document analysis against stored audits
///
/// Holds the pinned checklist and requirement catalogs alongside the store;
/// matching itself is delegated to the pure functions in [`crate::matcher`].
pub struct AnalysisService {
    store: Arc<dyn AuditStore>,
    checklist: Vec<RequiredDocument>,
    requirements: Vec<IsoRequirement>,
}

impl AnalysisService {
    /// Create a service over the pinned reference catalogs
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self {
            store,
            checklist: catalog::required_documents(),
            requirements: catalog::iso_requirements(),
        }
    }

    /// Create a service with custom catalogs (primarily for tests)
    pub fn with_catalogs(
        store: Arc<dyn AuditStore>,
        checklist: Vec<RequiredDocument>,
        requirements: Vec<IsoRequirement>,
    ) -> Self {
        Self {
            store,
            checklist,
            requirements,
        }
    }

    /// The checklist this service matches against
    pub fn checklist(&self) -> &[RequiredDocument] {
        &self.checklist
    }

    /// The requirement mapping this service evaluates
    pub fn requirements(&self) -> &[IsoRequirement] {
        &self.requirements
    }

    /// Analyze an upload batch against a stored audit
    ///
    /// Matches files to checklist labels in batch order (last write wins per
    /// label), replaces the accepted document slots on the audit, recomputes
    /// `missing_information` from the incomplete requirements, and persists
    /// everything in a single whole-record update.
    ///
    /// # Errors
    /// - `AnalysisError::Store` - the audit id is unknown
    pub async fn analyze(
        &self,
        audit_id: AuditId,
        files: &[FileHandle],
    ) -> Result<AnalysisReport, AnalysisError> {
        let mut audit = self.store.find_by_id(audit_id).await?;

        let outcome = match_uploads(files, &self.checklist);
        debug!(
            audit_id = %audit_id,
            accepted = outcome.accepted.len(),
            unmatched = outcome.unmatched.len(),
            "matched upload batch against checklist"
        );

        for document in outcome.accepted.into_values() {
            audit.upsert_document(document);
        }

        let completion = requirement_completion(&audit.documents, &self.requirements);
        audit.missing_information = completion
            .incomplete
            .iter()
            .map(missing_information_for)
            .collect();
        audit.missing_documents = audit
            .documents
            .iter()
            .filter(|d| !d.is_validated())
            .map(|d| d.name.clone())
            .collect();

        let progress = derive_progress(&audit.documents, &self.checklist, true);
        self.store.update(audit).await?;

        info!(
            audit_id = %audit_id,
            complete = completion.complete.len(),
            incomplete = completion.incomplete.len(),
            progress = %progress,
            "analysis run complete"
        );

        Ok(AnalysisReport {
            audit_id,
            completion,
            unmatched: outcome.unmatched,
            progress,
        })
    }

    /// Derive the current progress of a stored audit
    ///
    /// `analysis_ran` is session state owned by the caller; the store keeps
    /// no stale snapshot of it.
    pub async fn progress(
        &self,
        audit_id: AuditId,
        analysis_ran: bool,
    ) -> Result<AuditProgress, AnalysisError> {
        let audit = self.store.find_by_id(audit_id).await?;
        Ok(derive_progress(&audit.documents, &self.checklist, analysis_ran))
    }

    /// Begin the assessment for an audit
    ///
    /// An explicit user action: force-sets the lifecycle to `Completed`
    /// regardless of checklist completion state.
    pub async fn begin_assessment(&self, audit_id: AuditId) -> Result<Audit, AnalysisError> {
        let mut audit = self.store.find_by_id(audit_id).await?;
        audit.status = AuditLifecycle::Completed;
        audit.updated_at = Timestamp::now();
        self.store.update(audit.clone()).await?;
        info!(audit_id = %audit_id, "assessment started, audit marked completed");
        Ok(audit)
    }
}

/// Fixed templated record for an incomplete requirement
fn missing_information_for(requirement: &IsoRequirement) -> MissingInformation {
    MissingInformation {
        requirement: requirement.requirement.clone(),
        iso_reference: requirement.iso_reference.clone(),
        document_type: requirement.document_type.clone(),
        description: format!(
            "Missing required information for {}",
            requirement.requirement
        ),
    }
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
