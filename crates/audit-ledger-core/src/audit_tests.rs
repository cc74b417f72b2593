//! Tests for the audit record module.

use super::*;
use crate::catalog;

fn new_audit() -> Audit {
    Audit::new(
        "Annual ISMS Audit",
        AuditType::Internal,
        &catalog::required_documents(),
    )
}

#[test]
fn test_new_audit_seeds_one_pending_slot_per_checklist_entry() {
    let audit = new_audit();
    let checklist = catalog::required_documents();

    assert_eq!(audit.documents.len(), checklist.len());
    assert!(audit
        .documents
        .iter()
        .all(|d| d.status == DocumentStatus::Pending && d.file.is_none()));

    for (slot, entry) in audit.documents.iter().zip(checklist.iter()) {
        assert_eq!(slot.name, entry.label);
        assert_eq!(slot.document_type, entry.document_type);
    }
}

#[test]
fn test_new_audit_starts_as_draft() {
    let audit = new_audit();
    assert_eq!(audit.status, AuditLifecycle::Draft);
    assert_eq!(audit.framework, FRAMEWORK);
    assert!(audit.missing_documents.is_empty());
    assert!(audit.missing_information.is_empty());
}

#[test]
fn test_upsert_document_replaces_by_case_insensitive_name() {
    let mut audit = new_audit();
    let checklist = catalog::required_documents();
    let entry = &checklist[1]; // IT Security Policy

    let replacement = Document::validated(
        entry,
        FileHandle::new("it security policy.pdf", "application/pdf"),
        Timestamp::now(),
    );
    audit.upsert_document(replacement.clone());

    assert_eq!(audit.documents.len(), checklist.len());
    let slot = audit
        .documents
        .iter()
        .find(|d| d.name == "IT Security Policy")
        .unwrap();
    assert_eq!(slot.id, replacement.id);
    assert_eq!(slot.status, DocumentStatus::Validated);
}

#[test]
fn test_upsert_document_appends_unknown_name() {
    let mut audit = new_audit();
    let before = audit.documents.len();

    let extra = Document {
        id: crate::DocumentId::new(),
        name: "Supplementary Evidence".to_string(),
        document_type: catalog::DocumentType::Isms,
        file: None,
        uploaded_at: None,
        status: DocumentStatus::Uploaded,
    };
    audit.upsert_document(extra);

    assert_eq!(audit.documents.len(), before + 1);
}

#[test]
fn test_validated_and_pending_counts() {
    let mut audit = new_audit();
    let checklist = catalog::required_documents();
    assert_eq!(audit.validated_count(), 0);
    assert_eq!(audit.pending_count(), checklist.len());

    audit.upsert_document(Document::validated(
        &checklist[0],
        FileHandle::new("scope.pdf", "application/pdf"),
        Timestamp::now(),
    ));

    assert_eq!(audit.validated_count(), 1);
    assert_eq!(audit.pending_count(), checklist.len() - 1);
}

#[test]
fn test_audit_type_parsing() {
    assert_eq!("internal".parse::<AuditType>().unwrap(), AuditType::Internal);
    assert_eq!(
        "Recertification".parse::<AuditType>().unwrap(),
        AuditType::Recertification
    );
    assert!("external".parse::<AuditType>().is_err());
}

#[test]
fn test_lifecycle_serializes_kebab_case() {
    let json = serde_json::to_string(&AuditLifecycle::InProgress).unwrap();
    assert_eq!(json, "\"in-progress\"");
}
