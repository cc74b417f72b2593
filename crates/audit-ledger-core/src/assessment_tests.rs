//! Tests for the assessment ledger module.

use super::*;

fn ledger() -> AssessmentLedger {
    AssessmentLedger::new()
}

fn override_request(
    new_status: AssessmentStatus,
    severity: Option<NonconformitySeverity>,
    notes: &str,
) -> OverrideRequest {
    OverrideRequest {
        new_status,
        severity,
        auditor_notes: notes.to_string(),
    }
}

// ============================================================================
// Listing and Filtering Tests
// ============================================================================

#[test]
fn test_items_split_by_kind_in_catalog_order() {
    let ledger = ledger();

    let management = ledger.items(AssessmentKind::Management);
    assert_eq!(management.len(), 2);
    assert_eq!(management[0].number, "4.1");
    assert_eq!(management[1].number, "4.2");

    let annex = ledger.items(AssessmentKind::AnnexA);
    assert_eq!(annex.len(), 2);
    assert_eq!(annex[0].number, "A.5.1");
}

#[test]
fn test_empty_filter_matches_everything() {
    let ledger = ledger();
    let filter = ItemFilter::default();

    assert_eq!(
        ledger.filtered_items(AssessmentKind::Management, &filter).len(),
        2
    );
}

#[test]
fn test_search_filter_matches_requirement_or_number() {
    let ledger = ledger();

    let by_text = ItemFilter {
        search: Some("interested parties".to_string()),
        ..Default::default()
    };
    let hits = ledger.filtered_items(AssessmentKind::Management, &by_text);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].number, "4.2");

    let by_number = ItemFilter {
        search: Some("a.5".to_string()),
        ..Default::default()
    };
    let hits = ledger.filtered_items(AssessmentKind::AnnexA, &by_number);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].number, "A.5.1");
}

#[test]
fn test_filters_are_conjunctive() {
    let ledger = ledger();

    let filter = ItemFilter {
        category: Some("Context of the Organization".to_string()),
        status: Some(AssessmentStatus::Nonconformity),
        ..Default::default()
    };
    let hits = ledger.filtered_items(AssessmentKind::Management, &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].number, "4.2");

    let impossible = ItemFilter {
        category: Some("Context of the Organization".to_string()),
        status: Some(AssessmentStatus::Nonconformity),
        confidence: Some(Confidence::High),
        ..Default::default()
    };
    assert!(ledger
        .filtered_items(AssessmentKind::Management, &impossible)
        .is_empty());
}

#[test]
fn test_categories_first_seen_order() {
    let ledger = ledger();
    assert_eq!(
        ledger.categories(AssessmentKind::AnnexA),
        vec![
            "Information Security Policies".to_string(),
            "Organization of Information Security".to_string(),
        ]
    );
}

// ============================================================================
// Override Tests
// ============================================================================

#[test]
fn test_override_with_empty_notes_is_rejected() {
    let mut ledger = ledger();

    let result = ledger.apply_override(
        AssessmentKind::Management,
        "4.1",
        override_request(AssessmentStatus::NotApplicable, None, "   "),
    );

    assert_eq!(
        result,
        Err(LedgerError::Rejected(OverrideRejected::EmptyNotes))
    );
    // Item untouched
    let item = ledger.find(AssessmentKind::Management, "4.1").unwrap();
    assert!(!item.is_manual_override);
    assert_eq!(item.status, AssessmentStatus::Acceptable);
}

#[test]
fn test_nonconformity_override_without_severity_is_rejected() {
    let mut ledger = ledger();

    let result = ledger.apply_override(
        AssessmentKind::Management,
        "4.1",
        override_request(AssessmentStatus::Nonconformity, None, "Evidence is stale"),
    );

    assert_eq!(
        result,
        Err(LedgerError::Rejected(
            OverrideRejected::MissingSeverityForNonconformity
        ))
    );
}

#[test]
fn test_override_unknown_item() {
    let mut ledger = ledger();

    let result = ledger.apply_override(
        AssessmentKind::Management,
        "9.9",
        override_request(AssessmentStatus::NotApplicable, None, "notes"),
    );

    assert!(matches!(result, Err(LedgerError::UnknownItem { .. })));
}

#[test]
fn test_override_replaces_status_and_records_trail() {
    let mut ledger = ledger();

    let updated = ledger
        .apply_override(
            AssessmentKind::Management,
            "4.1",
            override_request(
                AssessmentStatus::Nonconformity,
                Some(NonconformitySeverity::Major),
                "Context review not performed this cycle",
            ),
        )
        .unwrap();

    assert_eq!(updated.status, AssessmentStatus::Nonconformity);
    assert_eq!(updated.original_status, Some(AssessmentStatus::Acceptable));
    assert!(updated.is_manual_override);
    assert!(!updated.is_ai_generated);
    assert_eq!(
        updated.nonconformity_severity,
        Some(NonconformitySeverity::Major)
    );
    assert_eq!(
        updated.auditor_notes.as_deref(),
        Some("Context review not performed this cycle")
    );
}

#[test]
fn test_second_override_preserves_true_original_status() {
    let mut ledger = ledger();

    ledger
        .apply_override(
            AssessmentKind::Management,
            "4.1",
            override_request(
                AssessmentStatus::Nonconformity,
                Some(NonconformitySeverity::Minor),
                "First pass",
            ),
        )
        .unwrap();

    let updated = ledger
        .apply_override(
            AssessmentKind::Management,
            "4.1",
            override_request(AssessmentStatus::NotApplicable, None, "Second pass"),
        )
        .unwrap();

    // Status before the first override, not before the second
    assert_eq!(updated.original_status, Some(AssessmentStatus::Acceptable));
    assert_eq!(updated.status, AssessmentStatus::NotApplicable);
}

#[test]
fn test_non_nonconformity_override_clears_severity() {
    let mut ledger = ledger();

    ledger
        .apply_override(
            AssessmentKind::AnnexA,
            "A.5.1",
            override_request(
                AssessmentStatus::Nonconformity,
                Some(NonconformitySeverity::Observation),
                "Policy review overdue",
            ),
        )
        .unwrap();

    let updated = ledger
        .apply_override(
            AssessmentKind::AnnexA,
            "A.5.1",
            override_request(AssessmentStatus::Acceptable, None, "Review completed"),
        )
        .unwrap();

    assert_eq!(updated.nonconformity_severity, None);
}

#[test]
fn test_override_ignores_severity_for_acceptable_status() {
    let mut ledger = ledger();

    let updated = ledger
        .apply_override(
            AssessmentKind::Management,
            "4.2",
            override_request(
                AssessmentStatus::Acceptable,
                Some(NonconformitySeverity::Major),
                "Stakeholder register now reviewed quarterly",
            ),
        )
        .unwrap();

    assert_eq!(updated.nonconformity_severity, None);
    assert_eq!(updated.original_status, Some(AssessmentStatus::Nonconformity));
}

#[test]
fn test_status_graph_fully_connected() {
    let mut ledger = ledger();
    let sequence = [
        (AssessmentStatus::NotApplicable, None),
        (
            AssessmentStatus::Nonconformity,
            Some(NonconformitySeverity::OpportunityForImprovement),
        ),
        (AssessmentStatus::Acceptable, None),
        (AssessmentStatus::NotApplicable, None),
    ];

    for (status, severity) in sequence {
        let updated = ledger
            .apply_override(
                AssessmentKind::Management,
                "4.1",
                override_request(status, severity, "cycling"),
            )
            .unwrap();
        assert_eq!(updated.status, status);
    }
}

// ============================================================================
// Evidence Tests
// ============================================================================

#[test]
fn test_attach_evidence_appends_fresh_entries() {
    let mut ledger = ledger();
    let files = vec![
        FileHandle::new("scope-v1.pdf", "application/pdf"),
        FileHandle::new("scope-v2.pdf", "application/pdf"),
    ];

    let updated = ledger
        .attach_evidence(AssessmentKind::Management, "4.1", &files)
        .unwrap();

    assert_eq!(updated.evidence.len(), 2);
    assert_ne!(updated.evidence[0].id, updated.evidence[1].id);
    assert_eq!(updated.evidence[0].file_name, "scope-v1.pdf");

    // A second attach never replaces existing evidence
    let updated = ledger
        .attach_evidence(
            AssessmentKind::Management,
            "4.1",
            &[FileHandle::new("scope-v3.pdf", "application/pdf")],
        )
        .unwrap();
    assert_eq!(updated.evidence.len(), 3);
}

#[test]
fn test_remove_evidence_by_id() {
    let mut ledger = ledger();
    let updated = ledger
        .attach_evidence(
            AssessmentKind::AnnexA,
            "A.5.1",
            &[FileHandle::new("policy.pdf", "application/pdf")],
        )
        .unwrap();
    let evidence_id = updated.evidence[0].id;

    let updated = ledger
        .remove_evidence(AssessmentKind::AnnexA, "A.5.1", evidence_id)
        .unwrap();

    assert!(updated.evidence.is_empty());
}

#[test]
fn test_remove_unknown_evidence_is_noop() {
    let mut ledger = ledger();
    ledger
        .attach_evidence(
            AssessmentKind::AnnexA,
            "A.5.1",
            &[FileHandle::new("policy.pdf", "application/pdf")],
        )
        .unwrap();

    let updated = ledger
        .remove_evidence(AssessmentKind::AnnexA, "A.5.1", crate::EvidenceId::new())
        .unwrap();

    assert_eq!(updated.evidence.len(), 1);
}

// ============================================================================
// Parsing and Display Tests
// ============================================================================

#[test]
fn test_assessment_kind_parsing() {
    assert_eq!(
        "management".parse::<AssessmentKind>().unwrap(),
        AssessmentKind::Management
    );
    assert_eq!(
        "annex-a".parse::<AssessmentKind>().unwrap(),
        AssessmentKind::AnnexA
    );
    assert!("controls".parse::<AssessmentKind>().is_err());
}

#[test]
fn test_status_display_uses_spaced_form() {
    assert_eq!(AssessmentStatus::NotApplicable.as_str(), "Not Applicable");
    assert_eq!(
        "not applicable".parse::<AssessmentStatus>().unwrap(),
        AssessmentStatus::NotApplicable
    );
}

#[test]
fn test_severity_display() {
    assert_eq!(
        NonconformitySeverity::OpportunityForImprovement.as_str(),
        "Opportunity for Improvement"
    );
}
