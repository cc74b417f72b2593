//! # Reference Catalog Module
//!
//! Pinned ISO 27001 reference data: the required-document checklist, the
//! clause/control requirement mapping, and the assessment seed items.
//!
//! These catalogs are versioned reference data bundled with the crate, not
//! user-editable configuration. Matching behavior depends on the exact label
//! and document-type strings, so edits here are breaking changes.

use crate::assessment::{
    AssessmentItem, AssessmentKind, AssessmentStatus, Confidence, DocumentReference, NonConformity,
    NonconformitySeverity,
};
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Document Types
// ============================================================================

/// Category tag for checklist entries and audit documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Isms,
    ItSecurityPolicy,
    StatementOfApplicability,
    RiskRegister,
    InventoryOfAssets,
    IncidentManagement,
    SecureDevelopment,
    ManagementReview,
    InternalAuditReport,
    OrganizationChart,
}

impl DocumentType {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Isms => "ISMS",
            Self::ItSecurityPolicy => "IT_SECURITY_POLICY",
            Self::StatementOfApplicability => "STATEMENT_OF_APPLICABILITY",
            Self::RiskRegister => "RISK_REGISTER",
            Self::InventoryOfAssets => "INVENTORY_OF_ASSETS",
            Self::IncidentManagement => "INCIDENT_MANAGEMENT",
            Self::SecureDevelopment => "SECURE_DEVELOPMENT",
            Self::ManagementReview => "MANAGEMENT_REVIEW",
            Self::InternalAuditReport => "INTERNAL_AUDIT_REPORT",
            Self::OrganizationChart => "ORGANIZATION_CHART",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ISMS" => Ok(Self::Isms),
            "IT_SECURITY_POLICY" => Ok(Self::ItSecurityPolicy),
            "STATEMENT_OF_APPLICABILITY" => Ok(Self::StatementOfApplicability),
            "RISK_REGISTER" => Ok(Self::RiskRegister),
            "INVENTORY_OF_ASSETS" => Ok(Self::InventoryOfAssets),
            "INCIDENT_MANAGEMENT" => Ok(Self::IncidentManagement),
            "SECURE_DEVELOPMENT" => Ok(Self::SecureDevelopment),
            "MANAGEMENT_REVIEW" => Ok(Self::ManagementReview),
            "INTERNAL_AUDIT_REPORT" => Ok(Self::InternalAuditReport),
            "ORGANIZATION_CHART" => Ok(Self::OrganizationChart),
            _ => Err(ParseError::InvalidFormat {
                expected: "known document type tag".to_string(),
                actual: s.to_string(),
            }),
        }
    }
}

// ============================================================================
// Checklist and Requirement Catalog Types
// ============================================================================

/// Static checklist entry for a required document
///
/// The `label` is the canonical document name shown to users and used as the
/// matching key for uploaded filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredDocument {
    pub document_type: DocumentType,
    pub label: String,
    pub description: String,
}

impl RequiredDocument {
    fn new(document_type: DocumentType, label: &str, description: &str) -> Self {
        Self {
            document_type,
            label: label.to_string(),
            description: description.to_string(),
        }
    }
}

/// Mapping of a human-readable requirement to an ISO clause/control reference
/// and the document type that satisfies it
///
/// Many-to-one: several requirements may point at the same document type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsoRequirement {
    pub requirement: String,
    pub iso_reference: String,
    pub document_type: String,
}

impl IsoRequirement {
    fn new(requirement: &str, iso_reference: &str, document_type: &str) -> Self {
        Self {
            requirement: requirement.to_string(),
            iso_reference: iso_reference.to_string(),
            document_type: document_type.to_string(),
        }
    }
}

// ============================================================================
// Pinned Catalog Data
// ============================================================================

/// The required-document checklist for an ISO 27001 audit
pub fn required_documents() -> Vec<RequiredDocument> {
    vec![
        RequiredDocument::new(
            DocumentType::Isms,
            "ISMS Scope Document & Information Security Policy",
            "Defines the scope of the ISMS and outlines the organization's information security policy.",
        ),
        RequiredDocument::new(
            DocumentType::ItSecurityPolicy,
            "IT Security Policy",
            "Outlines the rules and guidelines for securing IT systems and data.",
        ),
        RequiredDocument::new(
            DocumentType::StatementOfApplicability,
            "Statement of Applicability",
            "Documents the controls from ISO 27001 Annex A that are applicable to the organization.",
        ),
        RequiredDocument::new(
            DocumentType::RiskRegister,
            "Risk Register",
            "Risk Assessment Plan and Risk Assessment Report detailing identified risks and their treatments.",
        ),
        RequiredDocument::new(
            DocumentType::InventoryOfAssets,
            "Inventory of Assets",
            "A complete inventory of information assets within the scope of the ISMS.",
        ),
        RequiredDocument::new(
            DocumentType::IncidentManagement,
            "Incident Management Procedure",
            "Procedures for identifying, reporting, and managing security incidents.",
        ),
        RequiredDocument::new(
            DocumentType::SecureDevelopment,
            "Secure Development Policy",
            "Guidelines for developing secure applications and systems.",
        ),
        RequiredDocument::new(
            DocumentType::ManagementReview,
            "Management Review",
            "Documentation of management reviews of the ISMS.",
        ),
        RequiredDocument::new(
            DocumentType::InternalAuditReport,
            "Internal Audit Report",
            "Results of internal audits conducted on the ISMS.",
        ),
        RequiredDocument::new(
            DocumentType::OrganizationChart,
            "Organization Chart",
            "Structure of the organization, including roles and responsibilities related to information security.",
        ),
    ]
}

/// The ISO clause/control requirement mapping
pub fn iso_requirements() -> Vec<IsoRequirement> {
    vec![
        IsoRequirement::new("Scope of the ISMS", "Clause 4.3", "ISMS Scope document"),
        IsoRequirement::new(
            "Information security policy",
            "Clause 5.2",
            "Information Security Policy",
        ),
        IsoRequirement::new(
            "Risk assessment and risk treatment process",
            "Clause 6.1.2",
            "Risk Assessment and Treatment Methodology",
        ),
        IsoRequirement::new(
            "Statement of Applicability",
            "Clause 6.1.3 d)",
            "Statement of Applicability",
        ),
        IsoRequirement::new(
            "Risk treatment plan",
            "Clauses 6.1.3 e, 6.2, and 8.3",
            "Risk Treatment Plan",
        ),
        IsoRequirement::new(
            "Information security objectives",
            "Clause 6.2",
            "List of Security Objectives",
        ),
        IsoRequirement::new(
            "Risk assessment and treatment report",
            "Clauses 8.2 and 8.3",
            "Risk Assessment & Treatment Report",
        ),
        IsoRequirement::new(
            "Inventory of assets",
            "Control A.5.9*",
            "Inventory of Assets or List of Assets in the Risk Register",
        ),
        IsoRequirement::new("Acceptable use of assets", "Control A.5.10*", "IT Security Policy"),
        IsoRequirement::new(
            "Incident response procedure",
            "Control A.5.26*",
            "Incident Management Procedure",
        ),
        IsoRequirement::new(
            "Statutory, regulatory, and contractual requirements",
            "Control A.5.31*",
            "List of Legal, Regulatory, and Contractual Requirements",
        ),
        IsoRequirement::new(
            "Security operating procedures for IT management",
            "Control A.5.37*",
            "Security Procedures for IT Department",
        ),
        IsoRequirement::new(
            "Definition of security roles and responsibilities",
            "Controls A.6.2 and A.6.6*",
            "Agreements, NDAs, and specifying responsibilities in each security policy and procedure",
        ),
        IsoRequirement::new(
            "Definition of security configurations",
            "Control A.8.9*",
            "Security Procedures for IT Department",
        ),
        IsoRequirement::new(
            "Secure system engineering principles",
            "Control A.8.27*",
            "Secure Development Policy",
        ),
    ]
}

// ============================================================================
// Assessment Seed Data
// ============================================================================

/// Pre-seeded management-clause assessment items
///
/// Status and confidence values are pinned seed data; only manual reviewer
/// overrides change them at runtime.
pub fn management_clauses() -> Vec<AssessmentItem> {
    vec![
        AssessmentItem::seeded(
            AssessmentKind::Management,
            "4.1",
            "Understanding the organization and its context",
            "Context of the Organization",
            None,
            AssessmentStatus::Acceptable,
            Confidence::High,
            vec![DocumentReference {
                document_id: "1".to_string(),
                document_name: "ISMS Scope Document".to_string(),
                sections: vec![
                    "1.2 Organizational Context".to_string(),
                    "1.3 External Factors".to_string(),
                ],
                justification: "The document clearly defines internal and external issues relevant to the organization's purpose.".to_string(),
            }],
            vec![],
        ),
        AssessmentItem::seeded(
            AssessmentKind::Management,
            "4.2",
            "Understanding the needs and expectations of interested parties",
            "Context of the Organization",
            None,
            AssessmentStatus::Nonconformity,
            Confidence::Low,
            vec![DocumentReference {
                document_id: "2".to_string(),
                document_name: "Stakeholder Analysis".to_string(),
                sections: vec!["2.1 Stakeholder Identification".to_string()],
                justification: "Stakeholder requirements are not fully documented or regularly reviewed.".to_string(),
            }],
            vec![NonConformity {
                id: "NC001".to_string(),
                description: "No formal process for regular review of stakeholder requirements".to_string(),
                severity: NonconformitySeverity::Minor,
                evidence: "Last stakeholder review was conducted over 12 months ago".to_string(),
            }],
        ),
    ]
}

/// Pre-seeded Annex A control assessment items
pub fn annex_a_controls() -> Vec<AssessmentItem> {
    vec![
        AssessmentItem::seeded(
            AssessmentKind::AnnexA,
            "A.5.1",
            "Information security policies",
            "Information Security Policies",
            Some("Information security policy and topic-specific policies shall be defined, approved by management, published, communicated to and acknowledged by relevant personnel and relevant interested parties and reviewed at planned intervals and if significant changes occur."),
            AssessmentStatus::Acceptable,
            Confidence::High,
            vec![DocumentReference {
                document_id: "1".to_string(),
                document_name: "Information Security Policy".to_string(),
                sections: vec![
                    "2.1 Policy Overview".to_string(),
                    "2.2 Policy Statements".to_string(),
                ],
                justification: "The information security policy document is comprehensive and properly approved by management.".to_string(),
            }],
            vec![],
        ),
        AssessmentItem::seeded(
            AssessmentKind::AnnexA,
            "A.6.1",
            "Internal organization",
            "Organization of Information Security",
            Some("Information security roles and responsibilities shall be defined and allocated according to the information security policy."),
            AssessmentStatus::Nonconformity,
            Confidence::Low,
            vec![DocumentReference {
                document_id: "2".to_string(),
                document_name: "Organization Chart".to_string(),
                sections: vec!["1.1 Security Roles".to_string()],
                justification: "Information security roles and responsibilities are not clearly defined.".to_string(),
            }],
            vec![NonConformity {
                id: "NC002".to_string(),
                description: "Security roles and responsibilities not formally documented".to_string(),
                severity: NonconformitySeverity::Major,
                evidence: "No formal documentation of security responsibilities in job descriptions".to_string(),
            }],
        ),
    ]
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
