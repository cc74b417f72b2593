//! # Assessment Export Module
//!
//! Flat-row and CSV rendering of assessment items for report generation.
//! The CSV shape is fixed: seven columns, every cell double-quoted, rows
//! joined by newlines.

use crate::assessment::{AssessmentItem, AssessmentKind, AssessmentLedger, ItemFilter};
use crate::Timestamp;
use serde::{Deserialize, Serialize};

/// Fixed CSV header row
pub const CSV_HEADERS: [&str; 7] = [
    "Clause Number",
    "Requirement",
    "Category",
    "Status",
    "Documents Referenced",
    "Confidence",
    "Non-Conformities",
];

/// One flat export row for an assessment item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRow {
    pub number: String,
    pub requirement: String,
    pub category: String,
    pub status: String,
    /// Referenced document names joined by `"; "`
    pub documents_referenced: String,
    pub confidence: String,
    /// Non-conformity count rendered as a string
    pub non_conformities: String,
}

impl AssessmentRow {
    /// Flatten one assessment item
    pub fn from_item(item: &AssessmentItem) -> Self {
        Self {
            number: item.number.clone(),
            requirement: item.requirement.clone(),
            category: item.category.clone(),
            status: item.status.as_str().to_string(),
            documents_referenced: item
                .documents_referenced
                .iter()
                .map(|d| d.document_name.as_str())
                .collect::<Vec<_>>()
                .join("; "),
            confidence: item.confidence.as_str().to_string(),
            non_conformities: item.non_conformities.len().to_string(),
        }
    }

    fn cells(&self) -> [&str; 7] {
        [
            &self.number,
            &self.requirement,
            &self.category,
            &self.status,
            &self.documents_referenced,
            &self.confidence,
            &self.non_conformities,
        ]
    }
}

/// Flat rows for one assessment kind after filtering, in catalog order
pub fn export_rows(
    ledger: &AssessmentLedger,
    kind: AssessmentKind,
    filter: &ItemFilter,
) -> Vec<AssessmentRow> {
    ledger
        .filtered_items(kind, filter)
        .into_iter()
        .map(AssessmentRow::from_item)
        .collect()
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell)
}

/// A rendered CSV document with its download filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content: String,
}

impl CsvExport {
    /// Render a filtered assessment export
    ///
    /// Header row is unquoted; every data cell is double-quoted. Filename
    /// follows `iso-<tab>-assessment-<ISO date>.csv`.
    pub fn build(ledger: &AssessmentLedger, kind: AssessmentKind, filter: &ItemFilter) -> Self {
        let rows = export_rows(ledger, kind, filter);

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(CSV_HEADERS.join(","));
        for row in &rows {
            lines.push(
                row.cells()
                    .iter()
                    .map(|cell| quote(cell))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        Self {
            filename: format!(
                "iso-{}-assessment-{}.csv",
                kind.as_str(),
                Timestamp::now().iso_date()
            ),
            content: lines.join("\n"),
        }
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
