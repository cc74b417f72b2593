//! # Audit-Ledger CLI
//!
//! Command-line interface for the audit-ledger compliance tracker.
//!
//! This module provides CLI commands for:
//! - Inspecting the pinned checklist and requirement catalogs
//! - Running a document analysis over a batch of filenames
//! - Exporting assessment rows to CSV
//!
//! State lives only for the process lifetime, so each invocation is a
//! self-contained session: `analyze` creates a throwaway audit, runs the
//! analysis service over it, and reports the outcome.

use audit_ledger_core::{
    catalog, AnalysisError, AnalysisService, AssessmentKind, AssessmentStatus, Audit, AuditStore,
    AuditType, Confidence, CsvExport, FileHandle, InMemoryAuditStore, ItemFilter, ParseError,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

// ============================================================================
// CLI Structure
// ============================================================================

/// Audit-Ledger CLI - ISO 27001 audit tracking
#[derive(Parser)]
#[command(name = "audit-ledger")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "ISO 27001 audit tracking and self-assessment export")]
#[command(
    long_about = "Audit-Ledger matches uploaded document names against the ISO 27001 required-document checklist and assembles the compliance self-assessment"
)]
pub struct Cli {
    /// Logging level
    #[arg(short, long, default_value = "warn", env = "AUDIT_LEDGER_LOG")]
    pub log_level: String,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Print the required-document checklist
    Checklist {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the ISO clause/control requirement mapping
    Requirements {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Analyze a batch of document filenames against the checklist
    Analyze {
        /// Document filenames to analyze, in batch order
        #[arg(required = true)]
        files: Vec<String>,

        /// Name for the session audit
        #[arg(short, long, default_value = "CLI audit")]
        name: String,

        /// Audit type
        #[arg(short = 't', long, default_value = "internal")]
        audit_type: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Export assessment rows to CSV
    Export {
        /// Assessment kind: management or annex-a
        #[arg(short, long, default_value = "management")]
        kind: String,

        /// Write the CSV here instead of stdout (directory or file path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Free-text filter against requirement text or number
        #[arg(short, long)]
        search: Option<String>,

        /// Exact category filter
        #[arg(short, long)]
        category: Option<String>,

        /// Exact status filter
        #[arg(short = 'S', long)]
        status: Option<String>,

        /// Exact confidence filter
        #[arg(short = 'C', long)]
        confidence: Option<String>,
    },
}

/// Output format options
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

// ============================================================================
// Error Types
// ============================================================================

/// Top-level CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {arg} - {message}")]
    InvalidArgument { arg: String, message: String },

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn invalid_argument(arg: &str, error: ParseError) -> CliError {
    CliError::InvalidArgument {
        arg: arg.to_string(),
        message: error.to_string(),
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

/// Main CLI entry point
pub async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    initialize_logging(&cli);

    match cli.command {
        Commands::Checklist { format } => execute_checklist_command(format),
        Commands::Requirements { format } => execute_requirements_command(format),
        Commands::Analyze {
            files,
            name,
            audit_type,
            format,
        } => execute_analyze_command(files, name, audit_type, format).await,
        Commands::Export {
            kind,
            output,
            search,
            category,
            status,
            confidence,
        } => execute_export_command(kind, output, search, category, status, confidence),
    }
}

/// Initialize logging based on CLI arguments
fn initialize_logging(cli: &Cli) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================================================
// Command Implementations
// ============================================================================

/// Print the required-document checklist
fn execute_checklist_command(format: OutputFormat) -> Result<(), CliError> {
    let checklist = catalog::required_documents();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&checklist)?),
        OutputFormat::Text => {
            for entry in &checklist {
                println!("{:<26} {}", entry.document_type, entry.label);
                println!("{:<26} {}", "", entry.description);
            }
        }
    }
    Ok(())
}

/// Print the ISO requirement mapping
fn execute_requirements_command(format: OutputFormat) -> Result<(), CliError> {
    let requirements = catalog::iso_requirements();
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&requirements)?),
        OutputFormat::Text => {
            for requirement in &requirements {
                println!(
                    "{:<30} {:<55} {}",
                    requirement.iso_reference, requirement.requirement, requirement.document_type
                );
            }
        }
    }
    Ok(())
}

/// Run one analysis session over the supplied filenames
async fn execute_analyze_command(
    files: Vec<String>,
    name: String,
    audit_type: String,
    format: OutputFormat,
) -> Result<(), CliError> {
    let audit_type: AuditType = audit_type
        .parse()
        .map_err(|e| invalid_argument("audit-type", e))?;

    let store = Arc::new(InMemoryAuditStore::new());
    let service = AnalysisService::new(store.clone());

    let audit = Audit::new(name, audit_type, service.checklist());
    let audit_id = audit.id;
    store
        .create(audit)
        .await
        .map_err(AnalysisError::Store)?;
    debug!(audit_id = %audit_id, files = files.len(), "session audit created");

    let handles: Vec<FileHandle> = files
        .iter()
        .map(|f| FileHandle::new(f.clone(), "application/octet-stream"))
        .collect();
    let report = service.analyze(audit_id, &handles).await?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            println!("Status: {}", report.progress);
            println!("        {}", report.progress.description());
            if !report.unmatched.is_empty() {
                println!("Unmatched files (dropped):");
                for filename in &report.unmatched {
                    println!("  - {}", filename);
                }
            }
            println!("Complete requirements:");
            for requirement in &report.completion.complete {
                println!("  [x] {} ({})", requirement.requirement, requirement.iso_reference);
            }
            println!("Missing requirements:");
            for requirement in &report.completion.incomplete {
                println!("  [ ] {} ({})", requirement.requirement, requirement.iso_reference);
            }
        }
    }
    Ok(())
}

/// Export assessment rows to CSV
fn execute_export_command(
    kind: String,
    output: Option<PathBuf>,
    search: Option<String>,
    category: Option<String>,
    status: Option<String>,
    confidence: Option<String>,
) -> Result<(), CliError> {
    let kind: AssessmentKind = kind.parse().map_err(|e| invalid_argument("kind", e))?;
    let status: Option<AssessmentStatus> = status
        .map(|s| s.parse())
        .transpose()
        .map_err(|e| invalid_argument("status", e))?;
    let confidence: Option<Confidence> = confidence
        .map(|c| c.parse())
        .transpose()
        .map_err(|e| invalid_argument("confidence", e))?;

    let filter = ItemFilter {
        search,
        category,
        status,
        confidence,
    };

    let ledger = audit_ledger_core::AssessmentLedger::new();
    let export = CsvExport::build(&ledger, kind, &filter);

    match output {
        Some(path) => {
            let target = if path.is_dir() {
                path.join(&export.filename)
            } else {
                path
            };
            std::fs::write(&target, &export.content)?;
            println!("Wrote {}", target.display());
        }
        None => println!("{}", export.content),
    }
    Ok(())
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
