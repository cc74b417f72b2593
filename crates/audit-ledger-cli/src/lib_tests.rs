//! Tests for the CLI argument surface.

use super::*;
use clap::CommandFactory;

#[test]
fn test_cli_command_structure_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_analyze_parses_batch_in_order() {
    let cli = Cli::try_parse_from([
        "audit-ledger",
        "analyze",
        "risk register.pdf",
        "unrelated.pdf",
    ])
    .unwrap();

    match cli.command {
        Commands::Analyze { files, audit_type, .. } => {
            assert_eq!(files, vec!["risk register.pdf", "unrelated.pdf"]);
            assert_eq!(audit_type, "internal");
        }
        _ => panic!("Expected Analyze command"),
    }
}

#[test]
fn test_analyze_requires_at_least_one_file() {
    assert!(Cli::try_parse_from(["audit-ledger", "analyze"]).is_err());
}

#[test]
fn test_export_parses_filters() {
    let cli = Cli::try_parse_from([
        "audit-ledger",
        "export",
        "--kind",
        "annex-a",
        "--status",
        "Nonconformity",
        "--search",
        "policies",
    ])
    .unwrap();

    match cli.command {
        Commands::Export {
            kind,
            status,
            search,
            category,
            confidence,
            output,
        } => {
            assert_eq!(kind, "annex-a");
            assert_eq!(status.as_deref(), Some("Nonconformity"));
            assert_eq!(search.as_deref(), Some("policies"));
            assert!(category.is_none());
            assert!(confidence.is_none());
            assert!(output.is_none());
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_invalid_argument_error_display() {
    let error = invalid_argument(
        "kind",
        ParseError::InvalidFormat {
            expected: "management or annex-a".to_string(),
            actual: "controls".to_string(),
        },
    );
    assert!(error.to_string().contains("kind"));
    assert!(error.to_string().contains("management or annex-a"));
}
