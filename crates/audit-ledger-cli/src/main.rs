use audit_ledger_cli::run_cli;
use tracing::error;

#[tokio::main]
async fn main() {
    // Run CLI and handle errors
    if let Err(e) = run_cli().await {
        error!("CLI error: {}", e);
        eprintln!("Error: {}", e);

        // Exit with appropriate code based on error type
        let exit_code = match e {
            audit_ledger_cli::CliError::InvalidArgument { .. } => 1,
            audit_ledger_cli::CliError::Analysis(_) => 2,
            audit_ledger_cli::CliError::Io(_) => 3,
            audit_ledger_cli::CliError::Serialization(_) => 4,
        };

        std::process::exit(exit_code);
    }
}
