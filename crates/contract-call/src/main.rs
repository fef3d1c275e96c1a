use std::io;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;

use contract_call::commands::Cli;
use contract_call::commands::Commands;
use contract_call::handlers;
use contract_call::presenter::create_presenter;
use contract_call::telemetry::init_tracing;
use contract_call::CallConfig;
use contract_call::CliError;
use contract_call_core::error_codes::ErrorCategory;
use contract_call_core::MockDispatcher;

fn main() -> ExitCode {
    let config = CallConfig::from_env();
    // Dropped on return so buffered file logs are flushed on every path.
    let _telemetry = init_tracing(&config);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(e),
    };

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(category = %e.category(), "command failed: {}", e);
            eprintln!("Error: {}", e);
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            exit_code(e.exit_code())
        }
    }
}

/// Help and version requests succeed; every other parse failure is EX_USAGE.
fn usage_exit(e: clap::Error) -> ExitCode {
    let _ = e.print();
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => exit_code(ErrorCategory::InvalidInput.exit_code()),
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn run(cli: Cli, config: &CallConfig) -> Result<(), CliError> {
    let format = cli.effective_format();

    match cli.command {
        Commands::Call {
            method,
            args,
            contract,
        } => {
            let presenter = create_presenter(format);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            handlers::handle_call(
                &MockDispatcher,
                presenter.as_ref(),
                &mut out,
                config,
                contract.as_deref(),
                &method,
                &args,
            )
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "contract-call", &mut io::stdout());
            Ok(())
        }
    }
}
