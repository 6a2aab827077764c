//! kwenv CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use kwenv::cli::{Cli, CommandDispatcher, EXIT_INVALID_ARG};
use kwenv::environment::default_cache_root;
use kwenv::ui::{create_ui, is_ci, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("kwenv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kwenv=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    // Usage errors share the invalid-argument status with the command-level
    // precondition failures; --help and --version are not errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => EXIT_INVALID_ARG as u8,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };
    init_tracing(cli.debug);

    tracing::debug!("kwenv starting with args: {:?}", cli);

    // Determine output mode
    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root and cache root
    let cwd = std::env::current_dir().unwrap_or_default();
    let project_root = match cli.project.clone() {
        Some(path) if path.is_absolute() => path,
        Some(path) => cwd.join(path),
        None => cwd,
    };
    let cache_root = cli.cache_dir.clone().unwrap_or_else(default_cache_root);

    // Create UI
    let mut ui = create_ui(!is_ci(), output_mode);

    // Dispatch command
    let dispatcher = CommandDispatcher::new(project_root, cache_root);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
