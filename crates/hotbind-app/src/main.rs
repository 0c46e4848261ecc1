mod cli;
mod report;
mod shell;

use std::io::{self, Write};
use std::process::ExitCode;

use hotbind_common::{HotbindError, Result};
use hotbind_config::TomlStore;
use hotbind_panel::ActiveBindings;
use hotbind_platform::MemoryRegistry;
use tracing::{error, info, warn};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "hotbind=info";

fn init_logging(log_level: Option<&str>) {
    let directive = match log_level {
        // A bare level applies to our crates only.
        Some(level) if !level.contains('=') => format!("hotbind={level}"),
        Some(directive) => directive.to_string(),
        None => DEFAULT_LOG_DIRECTIVE.to_string(),
    };

    let mut filter = EnvFilter::from_default_env();
    let mut rejected = None;
    match directive.parse::<Directive>() {
        Ok(d) => filter = filter.add_directive(d),
        Err(e) => {
            rejected = Some(e);
            if let Ok(d) = DEFAULT_LOG_DIRECTIVE.parse::<Directive>() {
                filter = filter.add_directive(d);
            }
        }
    }

    // Logs go to stderr so the shell owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Some(e) = rejected {
        warn!(directive, "ignoring invalid log directive: {e}");
    }
}

fn open_store(args: &cli::Args) -> Result<TomlStore> {
    let store = match &args.config {
        Some(path) => TomlStore::open(path)?,
        None => TomlStore::open_default()?,
    };
    info!(path = %store.path().display(), "config loaded");
    Ok(store)
}

fn run(args: cli::Args) -> Result<()> {
    let mut store = open_store(&args)?;

    match args.command.unwrap_or(cli::Command::Edit) {
        cli::Command::Show { json } => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let rows = report::collect(&store);
            if json {
                let text = serde_json::to_string_pretty(&rows)
                    .map_err(|e| HotbindError::Other(format!("failed to encode bindings: {e}")))?;
                writeln!(out, "{text}")?;
            } else {
                report::write_table(&mut out, &rows)?;
            }
        }
        cli::Command::Edit => {
            let mut bindings = ActiveBindings::new(MemoryRegistry::new());
            bindings.activate_from_store(&store);

            let stdin = io::stdin();
            let stdout = io::stdout();
            shell::run(&mut bindings, &mut store, stdin.lock(), stdout.lock())?;
            // Dropping the bindings releases every registration.
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("hotbind: {e}");
            ExitCode::FAILURE
        }
    }
}
