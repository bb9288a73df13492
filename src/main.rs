// Next U Portal Core - command line entry point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/nextu-portal access --path /admin --session '{"role":"Admin"}'
// ```
//
// Or price a package from a request document:
//
// ```console
// $ ./target/release/nextu-portal quote --request quote.json --verbose
// ```
//
// Add `--log-dir logs` to keep daily JSON log files as well.

use anyhow::{Context, Result};
use clap::Parser;
use nextu_portal_core::access::AccessRouter;
use nextu_portal_core::portal::{
    read_combo_request, read_pricing_request, read_session_file, LoggingConfig, PortalError,
};
use nextu_portal_core::pricing::PriceCalculator;
use nextu_portal_core::types::config::{CliArgs, Command};
use nextu_portal_core::types::PortalConfig;
use serde::Serialize;
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match PortalConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let _logging = match LoggingConfig::from_cli_args(&args).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        let code = e.downcast_ref::<PortalError>().map(PortalError::exit_code).unwrap_or(1);
        process::exit(code);
    }
}

/// Load configuration and dispatch the requested operation
fn run(args: CliArgs) -> Result<()> {
    let config = PortalConfig::from_cli_args(&args)
        .map_err(PortalError::from)
        .context("Failed to load configuration")?;
    config.validate().map_err(PortalError::from).context("Invalid configuration")?;
    info!("Configuration loaded and validated successfully");

    let Some(command) = args.command else {
        eprintln!("Configuration is valid. Nothing to do; see --help for commands.");
        return Ok(());
    };

    match command {
        Command::Access { path, session, session_file, cookie } => {
            let session = match (session, session_file) {
                (Some(inline), _) => Some(inline),
                (None, Some(file)) => Some(
                    read_session_file(&file)
                        .with_context(|| format!("Failed to read session file {}", file))?,
                ),
                (None, None) => None,
            };

            let router = AccessRouter::from_config(&config);
            let decision = if cookie {
                router.decide_cookie(session.as_deref(), &path)
            } else {
                router.decide_session(session.as_deref(), &path)
            };

            info!(path = %path, decision = %decision, "Access evaluated");
            print_json(&decision)
        }
        Command::Quote { request } => {
            let request = read_pricing_request(&request)
                .with_context(|| format!("Failed to load pricing request {}", request))?;
            let quote = PriceCalculator::from_config(&config).quote(&request);

            info!(total = %quote.total, months = quote.months, "Price computed");
            print_json(&quote)
        }
        Command::Combo { request } => {
            let request = read_combo_request(&request)
                .with_context(|| format!("Failed to load combo request {}", request))?;
            let quote = PriceCalculator::from_config(&config).quote_combo(&request);

            info!(
                total = %quote.total,
                components = quote.contributions.len(),
                "Combo price computed"
            );
            print_json(&quote)
        }
    }
}

/// Write a result document to stdout
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize result")?;
    println!("{}", json);
    Ok(())
}
