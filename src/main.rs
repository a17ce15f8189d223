//! Service entry point — CLI wiring, configuration, and storage selection.

use std::net::SocketAddr;
use std::path::Path;
use std::process;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use watt_audit::api::{self, AppState};
use watt_audit::config::AppConfig;
use watt_audit::storage;

/// Parsed CLI arguments.
struct CliArgs {
    config_path: Option<String>,
    bind_override: Option<String>,
    database_url_override: Option<String>,
}

fn print_help() {
    eprintln!("watt-audit — appliance energy-consumption calculator service");
    eprintln!();
    eprintln!("Usage: watt-audit [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>         Load configuration from a TOML file");
    eprintln!("  --bind <addr>           Bind address (default: 0.0.0.0:3000)");
    eprintln!("  --database-url <url>    MySQL connection URL (default: $DATABASE_URL;");
    eprintln!("                          in-memory storage when unset)");
    eprintln!("  --help                  Show this help message");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: None,
        bind_override: None,
        database_url_override: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            "--bind" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --bind requires an address argument");
                    process::exit(1);
                }
                cli.bind_override = Some(args[i].clone());
            }
            "--database-url" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --database-url requires a URL argument");
                    process::exit(1);
                }
                cli.database_url_override = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = parse_args();

    let mut config = if let Some(ref path) = cli.config_path {
        match AppConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        AppConfig::default()
    };

    // CLI overrides file; the environment fills the URL only when both
    // leave it unset.
    if let Some(bind) = cli.bind_override {
        config.server.bind = bind;
    }
    if let Some(url) = cli.database_url_override {
        config.database.url = Some(url);
    } else if config.database.url.is_none() {
        config.database.url = std::env::var("DATABASE_URL").ok();
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let addr = match config.server.bind.parse::<SocketAddr>() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("error: invalid bind address \"{}\": {e}", config.server.bind);
            process::exit(1);
        }
    };

    let storage = storage::connect(&config.database).await;
    let state = Arc::new(AppState {
        storage,
        tariff: config.tariff.clone(),
    });

    if let Err(e) = api::serve(state, addr).await {
        eprintln!("error: server failed: {e}");
        process::exit(1);
    }
}
