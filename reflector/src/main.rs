//! # Reflector CLI Entry Point
//!
//! The main executable for the Reflector tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Sets up logging and parses command-line arguments using [`cli::Cli`].
//! 2. **Loading**: Reads the descriptor set that acts as the schema registry.
//! 3. **Enumeration**: Joins the server registry (explicit `--register` methods, or every service
//!    in the descriptor set) with the schema registry via `reflector_core`.
//! 4. **Presentation**: Formats and prints the result or the error to standard output/error.

mod cli;
mod formatter;

use clap::Parser;
use cli::{Cli, OutputFormat};
use formatter::{FormattedString, GenericError, ServiceReport};
use reflector_core::{
    SchemaRegistry, ServiceInfo, ServiceRegistry, ServiceTable, enumerate_services, sort_services,
};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args = Cli::parse();

    let registry = load_registry_or_exit(&args);

    let mut services = if args.registered.is_empty() {
        inspect(&registry, &registry, args.indexed)
    } else {
        let server: ServiceTable = args.registered.into_iter().collect();
        inspect(&server, &registry, args.indexed)
    };

    if args.sort {
        sort_services(&mut services);
    }

    tracing::info!(services = services.len(), "enumeration finished");

    match args.format {
        OutputFormat::Text => println!(
            "{}",
            FormattedString::from(ServiceReport {
                services,
                detailed: args.detailed,
            })
        ),
        OutputFormat::Json => match serde_json::to_string_pretty(&services) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("{}", FormattedString::from(err));
                process::exit(1);
            }
        },
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!(
            "{}",
            FormattedString::from(GenericError("Failed to initialize logging", err))
        );
    }
}

fn load_registry_or_exit(args: &Cli) -> SchemaRegistry {
    let bytes = match std::fs::read(&args.file_descriptor_set) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    };

    match SchemaRegistry::decode(bytes.as_slice()) {
        Ok(registry) => {
            tracing::debug!(
                path = %args.file_descriptor_set.display(),
                files = registry.pool().files().len(),
                "loaded schema registry"
            );
            registry
        }
        Err(err) => {
            eprintln!("{}", FormattedString::from(err));
            process::exit(1);
        }
    }
}

fn inspect<S: ServiceRegistry>(
    server: &S,
    registry: &SchemaRegistry,
    indexed: bool,
) -> Vec<ServiceInfo> {
    if indexed {
        enumerate_services(server, &registry.index())
    } else {
        enumerate_services(server, registry)
    }
}
