//! # CLI
//!
//! This module defines the command-line interface of `reflector` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring registered
//! methods are `package.Service/Method`).
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "reflector",
    version,
    about = "Print the services, methods and message schemas a gRPC server exposes"
)]
pub struct Cli {
    /// Path to the descriptor set (.bin) used as the schema registry
    pub file_descriptor_set: PathBuf,

    /// Method registered on the inspected server (package.Service/Method).
    ///
    /// Repeat the flag once per method. When omitted, every service declared in the
    /// descriptor set is treated as registered.
    #[arg(short = 'r', long = "register", value_parser = parse_endpoint)]
    pub registered: Vec<(String, String)>,

    /// Print every method with its input and output fields
    #[arg(short, long)]
    pub detailed: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Sort services and methods by name instead of registry order
    #[arg(long)]
    pub sort: bool,

    /// Resolve methods through an index built once, instead of scanning the registry per method
    #[arg(long)]
    pub indexed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_endpoint(value: &str) -> Result<(String, String), String> {
    let path = value.strip_prefix('/').unwrap_or(value);

    let (service, method) = path.split_once('/').ok_or_else(|| {
        format!("Invalid endpoint format: '{value}'. Expected 'package.Service/Method'",)
    })?;

    let (service, method) = (service.trim(), method.trim());

    if service.is_empty() || method.is_empty() {
        return Err("Service and Method names cannot be empty".to_string());
    }

    if method.contains('/') {
        return Err(format!(
            "Invalid endpoint format: '{value}'. Method names cannot contain '/'"
        ));
    }

    Ok((service.to_string(), method.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_registered_methods() {
        let cli = Cli::try_parse_from([
            "reflector",
            "descriptors.bin",
            "-r",
            "pkg.Greeter/SayHello",
            "--register",
            "pkg.Greeter/SayHelloStream",
            "--detailed",
        ])
        .unwrap();

        assert_eq!(cli.file_descriptor_set, PathBuf::from("descriptors.bin"));
        assert_eq!(
            cli.registered,
            vec![
                ("pkg.Greeter".to_string(), "SayHello".to_string()),
                ("pkg.Greeter".to_string(), "SayHelloStream".to_string()),
            ]
        );
        assert!(cli.detailed);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.sort);
    }

    #[test]
    fn parses_json_format() {
        let cli = Cli::try_parse_from(["reflector", "d.bin", "--format", "json", "--sort"]).unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.sort);
        assert!(cli.registered.is_empty());
    }

    #[test]
    fn accepts_grpc_paths_and_trims_segments() {
        let expected = ("pkg.Greeter".to_string(), "SayHello".to_string());

        assert_eq!(parse_endpoint("/pkg.Greeter/SayHello"), Ok(expected.clone()));
        assert_eq!(parse_endpoint(" pkg.Greeter / SayHello "), Ok(expected));
    }

    #[test]
    fn rejects_malformed_endpoints() {
        assert!(parse_endpoint("pkg.Greeter").is_err());
        assert!(parse_endpoint("/SayHello").is_err());
        assert!(parse_endpoint("//SayHello").is_err());
        assert!(parse_endpoint(" /SayHello").is_err());
        assert!(parse_endpoint("pkg.Greeter/").is_err());
        assert!(parse_endpoint("pkg.Greeter/Say/Hello").is_err());
    }
}
