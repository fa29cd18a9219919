use colored::*;
use reflector_core::{CompactListing, DetailedListing, ServiceInfo, prost_reflect};
use std::fmt::Display;

/// A wrapper struct for a formatted, colored string.
///
/// Implements `Display` so it can be printed directly.
pub struct FormattedString(pub String);

/// An enumerated service list, rendered with the compact or the detailed view.
pub struct ServiceReport {
    pub services: Vec<ServiceInfo>,
    pub detailed: bool,
}

pub struct GenericError<T: Display>(pub &'static str, pub T);

impl std::fmt::Display for FormattedString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.0)
    }
}

impl From<ServiceReport> for FormattedString {
    fn from(report: ServiceReport) -> Self {
        if report.services.is_empty() {
            return FormattedString("No services found.".yellow().to_string());
        }

        let out = if report.detailed {
            DetailedListing(&report.services).to_string()
        } else {
            format!(
                "{}\n{}",
                "Available Services:".bold(),
                CompactListing(&report.services)
            )
        };

        FormattedString(out.trim_end().to_string())
    }
}

impl From<prost_reflect::DescriptorError> for FormattedString {
    fn from(err: prost_reflect::DescriptorError) -> Self {
        FormattedString(format!(
            "{}\n\n'{}'",
            "Failed to parse file descriptor:".red().bold(),
            err
        ))
    }
}

impl From<std::io::Error> for FormattedString {
    fn from(err: std::io::Error) -> Self {
        FormattedString(format!(
            "{}\n\n'{}'",
            "Failed to read file:".red().bold(),
            err
        ))
    }
}

impl From<serde_json::Error> for FormattedString {
    fn from(err: serde_json::Error) -> Self {
        FormattedString(format!(
            "{}\n\n'{}'",
            "Failed to serialize services:".red().bold(),
            err
        ))
    }
}

impl<T: Display> From<GenericError<T>> for FormattedString {
    fn from(GenericError(msg, err): GenericError<T>) -> Self {
        FormattedString(format!("{}:\n\n'{}'", msg.red().bold(), err))
    }
}
