//! # Formatter
//!
//! Plain-text views over an enumerated service list.
//!
//! Both views are exposed as `Display` wrappers ([`CompactListing`], [`DetailedListing`]) so
//! they can be written straight into a formatter or logged, and as `String`-returning helpers.
use crate::model::{FieldInfo, MessageSchema, ServiceInfo};
use std::fmt::{self, Display};

/// One line per service and one signature line per method.
///
/// ```text
///   - pkg.Greeter
///     * SayHello(pkg.HelloRequest) returns (pkg.HelloReply)
/// ```
pub struct CompactListing<'a>(pub &'a [ServiceInfo]);

/// Every method with its input and output fields.
///
/// ```text
/// Service: pkg.Greeter
///   Method: SayHello
///     Input:  pkg.HelloRequest
///       - string name = 1
///     Output: pkg.HelloReply
///       - string message = 1
///
/// ```
pub struct DetailedListing<'a>(pub &'a [ServiceInfo]);

impl Display for CompactListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for service in self.0 {
            writeln!(f, "  - {}", service.name)?;

            for method in &service.methods {
                write!(f, "    * {}", method.name)?;

                if let (Some(input), Some(output)) = (&method.input_type, &method.output_type) {
                    write!(f, "({input}) returns ({output})")?;
                }

                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Display for DetailedListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for service in self.0 {
            writeln!(f, "Service: {}", service.name)?;

            for method in &service.methods {
                writeln!(f, "  Method: {}", method.name)?;

                writeln!(
                    f,
                    "    Input:  {}",
                    method.input_type.as_deref().unwrap_or_default()
                )?;
                write_fields(f, method.input_schema.as_ref())?;

                writeln!(
                    f,
                    "    Output: {}",
                    method.output_type.as_deref().unwrap_or_default()
                )?;
                write_fields(f, method.output_schema.as_ref())?;

                writeln!(f)?;
            }
        }
        Ok(())
    }
}

// Declaration order, not field number order.
fn write_fields(f: &mut fmt::Formatter<'_>, schema: Option<&MessageSchema>) -> fmt::Result {
    let Some(schema) = schema else {
        return Ok(());
    };

    for field in &schema.fields {
        writeln!(f, "      - {}", FieldLine(field))?;
    }
    Ok(())
}

struct FieldLine<'a>(&'a FieldInfo);

impl Display for FieldLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.0;
        let label = if field.repeated { "repeated " } else { "" };

        write!(
            f,
            "{}{} {} = {}",
            label, field.field_type, field.name, field.number
        )
    }
}

pub fn format_compact(services: &[ServiceInfo]) -> String {
    CompactListing(services).to_string()
}

pub fn format_detailed(services: &[ServiceInfo]) -> String {
    DetailedListing(services).to_string()
}
