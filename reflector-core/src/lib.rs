//! # Reflector Core
//!
//! `reflector-core` is the library powering the Reflector CLI. It answers the question
//! "what can this gRPC server do?" by combining two in-process registries:
//!
//! * the **live server registry**, which knows which services and methods the server has
//!   registered (see [`server::ServiceRegistry`]), and
//! * the **schema registry**, a [`prost_reflect::DescriptorPool`] holding the Protobuf
//!   descriptors of those services (see [`registry::SchemaRegistry`]).
//!
//! ## Key Components
//!
//! * **[`SchemaRegistry`]:** Resolves `/package.Service/Method` names to method descriptors and
//!   turns message descriptors into flat [`MessageSchema`]s.
//! * **[`ServiceEnumerator`]:** Walks a [`ServiceRegistry`] and enriches every method with the
//!   input/output types and schemas it can resolve. Methods without a descriptor are kept,
//!   just without type information.
//! * **[`formatter`]:** Renders the aggregated [`ServiceInfo`] list as a compact signature
//!   listing or a detailed schema dump.
//!
//! ## Example
//!
//! ```rust,no_run
//! use reflector_core::{SchemaRegistry, ServiceTable, enumerate_services, format_compact};
//!
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::decode(std::fs::read("descriptor.bin")?.as_slice())?;
//! let server = ServiceTable::new().add_service("pkg.Greeter", ["SayHello"]);
//!
//! let services = enumerate_services(&server, &registry);
//! print!("{}", format_compact(&services));
//! # Ok(())
//! # }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports `prost-reflect` and `tonic` to ensure that consumers
//! use compatible versions of these underlying dependencies.
pub mod enumerator;
pub mod formatter;
pub mod model;
pub mod registry;
pub mod server;

#[cfg(test)]
mod testing;

pub use enumerator::{ServiceEnumerator, enumerate_services, sort_services};
pub use formatter::{CompactListing, DetailedListing, format_compact, format_detailed};
pub use model::{FieldInfo, MessageSchema, MethodInfo, ServiceInfo};
pub use registry::{
    MethodIndex, MethodResolver, ResolveError, SchemaRegistry, parse_full_method_name,
    resolve_message_schema,
};
pub use server::{RegisteredService, ServiceRegistry, ServiceTable};

// Re-exports
pub use prost_reflect;
pub use tonic;
