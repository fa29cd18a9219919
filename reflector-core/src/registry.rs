//! # Schema Registry
//!
//! Lookups against an injected [`DescriptorPool`].
//!
//! Method names use the gRPC path form `/<package.Service>/<Method>`. Resolution is exposed
//! through the [`MethodResolver`] trait with two implementations:
//!
//! * [`SchemaRegistry`] scans every file, service and method of the pool on each lookup and
//!   stops at the first match.
//! * [`MethodIndex`] builds a `(service, method)` map once per pool snapshot, for callers
//!   that resolve many names against the same pool.
//!
//! Both report the same errors for the same input.
mod index;

pub use index::MethodIndex;

use crate::model::{FieldInfo, MessageSchema};
use prost_reflect::{
    Cardinality, DescriptorError, DescriptorPool, FieldDescriptor, Kind, MessageDescriptor,
    MethodDescriptor,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Invalid method name format: '{0}'. Expected '/package.Service/Method'")]
    MalformedName(String),

    #[error("Method descriptor not found for '{0}'")]
    NotFound(String),

    #[error("Message descriptor is missing")]
    NilDescriptor,
}

/// Resolves full gRPC method names to their descriptors.
pub trait MethodResolver {
    /// Looks up `/<package.Service>/<Method>`. The leading slash is optional.
    ///
    /// # Returns
    ///
    /// * `Ok(MethodDescriptor)` - The first matching method.
    /// * `Err(ResolveError::MalformedName)` - The name is not two non-empty `/`-separated segments.
    /// * `Err(ResolveError::NotFound)` - No registered service declares that method.
    fn resolve_method(&self, full_method_name: &str) -> Result<MethodDescriptor, ResolveError>;
}

impl<R: MethodResolver + ?Sized> MethodResolver for &R {
    fn resolve_method(&self, full_method_name: &str) -> Result<MethodDescriptor, ResolveError> {
        (**self).resolve_method(full_method_name)
    }
}

/// Splits `/<package.Service>/<Method>` into its service and method segments.
///
/// A single leading `/` is stripped. The remainder must contain exactly one `/` with a
/// non-empty segment on each side.
pub fn parse_full_method_name(full_method_name: &str) -> Result<(&str, &str), ResolveError> {
    let path = full_method_name
        .strip_prefix('/')
        .unwrap_or(full_method_name);

    let mut segments = path.split('/');

    match (segments.next(), segments.next(), segments.next()) {
        (Some(service), Some(method), None) if !service.is_empty() && !method.is_empty() => {
            Ok((service, method))
        }
        _ => Err(ResolveError::MalformedName(full_method_name.to_string())),
    }
}

/// The schema registry: a [`DescriptorPool`] queried by linear scan.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    pool: DescriptorPool,
}

impl SchemaRegistry {
    pub fn new(pool: DescriptorPool) -> Self {
        Self { pool }
    }

    /// Builds a registry from an encoded `FileDescriptorSet`.
    ///
    /// # Returns
    ///
    /// * `Ok(SchemaRegistry)` - The registry holding every file of the set.
    /// * `Err(DescriptorError)` - If the bytes are not a valid descriptor set.
    pub fn decode(file_descriptor_set: &[u8]) -> Result<Self, DescriptorError> {
        let pool = DescriptorPool::decode(file_descriptor_set)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &DescriptorPool {
        &self.pool
    }

    /// Snapshots the current pool into a [`MethodIndex`].
    pub fn index(&self) -> MethodIndex {
        MethodIndex::new(&self.pool)
    }
}

impl From<DescriptorPool> for SchemaRegistry {
    fn from(pool: DescriptorPool) -> Self {
        Self::new(pool)
    }
}

impl MethodResolver for SchemaRegistry {
    fn resolve_method(&self, full_method_name: &str) -> Result<MethodDescriptor, ResolveError> {
        let (service_name, method_name) = parse_full_method_name(full_method_name)?;

        tracing::trace!(
            service = service_name,
            method = method_name,
            files = self.pool.files().len(),
            "scanning schema registry"
        );

        self.pool
            .files()
            .find_map(|file| {
                file.services()
                    .filter(|service| service.full_name() == service_name)
                    .find_map(|service| service.methods().find(|m| m.name() == method_name))
            })
            .ok_or_else(|| ResolveError::NotFound(full_method_name.to_string()))
    }
}

/// Flattens a message descriptor into a [`MessageSchema`].
///
/// # Returns
///
/// * `Ok(MessageSchema)` - Fields in declaration order.
/// * `Err(ResolveError::NilDescriptor)` - If no descriptor was given.
pub fn resolve_message_schema(
    descriptor: Option<&MessageDescriptor>,
) -> Result<MessageSchema, ResolveError> {
    descriptor
        .map(MessageSchema::from)
        .ok_or(ResolveError::NilDescriptor)
}

impl From<&MessageDescriptor> for MessageSchema {
    fn from(descriptor: &MessageDescriptor) -> Self {
        MessageSchema {
            name: descriptor.full_name().to_string(),
            // `fields()` yields number order; the proto keeps declaration order.
            fields: descriptor
                .descriptor_proto()
                .field
                .iter()
                .filter_map(|proto| descriptor.get_field(proto.number() as u32))
                .map(|f| FieldInfo::from(&f))
                .collect(),
        }
    }
}

impl From<&FieldDescriptor> for FieldInfo {
    fn from(field: &FieldDescriptor) -> Self {
        FieldInfo {
            name: field.name().to_string(),
            number: field.number(),
            field_type: field_type_name(field),
            repeated: field.cardinality() == Cardinality::Repeated,
        }
    }
}

fn field_type_name(field: &FieldDescriptor) -> String {
    let kind = match field.kind() {
        Kind::Message(_) if field.is_group() => "group",
        Kind::Message(message) => return message.full_name().to_string(),
        Kind::Enum(_) => "enum",
        Kind::Double => "double",
        Kind::Float => "float",
        Kind::Int32 => "int32",
        Kind::Int64 => "int64",
        Kind::Uint32 => "uint32",
        Kind::Uint64 => "uint64",
        Kind::Sint32 => "sint32",
        Kind::Sint64 => "sint64",
        Kind::Fixed32 => "fixed32",
        Kind::Fixed64 => "fixed64",
        Kind::Sfixed32 => "sfixed32",
        Kind::Sfixed64 => "sfixed64",
        Kind::Bool => "bool",
        Kind::String => "string",
        Kind::Bytes => "bytes",
    };

    kind.to_string()
}
