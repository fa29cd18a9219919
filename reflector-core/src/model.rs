//! # Model
//!
//! Value objects produced by a single enumeration pass. They are rebuilt from the registries
//! every time and carry no identity beyond structural equality.
use serde::{Deserialize, Serialize};

/// One service exposed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInfo {
    /// Fully qualified service name (e.g. `pkg.Greeter`).
    pub name: String,
    /// Methods in the order the server registry reported them.
    pub methods: Vec<MethodInfo>,
}

/// One method of a service.
///
/// The type names and schemas are best-effort: they are `None` when no descriptor for the
/// method could be resolved. A schema is only ever present together with its type name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<MessageSchema>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<MessageSchema>,
}

impl MethodInfo {
    /// A method with no type information attached.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns `true` if both the input and output type names were resolved.
    pub fn has_signature(&self) -> bool {
        self.input_type.is_some() && self.output_type.is_some()
    }
}

/// The shape of a message type, fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSchema {
    /// Fully qualified message name (e.g. `pkg.HelloRequest`).
    pub name: String,
    pub fields: Vec<FieldInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub number: u32,
    /// Primitive kind name (`string`, `int32`, `enum`, ...) or, for message fields,
    /// the fully qualified name of the nested message.
    #[serde(rename = "type")]
    pub field_type: String,
    pub repeated: bool,
}
