//! Hermetic descriptor pools for unit tests, built directly from descriptor protos.
use prost_reflect::DescriptorPool;
use prost_types::{
    DescriptorProto, EnumDescriptorProto, EnumValueDescriptorProto, FieldDescriptorProto,
    FileDescriptorProto, FileDescriptorSet, MethodDescriptorProto, ServiceDescriptorProto,
    field_descriptor_proto::{Label, Type},
};

pub(crate) fn field(name: &str, number: i32, ty: Type, label: Label) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(label as i32),
        r#type: Some(ty as i32),
        ..Default::default()
    }
}

pub(crate) fn typed_field(
    name: &str,
    number: i32,
    ty: Type,
    label: Label,
    type_name: &str,
) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..field(name, number, ty, label)
    }
}

pub(crate) fn message(name: &str, fields: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field: fields,
        ..Default::default()
    }
}

pub(crate) fn method(name: &str, input: &str, output: &str) -> MethodDescriptorProto {
    MethodDescriptorProto {
        name: Some(name.to_string()),
        input_type: Some(input.to_string()),
        output_type: Some(output.to_string()),
        ..Default::default()
    }
}

pub(crate) fn service(name: &str, methods: Vec<MethodDescriptorProto>) -> ServiceDescriptorProto {
    ServiceDescriptorProto {
        name: Some(name.to_string()),
        method: methods,
        ..Default::default()
    }
}

/// `pkg.Greeter/SayHello(pkg.HelloRequest) returns (pkg.HelloReply)`.
pub(crate) fn greeter_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("pkg/greeter.proto".to_string()),
        package: Some("pkg".to_string()),
        message_type: vec![
            message(
                "HelloRequest",
                vec![field("name", 1, Type::String, Label::Optional)],
            ),
            message(
                "HelloReply",
                vec![field("message", 1, Type::String, Label::Optional)],
            ),
        ],
        service: vec![service(
            "Greeter",
            vec![method("SayHello", ".pkg.HelloRequest", ".pkg.HelloReply")],
        )],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

/// `shop.Catalog` with messages exercising repeated, nested message and enum fields.
/// Field numbers deliberately disagree with declaration order.
pub(crate) fn catalog_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("shop/catalog.proto".to_string()),
        package: Some("shop".to_string()),
        message_type: vec![
            message(
                "Money",
                vec![
                    field("currency", 1, Type::String, Label::Optional),
                    field("units", 2, Type::Int64, Label::Optional),
                ],
            ),
            message(
                "Item",
                vec![
                    field("sku", 2, Type::String, Label::Optional),
                    typed_field("price", 1, Type::Message, Label::Optional, ".shop.Money"),
                    field("tags", 5, Type::String, Label::Repeated),
                    typed_field("state", 3, Type::Enum, Label::Optional, ".shop.State"),
                ],
            ),
            message(
                "ListItemsRequest",
                vec![
                    field("page_size", 1, Type::Uint32, Label::Optional),
                    field("page_token", 2, Type::Bytes, Label::Optional),
                ],
            ),
            message(
                "ListItemsResponse",
                vec![typed_field(
                    "items",
                    1,
                    Type::Message,
                    Label::Repeated,
                    ".shop.Item",
                )],
            ),
        ],
        enum_type: vec![EnumDescriptorProto {
            name: Some("State".to_string()),
            value: vec![
                EnumValueDescriptorProto {
                    name: Some("STATE_UNSPECIFIED".to_string()),
                    number: Some(0),
                    ..Default::default()
                },
                EnumValueDescriptorProto {
                    name: Some("STATE_ACTIVE".to_string()),
                    number: Some(1),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }],
        service: vec![service(
            "Catalog",
            vec![
                method("ListItems", ".shop.ListItemsRequest", ".shop.ListItemsResponse"),
                method("GetItem", ".shop.Item", ".shop.Item"),
            ],
        )],
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

/// proto2 `legacy.Envelope` with a required scalar declared before a group field.
pub(crate) fn legacy_file() -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some("legacy/envelope.proto".to_string()),
        package: Some("legacy".to_string()),
        message_type: vec![DescriptorProto {
            nested_type: vec![message(
                "Payload",
                vec![field("body", 1, Type::String, Label::Optional)],
            )],
            ..message(
                "Envelope",
                vec![
                    field("id", 2, Type::Int32, Label::Required),
                    typed_field(
                        "payload",
                        1,
                        Type::Group,
                        Label::Optional,
                        ".legacy.Envelope.Payload",
                    ),
                ],
            )
        }],
        syntax: Some("proto2".to_string()),
        ..Default::default()
    }
}

pub(crate) fn pool(files: Vec<FileDescriptorProto>) -> DescriptorPool {
    DescriptorPool::from_file_descriptor_set(FileDescriptorSet { file: files })
        .expect("test descriptors must be valid")
}

pub(crate) fn greeter_pool() -> DescriptorPool {
    pool(vec![greeter_file()])
}

pub(crate) fn full_pool() -> DescriptorPool {
    pool(vec![greeter_file(), catalog_file()])
}
