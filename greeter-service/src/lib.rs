//! # Greeter Service
//!
//! **INTERNAL USE ONLY**: This crate exists solely to provide compiled `pkg.Greeter` and
//! `pkg.Directory` servers together with their descriptor set, for integration testing
//! `reflector-core`. It is not intended for production use.

pub mod pb {
    include!(concat!(env!("OUT_DIR"), "/pkg.rs"));
}

pub use pb::directory_server::{Directory, DirectoryServer};
pub use pb::greeter_server::{Greeter, GreeterServer};

/// Encoded `FileDescriptorSet` for `proto/greeter.proto`.
pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("descriptors");

/// Implementations that satisfy the generated server traits without doing any work.
///
/// Introspection only needs the server types, never a live call.
pub mod dummy {
    use crate::pb::{HelloReply, HelloRequest, LookupReply, LookupRequest};
    use crate::{Directory, Greeter};
    use tokio_stream::wrappers::ReceiverStream;
    use tonic::{Request, Response, Status};

    pub struct DummyGreeter;

    #[tonic::async_trait]
    impl Greeter for DummyGreeter {
        type SayHelloStreamStream = ReceiverStream<Result<HelloReply, Status>>;

        async fn say_hello(
            &self,
            _req: Request<HelloRequest>,
        ) -> Result<Response<HelloReply>, Status> {
            Err(Status::unimplemented("say_hello"))
        }

        async fn say_hello_stream(
            &self,
            _req: Request<HelloRequest>,
        ) -> Result<Response<Self::SayHelloStreamStream>, Status> {
            Err(Status::unimplemented("say_hello_stream"))
        }
    }

    pub struct DummyDirectory;

    #[tonic::async_trait]
    impl Directory for DummyDirectory {
        async fn lookup(
            &self,
            _req: Request<LookupRequest>,
        ) -> Result<Response<LookupReply>, Status> {
            Err(Status::unimplemented("lookup"))
        }
    }
}
