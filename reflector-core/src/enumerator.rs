//! # Service Enumerator
//!
//! Joins the server registry with the schema registry.
//!
//! Every method the server reports ends up in the output. Type names and schemas are
//! attached when the method resolves; when it does not, the method is kept without them
//! and the failure is only logged.
use crate::{
    model::{MethodInfo, ServiceInfo},
    registry::{MethodResolver, resolve_message_schema},
    server::ServiceRegistry,
};

/// Builds [`ServiceInfo`]s for a server using a [`MethodResolver`].
#[derive(Debug, Clone)]
pub struct ServiceEnumerator<R> {
    resolver: R,
}

impl<R: MethodResolver> ServiceEnumerator<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Lists every service and method of `server`, enriched with whatever could be resolved.
    ///
    /// Order follows `server`'s iteration order. This never fails because of a single
    /// unresolvable method, and returns an empty list for a server with no services.
    pub fn enumerate<S: ServiceRegistry + ?Sized>(&self, server: &S) -> Vec<ServiceInfo> {
        server
            .registered_services()
            .into_iter()
            .map(|service| {
                let methods = service
                    .methods
                    .iter()
                    .map(|method| self.describe_method(&service.name, method))
                    .collect();

                ServiceInfo {
                    name: service.name,
                    methods,
                }
            })
            .collect()
    }

    fn describe_method(&self, service: &str, method: &str) -> MethodInfo {
        let full_method_name = format!("/{service}/{method}");

        let descriptor = self
            .resolver
            .resolve_method(&full_method_name)
            .inspect_err(|err| {
                tracing::debug!(method = %full_method_name, error = %err, "method left unresolved");
            })
            .ok();

        let Some(descriptor) = descriptor else {
            return MethodInfo::new(method);
        };

        let input = descriptor.input();
        let output = descriptor.output();

        MethodInfo {
            name: method.to_string(),
            input_type: Some(input.full_name().to_string()),
            output_type: Some(output.full_name().to_string()),
            input_schema: resolve_message_schema(Some(&input)).ok(),
            output_schema: resolve_message_schema(Some(&output)).ok(),
        }
    }
}

/// Shorthand for `ServiceEnumerator::new(resolver).enumerate(server)`.
pub fn enumerate_services<S, R>(server: &S, resolver: &R) -> Vec<ServiceInfo>
where
    S: ServiceRegistry + ?Sized,
    R: MethodResolver + ?Sized,
{
    ServiceEnumerator::new(resolver).enumerate(server)
}

/// Sorts services by name, and the methods of each service by name.
///
/// Registry iteration order is not guaranteed to be stable; call this when output has to be
/// deterministic.
pub fn sort_services(services: &mut [ServiceInfo]) {
    services.sort_by(|a, b| a.name.cmp(&b.name));
    for service in services.iter_mut() {
        service.methods.sort_by(|a, b| a.name.cmp(&b.name));
    }
}
