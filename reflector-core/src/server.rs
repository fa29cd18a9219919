//! # Server Registry
//!
//! The live server's own view of what it serves: service names mapped to method names.
//!
//! `tonic` does not expose the services added to a running server, so hosts describe them
//! through the [`ServiceRegistry`] trait. Two implementations ship with the crate:
//!
//! * [`ServiceTable`]: an ordered table populated alongside the server router, typically with
//!   [`ServiceTable::add_named`] next to each `add_service` call.
//! * [`DescriptorPool`]: every service declared in the pool, for hosts that register exactly
//!   what their descriptors describe.
use crate::registry::SchemaRegistry;
use prost_reflect::DescriptorPool;
use tonic::server::NamedService;

/// A service as reported by the server registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredService {
    pub name: String,
    pub methods: Vec<String>,
}

/// Read-only access to the services a server has registered.
pub trait ServiceRegistry {
    /// Services with their method names, in the registry's iteration order.
    fn registered_services(&self) -> Vec<RegisteredService>;
}

impl<T: ServiceRegistry + ?Sized> ServiceRegistry for &T {
    fn registered_services(&self) -> Vec<RegisteredService> {
        (**self).registered_services()
    }
}

/// An ordered, explicitly populated server registry.
///
/// ```rust
/// use reflector_core::{ServiceRegistry, ServiceTable};
///
/// let table = ServiceTable::new()
///     .add_service("pkg.Greeter", ["SayHello"])
///     .add_service("pkg.Greeter", ["SayHelloStream"]);
///
/// let services = table.registered_services();
/// assert_eq!(services.len(), 1);
/// assert_eq!(services[0].methods, ["SayHello", "SayHelloStream"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceTable {
    services: Vec<RegisteredService>,
}

impl ServiceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `methods` under `name`.
    ///
    /// Registering a name that is already present appends to its method list, so every
    /// service appears once, at the position it was first registered.
    pub fn add_service<I>(mut self, name: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.insert(name.into(), methods.into_iter().map(Into::into));
        self
    }

    /// Registers a tonic server under its generated service name (e.g. `pkg.Greeter`).
    pub fn add_named<S, I>(self, methods: I) -> Self
    where
        S: NamedService,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.add_service(S::NAME, methods)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    fn insert(&mut self, name: String, methods: impl Iterator<Item = String>) {
        match self.services.iter_mut().find(|s| s.name == name) {
            Some(service) => service.methods.extend(methods),
            None => self.services.push(RegisteredService {
                name,
                methods: methods.collect(),
            }),
        }
    }
}

impl FromIterator<(String, String)> for ServiceTable {
    /// Groups `(service, method)` pairs by service, keeping first-seen order.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = ServiceTable::new();
        for (service, method) in iter {
            table.insert(service, std::iter::once(method));
        }
        table
    }
}

impl ServiceRegistry for ServiceTable {
    fn registered_services(&self) -> Vec<RegisteredService> {
        self.services.clone()
    }
}

impl ServiceRegistry for DescriptorPool {
    fn registered_services(&self) -> Vec<RegisteredService> {
        DescriptorPool::services(self)
            .map(|service| RegisteredService {
                name: service.full_name().to_string(),
                methods: service.methods().map(|m| m.name().to_string()).collect(),
            })
            .collect()
    }
}

impl ServiceRegistry for SchemaRegistry {
    fn registered_services(&self) -> Vec<RegisteredService> {
        self.pool().registered_services()
    }
}
