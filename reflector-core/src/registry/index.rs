use super::{MethodResolver, ResolveError, parse_full_method_name};
use prost_reflect::{DescriptorPool, MethodDescriptor};
use std::collections::HashMap;

/// A `(service full name, method name) -> descriptor` map built once from a pool.
///
/// The index is a snapshot: files added to the pool afterwards are not visible until a
/// new index is built.
#[derive(Debug, Clone, Default)]
pub struct MethodIndex {
    services: HashMap<String, HashMap<String, MethodDescriptor>>,
}

impl MethodIndex {
    pub fn new(pool: &DescriptorPool) -> Self {
        let mut services: HashMap<String, HashMap<String, MethodDescriptor>> = HashMap::new();

        for file in pool.files() {
            for service in file.services() {
                let methods = services
                    .entry(service.full_name().to_string())
                    .or_default();

                for method in service.methods() {
                    // First declaration wins, as with a scan.
                    methods.entry(method.name().to_string()).or_insert(method);
                }
            }
        }

        tracing::debug!(services = services.len(), "built method index");

        Self { services }
    }

    /// Number of indexed methods across all services.
    pub fn len(&self) -> usize {
        self.services.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MethodResolver for MethodIndex {
    fn resolve_method(&self, full_method_name: &str) -> Result<MethodDescriptor, ResolveError> {
        let (service_name, method_name) = parse_full_method_name(full_method_name)?;

        self.services
            .get(service_name)
            .and_then(|methods| methods.get(method_name))
            .cloned()
            .ok_or_else(|| ResolveError::NotFound(full_method_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SchemaRegistry;
    use crate::testing::full_pool;

    #[test]
    fn indexes_every_declared_method() {
        let index = MethodIndex::new(&full_pool());

        assert_eq!(index.len(), 3);
        assert!(MethodIndex::default().is_empty());
    }

    #[test]
    fn agrees_with_the_scanning_resolver() {
        let registry = SchemaRegistry::new(full_pool());
        let index = registry.index();

        for name in [
            "/pkg.Greeter/SayHello",
            "shop.Catalog/ListItems",
            "/shop.Catalog/GetItem",
            "/shop.Catalog/DeleteItem",
            "/pkg.Missing/SayHello",
            "/pkg.Greeter",
            "/a/b/c",
        ] {
            let scanned = registry.resolve_method(name);
            let indexed = index.resolve_method(name);

            match (scanned, indexed) {
                (Ok(a), Ok(b)) => assert_eq!(a.full_name(), b.full_name(), "{name}"),
                (Err(a), Err(b)) => assert_eq!(a, b, "{name}"),
                (a, b) => panic!("resolvers disagree on '{name}': {a:?} vs {b:?}"),
            }
        }
    }
}
