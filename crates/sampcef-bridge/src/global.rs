//! The scripting global: owns namespaces and the binding registry.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};
use crate::extension::{BindingRegistry, Extension};
use crate::namespace::{Namespace, NamespaceEntry};
use crate::native::NativeResult;

/// Root object scripting consumers resolve namespaces from.
///
/// Constructed once during process initialization and passed by reference
/// to consumers; there is no ambient global lookup.
pub struct ScriptGlobal {
    config: BridgeConfig,
    registry: Arc<BindingRegistry>,
    namespaces: HashMap<String, Namespace>,
}

impl Default for ScriptGlobal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptGlobal {
    pub fn new() -> Self {
        Self::with_config(BridgeConfig::default())
    }

    pub fn with_config(config: BridgeConfig) -> Self {
        let registry = Arc::new(BindingRegistry::with_trace(config.trace_calls));
        Self {
            config,
            registry,
            namespaces: HashMap::new(),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn registry(&self) -> Arc<BindingRegistry> {
        self.registry.clone()
    }

    /// Install an extension into this global.
    pub fn install(&mut self, extension: &Extension) -> BridgeResult<()> {
        let registry = self.registry.clone();
        registry.register_extension(extension, self)
    }

    pub fn has_namespace(&self, name: &str) -> bool {
        self.namespaces.contains_key(name)
    }

    pub fn namespace(&self, name: &str) -> Option<&Namespace> {
        self.namespaces.get(name)
    }

    /// Fetch a namespace, creating it if absent. This is the guard that
    /// makes repeated installs share one namespace object.
    pub fn namespace_mut(&mut self, name: &str) -> &mut Namespace {
        self.namespaces
            .entry(name.to_string())
            .or_insert_with(|| Namespace::new(name))
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    /// Call a namespace entry, forwarding `args` to its native binding
    /// verbatim and returning the native result unchanged.
    pub fn call(&self, namespace: &str, entry: &str, args: Vec<Value>) -> NativeResult {
        let ns = self
            .namespaces
            .get(namespace)
            .ok_or_else(|| BridgeError::UnknownNamespace(namespace.to_string()))?;

        match ns.get(entry) {
            Some(NamespaceEntry::Bridge { native }) => self.registry.dispatch(native, args),
            Some(NamespaceEntry::Value(_)) => Err(BridgeError::NotCallable(entry.to_string())),
            None => Err(BridgeError::UnknownEntry(entry.to_string())),
        }
    }
}
