//! Installable extensions and the binding registry.
//!
//! An [`Extension`] bundles the namespace entries a scripting consumer
//! sees with the native declarations those entries bind against. The
//! [`BindingRegistry`] owns every declared binding and dispatches bridge
//! calls to them, forwarding arguments and results verbatim.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

use crate::error::{BridgeError, BridgeResult};
use crate::global::ScriptGlobal;
use crate::namespace::NamespaceEntry;
use crate::native::{HostContext, HostState, NativeDecl, NativeResult};

/// Extension initialization hook, run against the host state on install.
pub type ExtensionInitFn = Arc<dyn Fn(&HostState) + Send + Sync>;

/// An installable unit: namespace entries, the native declarations they
/// bind against, and optionally the extension source for engines that
/// consume raw JavaScript.
#[derive(Clone)]
pub struct Extension {
    name: String,
    natives: Vec<NativeDecl>,
    entries: Vec<(String, NamespaceEntry)>,
    init: Option<ExtensionInitFn>,
    shim_js: Option<String>,
}

impl Extension {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            natives: Vec::new(),
            entries: Vec::new(),
            init: None,
            shim_js: None,
        }
    }

    /// Name of this extension, also the namespace it installs under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn with_natives(mut self, natives: Vec<NativeDecl>) -> Self {
        self.natives = natives;
        self
    }

    /// Add a bridge function entry delegating to the named native binding.
    pub fn bridge(mut self, entry: &str, native: &str) -> Self {
        self.entries.push((
            entry.to_string(),
            NamespaceEntry::Bridge {
                native: native.to_string(),
            },
        ));
        self
    }

    /// Add a plain value entry.
    pub fn value(mut self, entry: &str, value: Value) -> Self {
        self.entries
            .push((entry.to_string(), NamespaceEntry::Value(value)));
        self
    }

    pub fn with_init<F>(mut self, init: F) -> Self
    where
        F: Fn(&HostState) + Send + Sync + 'static,
    {
        self.init = Some(Arc::new(init));
        self
    }

    /// Attach the extension source for engines that take raw JavaScript.
    pub fn with_shim_js(mut self, js: &str) -> Self {
        self.shim_js = Some(js.to_string());
        self
    }

    /// The extension source, if one was attached.
    pub fn shim_js(&self) -> Option<&str> {
        self.shim_js.as_deref()
    }

    pub(crate) fn natives(&self) -> &[NativeDecl] {
        &self.natives
    }

    pub(crate) fn entries(&self) -> &[(String, NamespaceEntry)] {
        &self.entries
    }

    pub(crate) fn init(&self) -> Option<&ExtensionInitFn> {
        self.init.as_ref()
    }
}

struct RegisteredBinding {
    decl: NativeDecl,
    owner: String,
}

/// Holds every declared native binding and dispatches bridge calls to them.
pub struct BindingRegistry {
    bindings: Mutex<HashMap<String, RegisteredBinding>>,
    state: HostState,
    trace_calls: bool,
}

impl Default for BindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingRegistry {
    pub fn new() -> Self {
        Self::with_trace(false)
    }

    pub(crate) fn with_trace(trace_calls: bool) -> Self {
        Self {
            bindings: Mutex::new(HashMap::new()),
            state: HostState::new(),
            trace_calls,
        }
    }

    pub fn state(&self) -> HostState {
        self.state.clone()
    }

    /// Install an extension: run its init hook, declare its natives, and
    /// populate its namespace in `global`.
    ///
    /// Reinstalling the same extension redefines its own bindings and
    /// entries identically. Entries it does not own are left untouched; a
    /// binding name claimed by a different extension is an error.
    pub fn register_extension(
        &self,
        extension: &Extension,
        global: &mut ScriptGlobal,
    ) -> BridgeResult<()> {
        debug!(
            extension = extension.name(),
            natives = extension.natives().len(),
            "installing extension"
        );

        if let Some(init) = extension.init() {
            init(&self.state);
        }

        {
            let mut bindings = self.bindings.lock();
            for decl in extension.natives() {
                if let Some(existing) = bindings.get(decl.name()) {
                    if existing.owner != extension.name() {
                        return Err(BridgeError::DuplicateBinding(decl.name().to_string()));
                    }
                }
                bindings.insert(
                    decl.name().to_string(),
                    RegisteredBinding {
                        decl: decl.clone(),
                        owner: extension.name().to_string(),
                    },
                );
            }
        }

        let namespace = global.namespace_mut(extension.name());
        for (entry, definition) in extension.entries() {
            namespace.define(entry.clone(), definition.clone());
        }

        debug!(extension = extension.name(), "extension installed");
        Ok(())
    }

    /// Invoke a declared native binding, forwarding `args` verbatim and
    /// returning the handler's result unchanged.
    pub fn dispatch(&self, native: &str, args: Vec<Value>) -> NativeResult {
        let decl = {
            let bindings = self.bindings.lock();
            match bindings.get(native) {
                Some(binding) => binding.decl.clone(),
                None => return Err(BridgeError::UnknownBinding(native.to_string())),
            }
        };

        if self.trace_calls {
            debug!(binding = native, "dispatching native binding");
        }

        decl.invoke(HostContext::new(self.state.clone()), args)
    }

    pub fn contains(&self, native: &str) -> bool {
        self.bindings.lock().contains_key(native)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::native_fn;
    use serde_json::json;

    struct Prefix(String);

    #[test]
    fn test_init_hook_seeds_state_for_handlers() {
        let mut global = ScriptGlobal::new();

        let extension = Extension::new("greeter")
            .with_init(|state| state.put(Prefix("hello ".to_string())))
            .with_natives(vec![native_fn("greeter_greet", |cx, args| {
                let prefix = cx
                    .state()
                    .get::<Prefix>()
                    .map(|p| p.0.clone())
                    .unwrap_or_default();
                let who = args
                    .first()
                    .and_then(|v| v.as_str())
                    .unwrap_or("world")
                    .to_string();
                Ok(Value::String(format!("{prefix}{who}")))
            })])
            .bridge("greet", "greeter_greet");

        global.install(&extension).unwrap();

        let result = global.call("greeter", "greet", vec![json!("cef")]).unwrap();
        assert_eq!(result, json!("hello cef"));
    }

    #[test]
    fn test_dispatch_of_undeclared_binding_fails() {
        let registry = BindingRegistry::new();

        let err = registry.dispatch("cef_emit", Vec::new()).unwrap_err();
        assert!(matches!(err, BridgeError::UnknownBinding(_)));
    }
}
