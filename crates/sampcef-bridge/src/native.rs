//! The imported-function interface between the scripting namespace and the
//! host runtime.
//!
//! Each capability the host exposes is declared as a [`NativeDecl`]: a
//! binding name the scripting side can reference plus the handler that
//! implements it. Handlers are synchronous and receive their arguments as
//! opaque JSON values, forwarded verbatim.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use crate::error::BridgeResult;

/// Result of one native call. The value is opaque to the bridge.
pub type NativeResult = BridgeResult<Value>;

type NativeHandler = Arc<dyn Fn(HostContext, Vec<Value>) -> NativeResult + Send + Sync>;

/// Type-keyed state shared with native handlers.
///
/// Lets the embedder hand its own state to handlers without ambient
/// globals: values are stored by type and fetched back by type.
#[derive(Clone, Default)]
pub struct HostState {
    inner: Arc<Mutex<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>>,
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put<T: Any + Send + Sync>(&self, value: T) {
        let mut map = self.inner.lock();
        map.insert(TypeId::of::<T>(), Arc::new(value));
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        let map = self.inner.lock();
        map.get(&TypeId::of::<T>())
            .and_then(|value| value.clone().downcast::<T>().ok())
    }
}

/// Per-call context handed to native handlers.
#[derive(Clone)]
pub struct HostContext {
    state: HostState,
}

impl HostContext {
    pub(crate) fn new(state: HostState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> HostState {
        self.state.clone()
    }
}

/// Declaration of one native capability.
#[derive(Clone)]
pub struct NativeDecl {
    name: String,
    handler: NativeHandler,
}

impl NativeDecl {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn invoke(&self, cx: HostContext, args: Vec<Value>) -> NativeResult {
        (self.handler)(cx, args)
    }
}

impl fmt::Debug for NativeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeDecl")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Declare a synchronous native binding.
pub fn native_fn<F>(name: &str, handler: F) -> NativeDecl
where
    F: Fn(HostContext, Vec<Value>) -> NativeResult + Send + Sync + 'static,
{
    NativeDecl {
        name: name.to_string(),
        handler: Arc::new(handler),
    }
}
