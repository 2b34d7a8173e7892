//! sampcef-bridge - scripting namespace bridge for an embedded browser
//! engine in a game client.
//!
//! Scripts running in the embedded engine talk to the client through the
//! `samp_cef` namespace. Each namespace function is a pass-through: it
//! binds one native capability (`cef_emit`, `cef_on`, `cef_show_cursor`)
//! and forwards its argument and result verbatim. The behavior behind
//! those capabilities lives in the host; the bridge only establishes the
//! naming contract between the two sides.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use serde_json::{Value, json};
//! use sampcef_bridge::{CefHost, NativeResult, ScriptGlobal, sampcef};
//!
//! struct Client;
//!
//! impl CefHost for Client {
//!     fn emit(&self, _event: Value) -> NativeResult {
//!         Ok(Value::Null)
//!     }
//!
//!     fn on(&self, _event: Value) -> NativeResult {
//!         Ok(Value::Null)
//!     }
//!
//!     fn show_cursor(&self, _show: Value) -> NativeResult {
//!         Ok(Value::Null)
//!     }
//! }
//!
//! let mut global = ScriptGlobal::new();
//! sampcef::install(&mut global, Arc::new(Client)).unwrap();
//!
//! let result = global.call("samp_cef", "emit", vec![json!("ready")]).unwrap();
//! assert_eq!(result, Value::Null);
//! ```

pub mod config;
pub mod error;
pub mod extension;
pub mod global;
pub mod namespace;
pub mod native;
pub mod sampcef;

pub use config::BridgeConfig;
pub use error::{BridgeError, BridgeResult};
pub use extension::{BindingRegistry, Extension, ExtensionInitFn};
pub use global::ScriptGlobal;
pub use namespace::{Namespace, NamespaceEntry};
pub use native::{HostContext, HostState, NativeDecl, NativeResult, native_fn};
pub use sampcef::{
    CefHost, NAMESPACE, SHIM_JS, create_samp_cef_extension, create_samp_cef_extension_with,
    install,
};

pub mod prelude {
    pub use crate::config::BridgeConfig;
    pub use crate::error::{BridgeError, BridgeResult};
    pub use crate::extension::{BindingRegistry, Extension};
    pub use crate::global::ScriptGlobal;
    pub use crate::namespace::{Namespace, NamespaceEntry};
    pub use crate::native::{HostContext, HostState, NativeDecl, NativeResult, native_fn};
    pub use crate::sampcef::{
        CefHost, create_samp_cef_extension, create_samp_cef_extension_with, install,
    };
}
