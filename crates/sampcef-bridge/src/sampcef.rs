//! The `samp_cef` extension: three bridge functions over the `cef_*`
//! native bindings of the game client's browser-engine layer.
//!
//! The bridge performs no work of its own. Each namespace function binds
//! one native capability and forwards its argument verbatim; whatever the
//! host returns, value or error, travels back to the caller unchanged.

use std::sync::Arc;

use serde_json::{Value, json};

use crate::config::BridgeConfig;
use crate::error::BridgeResult;
use crate::extension::Extension;
use crate::global::ScriptGlobal;
use crate::native::{NativeResult, native_fn};

/// Namespace other scripts reach the bridge through.
pub const NAMESPACE: &str = "samp_cef";

/// Native binding behind `samp_cef.emit`.
pub const NATIVE_EMIT: &str = "cef_emit";
/// Native binding behind `samp_cef.on`.
pub const NATIVE_ON: &str = "cef_on";
/// Native binding behind `samp_cef.show_cursor`.
pub const NATIVE_SHOW_CURSOR: &str = "cef_show_cursor";

/// Extension source for engines that consume raw extension JavaScript.
pub const SHIM_JS: &str = include_str!("../assets/extension.js");

/// Native capabilities the game client supplies behind the bridge.
///
/// The bridge assumes nothing about the semantics of these calls. In
/// particular, whether [`on`](CefHost::on) treats its descriptor as an
/// event name to subscribe to or a callback-bearing registration is the
/// host's contract. Validation of argument shapes, if any, also happens
/// here and not in the bridge.
pub trait CefHost: Send + Sync {
    /// Receives the event descriptor passed to `samp_cef.emit`.
    fn emit(&self, event: Value) -> NativeResult;

    /// Receives the event descriptor passed to `samp_cef.on`.
    fn on(&self, event: Value) -> NativeResult;

    /// Receives the flag passed to `samp_cef.show_cursor`.
    fn show_cursor(&self, show: Value) -> NativeResult;
}

/// Build the `samp_cef` extension over `host` with default settings.
pub fn create_samp_cef_extension(host: Arc<dyn CefHost>) -> Extension {
    create_samp_cef_extension_with(host, &BridgeConfig::default())
}

/// Build the `samp_cef` extension over `host`.
pub fn create_samp_cef_extension_with(host: Arc<dyn CefHost>, config: &BridgeConfig) -> Extension {
    let emit_host = host.clone();
    let on_host = host.clone();
    let cursor_host = host;

    let mut extension = Extension::new(&config.namespace)
        .with_natives(vec![
            native_fn(NATIVE_EMIT, move |_cx, args| emit_host.emit(single(args))),
            native_fn(NATIVE_ON, move |_cx, args| on_host.on(single(args))),
            native_fn(NATIVE_SHOW_CURSOR, move |_cx, args| {
                cursor_host.show_cursor(single(args))
            }),
        ])
        .bridge("emit", NATIVE_EMIT)
        .bridge("on", NATIVE_ON)
        .bridge("show_cursor", NATIVE_SHOW_CURSOR)
        .with_shim_js(SHIM_JS);

    if config.expose_version {
        extension = extension.value("version", json!(env!("CARGO_PKG_VERSION")));
    }

    extension
}

/// Install the `samp_cef` extension into `global`, using its config.
pub fn install(global: &mut ScriptGlobal, host: Arc<dyn CefHost>) -> BridgeResult<()> {
    let extension = create_samp_cef_extension_with(host, global.config());
    global.install(&extension)
}

// Bridge functions take one parameter. A missing argument forwards null
// and extras are dropped.
fn single(mut args: Vec<Value>) -> Value {
    if args.is_empty() {
        Value::Null
    } else {
        args.swap_remove(0)
    }
}
