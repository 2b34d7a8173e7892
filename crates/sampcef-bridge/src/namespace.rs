//! The scripting-visible namespace object.

use std::collections::HashMap;

use serde_json::Value;

/// One namespace entry: a bridge function delegating to a named native
/// binding, or a plain value.
#[derive(Clone, Debug, PartialEq)]
pub enum NamespaceEntry {
    /// Callable entry. Holds only the name of the native binding it
    /// forwards to; the handler lives in the binding registry.
    Bridge { native: String },
    /// Non-callable data entry.
    Value(Value),
}

/// Shared namespace object exposing bridge functions to other scripts.
///
/// Created at most once per global. Redefining an entry never touches the
/// other entries, so properties foreign scripts attach to the namespace
/// survive a reinstall of the extension that owns it.
#[derive(Debug)]
pub struct Namespace {
    name: String,
    entries: HashMap<String, NamespaceEntry>,
}

impl Namespace {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Define (or redefine) a bridge function entry.
    pub fn define_bridge(&mut self, entry: impl Into<String>, native: impl Into<String>) {
        self.define(
            entry,
            NamespaceEntry::Bridge {
                native: native.into(),
            },
        );
    }

    /// Define (or redefine) a plain value entry.
    pub fn set_value(&mut self, entry: impl Into<String>, value: Value) {
        self.define(entry, NamespaceEntry::Value(value));
    }

    pub(crate) fn define(&mut self, entry: impl Into<String>, definition: NamespaceEntry) {
        self.entries.insert(entry.into(), definition);
    }

    pub fn get(&self, entry: &str) -> Option<&NamespaceEntry> {
        self.entries.get(entry)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains_key(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_redefinition_leaves_other_entries_untouched() {
        let mut namespace = Namespace::new("samp_cef");
        namespace.define_bridge("emit", "cef_emit");
        namespace.set_value("custom", json!("kept"));

        namespace.define_bridge("emit", "cef_emit");

        assert_eq!(
            namespace.get("custom"),
            Some(&NamespaceEntry::Value(json!("kept")))
        );
        assert_eq!(
            namespace.get("emit"),
            Some(&NamespaceEntry::Bridge {
                native: "cef_emit".to_string()
            })
        );
        assert_eq!(namespace.len(), 2);
    }

    #[test]
    fn test_absent_entry_is_none() {
        let namespace = Namespace::new("samp_cef");

        assert!(namespace.get("emit").is_none());
        assert!(!namespace.contains("emit"));
        assert!(namespace.is_empty());
    }
}
