//! The per-model default-provider registry.
//!
//! Instead of mutating ambient per-model state, installed defaults live in an
//! explicit registry owned by the context: model name → ordered map of field
//! name → decoded [`TypedValue`]. The host's record-creation path consults
//! `defaults_for` (or `apply_defaults` for JSON records) when no explicit
//! value is supplied.
//!
//! Interior mutability keeps concurrent installs on disjoint fields safe;
//! two writes to the same field are last-write-wins.

use std::collections::HashMap;
use std::sync::RwLock;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::value::TypedValue;

/// Registry of installed defaults, keyed by model then field name.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    inner: RwLock<HashMap<String, IndexMap<String, TypedValue>>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the default for a field.
    pub fn install(&self, model: &str, field: &str, value: TypedValue) {
        let mut inner = self.inner.write().expect("provider registry poisoned");
        inner
            .entry(model.to_string())
            .or_default()
            .insert(field.to_string(), value);
        debug!(model, field, "installed default provider");
    }

    /// Remove the default for a field. Returns whether one was installed.
    pub fn remove(&self, model: &str, field: &str) -> bool {
        let mut inner = self.inner.write().expect("provider registry poisoned");
        let Some(fields) = inner.get_mut(model) else {
            return false;
        };
        let removed = fields.shift_remove(field).is_some();
        if fields.is_empty() {
            inner.remove(model);
        }
        if removed {
            debug!(model, field, "removed default provider");
        }
        removed
    }

    /// Whether a default is installed for a field.
    pub fn contains(&self, model: &str, field: &str) -> bool {
        self.inner
            .read()
            .expect("provider registry poisoned")
            .get(model)
            .is_some_and(|fields| fields.contains_key(field))
    }

    /// The installed default for a single field.
    pub fn get(&self, model: &str, field: &str) -> Option<TypedValue> {
        self.inner
            .read()
            .expect("provider registry poisoned")
            .get(model)
            .and_then(|fields| fields.get(field).cloned())
    }

    /// All installed defaults for a model, in installation order.
    pub fn defaults_for(&self, model: &str) -> IndexMap<String, TypedValue> {
        self.inner
            .read()
            .expect("provider registry poisoned")
            .get(model)
            .cloned()
            .unwrap_or_default()
    }

    /// Fill absent fields of a JSON record with the model's installed
    /// defaults. Explicitly supplied values (including null) are kept.
    pub fn apply_defaults(&self, model: &str, mut record: Value) -> Value {
        let defaults = self.defaults_for(model);
        if defaults.is_empty() {
            return record;
        }
        if let Value::Object(map) = &mut record {
            for (field, value) in defaults {
                if !map.contains_key(&field) {
                    map.insert(field, value.to_json());
                }
            }
        }
        record
    }
}
