//! The persisted registry row

use super::ids::EntryId;
use serde::{Deserialize, Serialize};

/// One default value entry: a (model, field) pair and its stored text encoding.
///
/// `model` and `field` are fixed at creation; updates touch only
/// `stored_value`. The string encoding is governed by the codec in
/// [`crate::value`] and is keyed on the field's kind in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultValueEntry {
    pub id: EntryId,
    /// Target model name
    pub model: String,
    /// Target field name within the model
    pub field: String,
    /// The default, always persisted as text regardless of semantic type
    pub stored_value: String,
}

impl DefaultValueEntry {
    pub fn new(
        model: impl Into<String>,
        field: impl Into<String>,
        stored_value: impl Into<String>,
    ) -> Self {
        Self {
            id: EntryId::new(),
            model: model.into(),
            field: field.into(),
            stored_value: stored_value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_round_trip() {
        let entry = DefaultValueEntry::new("ticket", "status", "open");
        let yaml = serde_yaml_ng::to_string(&entry).unwrap();
        let parsed: DefaultValueEntry = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(entry, parsed);
    }

    #[test]
    fn stored_value_is_text() {
        let entry = DefaultValueEntry::new("task", "active", "True");
        let yaml = serde_yaml_ng::to_string(&entry).unwrap();
        assert!(yaml.contains("stored_value:"));
    }
}
