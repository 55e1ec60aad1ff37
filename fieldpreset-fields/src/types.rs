//! Core descriptor types for the metadata catalog.
//!
//! All types serialize to/from YAML via serde. Field descriptors describe
//! named, typed attributes. Model descriptors are templates listing which
//! fields belong to a given model.

use serde::{Deserialize, Serialize};

/// A single option in a selection field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// The kind of a field — determines what shape its value takes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum FieldKind {
    #[serde(rename = "boolean")]
    Boolean,
    #[serde(rename = "char")]
    Char,
    #[serde(rename = "integer")]
    Integer,
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "numeric")]
    Numeric,
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    #[serde(rename = "time")]
    Time,
    /// Stores the id of a record of another model.
    #[serde(rename = "many2one")]
    Many2One { relation: String },
    #[serde(rename = "selection")]
    Selection { options: Vec<SelectOption> },
    #[serde(rename = "reference")]
    Reference,
    /// Read-only derived value — never a valid default target.
    #[serde(rename = "computed")]
    Computed { derive: String },
}

impl FieldKind {
    /// The kind tag as it appears on disk and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::Integer => "integer",
            Self::Text => "text",
            Self::Float => "float",
            Self::Numeric => "numeric",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Many2One { .. } => "many2one",
            Self::Selection { .. } => "selection",
            Self::Reference => "reference",
            Self::Computed { .. } => "computed",
        }
    }

    /// Whether fields of this kind may carry a registry default.
    pub fn is_default_target(&self) -> bool {
        !matches!(self, Self::Computed { .. })
    }
}

/// A field descriptor — the schema for a single named attribute of a model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Programmatic default declared in the model itself. Its presence blocks
    /// registry entries for this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            kind,
            default: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A model descriptor — a template declaring which fields belong to a model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl ModelDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            fields: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    /// Look up a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }
}
