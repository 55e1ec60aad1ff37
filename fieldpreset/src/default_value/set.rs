//! SetDefault command

use crate::context::PresetContext;
use crate::error::{PresetError, Result};
use crate::operation::Execute;
use crate::types::DefaultValueEntry;
use crate::value::TypedValue;
use async_trait::async_trait;
use fieldpreset_fields::FieldKind;
use serde::Deserialize;
use serde_json::Value;

/// Create a default value entry for a (model, field) pair
#[derive(Debug, Deserialize)]
pub struct SetDefault {
    /// Target model name
    pub model: String,
    /// Target field name
    pub field: String,
    /// The typed default; must match the field's kind
    pub value: TypedValue,
}

impl SetDefault {
    pub fn new(
        model: impl Into<String>,
        field: impl Into<String>,
        value: TypedValue,
    ) -> Self {
        Self {
            model: model.into(),
            field: field.into(),
            value,
        }
    }
}

#[async_trait]
impl Execute<PresetContext, PresetError> for SetDefault {
    async fn execute(&self, ctx: &PresetContext) -> Result<Value> {
        let field_def = ctx.catalog().field(&self.model, &self.field)?;

        // The model itself already defaults this field
        if field_def.default.is_some() {
            return Err(PresetError::FieldHasDefault {
                field: self.field.clone(),
            });
        }

        // Computed fields never take a stored default
        if matches!(field_def.kind, FieldKind::Computed { .. }) {
            return Err(PresetError::FieldIsFunctional {
                field: self.field.clone(),
            });
        }

        // Store-level uniqueness: at most one entry per field
        if ctx
            .find_entry_for_field(&self.model, &self.field)
            .await?
            .is_some()
        {
            return Err(PresetError::DuplicateEntry {
                model: self.model.clone(),
                field: self.field.clone(),
            });
        }

        if !self.value.matches_kind(&field_def.kind) {
            return Err(PresetError::KindMismatch {
                field: self.field.clone(),
                expected: field_def.kind.name().into(),
                got: self.value.kind_name().into(),
            });
        }

        let entry = DefaultValueEntry::new(&self.model, &self.field, self.value.encode());
        ctx.write_entry(&entry).await?;
        ctx.providers()
            .install(&self.model, &self.field, self.value.clone());

        Ok(serde_json::to_value(&entry)?)
    }
}
