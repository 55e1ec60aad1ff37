//! UpdateDefault command

use crate::context::PresetContext;
use crate::error::{PresetError, Result};
use crate::operation::Execute;
use crate::types::EntryId;
use crate::value::TypedValue;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Replace the value of an existing entry. Model and field are immutable;
/// only the stored value changes, and the installed provider follows it.
#[derive(Debug, Deserialize)]
pub struct UpdateDefault {
    /// The entry to update
    pub id: EntryId,
    /// The new typed default; must match the field's kind
    pub value: TypedValue,
}

impl UpdateDefault {
    pub fn new(id: EntryId, value: TypedValue) -> Self {
        Self { id, value }
    }
}

#[async_trait]
impl Execute<PresetContext, PresetError> for UpdateDefault {
    async fn execute(&self, ctx: &PresetContext) -> Result<Value> {
        let mut entry = ctx.read_entry(&self.id).await?;
        let field_def = ctx.catalog().field(&entry.model, &entry.field)?;

        if !self.value.matches_kind(&field_def.kind) {
            return Err(PresetError::KindMismatch {
                field: entry.field.clone(),
                expected: field_def.kind.name().into(),
                got: self.value.kind_name().into(),
            });
        }

        entry.stored_value = self.value.encode();
        ctx.write_entry(&entry).await?;
        ctx.providers()
            .install(&entry.model, &entry.field, self.value.clone());

        Ok(serde_json::to_value(&entry)?)
    }
}
