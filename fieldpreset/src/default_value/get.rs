//! GetDefault command

use crate::context::PresetContext;
use crate::error::{PresetError, Result};
use crate::operation::Execute;
use crate::types::EntryId;
use crate::value::TypedValue;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Fetch an entry along with its decoded typed value and field kind
#[derive(Debug, Deserialize)]
pub struct GetDefault {
    /// The entry to fetch
    pub id: EntryId,
}

impl GetDefault {
    pub fn new(id: EntryId) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Execute<PresetContext, PresetError> for GetDefault {
    async fn execute(&self, ctx: &PresetContext) -> Result<Value> {
        let entry = ctx.read_entry(&self.id).await?;
        let field_def = ctx.catalog().field(&entry.model, &entry.field)?;

        let decoded = TypedValue::decode(&field_def.kind, &entry.stored_value)
            .map_err(|e| PresetError::invalid_value(&entry.field, e.to_string()))?;

        let mut result = serde_json::to_value(&entry)?;
        if let Value::Object(map) = &mut result {
            map.insert("field_type".into(), Value::String(field_def.kind.name().into()));
            map.insert(
                "value".into(),
                decoded.map(|v| v.to_json()).unwrap_or(Value::Null),
            );
        }
        Ok(result)
    }
}
