//! DeleteDefault command

use crate::context::PresetContext;
use crate::error::{PresetError, Result};
use crate::operation::Execute;
use crate::types::EntryId;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Delete an entry and uninstall its provider
#[derive(Debug, Deserialize)]
pub struct DeleteDefault {
    /// The entry to delete
    pub id: EntryId,
}

impl DeleteDefault {
    pub fn new(id: EntryId) -> Self {
        Self { id }
    }
}

#[async_trait]
impl Execute<PresetContext, PresetError> for DeleteDefault {
    async fn execute(&self, ctx: &PresetContext) -> Result<Value> {
        let entry = ctx.read_entry(&self.id).await?;

        ctx.delete_entry(&self.id).await?;
        ctx.providers().remove(&entry.model, &entry.field);

        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id.to_string()
        }))
    }
}
