//! ListDefaults command

use crate::context::PresetContext;
use crate::error::{PresetError, Result};
use crate::operation::Execute;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// List entries, optionally filtered by model
#[derive(Debug, Default, Deserialize)]
pub struct ListDefaults {
    /// Restrict to one model
    pub model: Option<String>,
}

impl ListDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

#[async_trait]
impl Execute<PresetContext, PresetError> for ListDefaults {
    async fn execute(&self, ctx: &PresetContext) -> Result<Value> {
        let mut entries = ctx.list_entries().await?;
        if let Some(model) = &self.model {
            entries.retain(|e| &e.model == model);
        }
        Ok(serde_json::to_value(&entries)?)
    }
}
