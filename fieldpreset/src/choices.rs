//! ListChoices command
//!
//! Enumerates the candidate default values for a selection or many2one field
//! so a client can offer a picker before any entry exists. Recomputed on
//! every call, never cached.

use crate::context::PresetContext;
use crate::error::{PresetError, Result};
use crate::operation::Execute;
use async_trait::async_trait;
use fieldpreset_fields::FieldKind;
use serde::Deserialize;
use serde_json::Value;

/// Enumerate `(value, label)` choices for a selection or many2one field.
/// The first choice is always the empty "unset" option.
#[derive(Debug, Deserialize)]
pub struct ListChoices {
    /// Target model name
    pub model: String,
    /// Target field name
    pub field: String,
}

impl ListChoices {
    pub fn new(model: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            field: field.into(),
        }
    }
}

#[async_trait]
impl Execute<PresetContext, PresetError> for ListChoices {
    async fn execute(&self, ctx: &PresetContext) -> Result<Value> {
        let field_def = ctx.catalog().field(&self.model, &self.field)?;

        let mut choices: Vec<(String, String)> = vec![(String::new(), String::new())];
        match &field_def.kind {
            FieldKind::Selection { options } => {
                choices.extend(options.iter().map(|o| {
                    let label = o.label.clone().unwrap_or_else(|| o.value.clone());
                    (o.value.clone(), label)
                }));
            }
            FieldKind::Many2One { relation } => {
                choices.extend(ctx.lookup()?.list_records(relation).await?);
            }
            _ => {
                return Err(PresetError::NoChoices {
                    field: self.field.clone(),
                });
            }
        }

        // Keep first occurrence per value
        let mut seen = std::collections::HashSet::new();
        choices.retain(|(value, _)| seen.insert(value.clone()));

        Ok(serde_json::to_value(&choices)?)
    }
}
