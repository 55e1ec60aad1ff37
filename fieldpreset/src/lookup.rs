//! Record lookup for many2one choice enumeration.

use async_trait::async_trait;

use crate::error::Result;

/// Enumerates existing records of a model as `(id, display name)` pairs.
///
/// The host platform implements this over its record store; the registry only
/// needs it to enumerate many2one choices, so the surface is a single method.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// Every record of the model, id as string plus human-readable name.
    async fn list_records(&self, model: &str) -> Result<Vec<(String, String)>>;
}
