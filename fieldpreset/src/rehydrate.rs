//! Startup re-hydration of installed providers.
//!
//! The provider registry lives in process memory and does not survive
//! restarts, so on startup every persisted entry is re-installed. The pass is
//! idempotent and collects per-entry failures into a report for the host's
//! startup diagnostics instead of aborting on the first bad entry.
//!
//! `spawn_rehydration` wraps the pass in a detached task that first waits a
//! settling delay so the rest of the platform can finish initializing. A
//! failed pass is logged and swallowed; operators retry by restarting the
//! process.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::context::PresetContext;
use crate::error::{PresetError, Result};
use crate::operation::Execute;
use crate::value::TypedValue;

/// Default settling delay before the startup pass runs.
pub const SETTLING_DELAY: Duration = Duration::from_secs(5);

/// Outcome of one re-hydration pass.
#[derive(Debug, Default, Serialize)]
pub struct RehydrateReport {
    /// Providers installed
    pub installed: usize,
    /// Entries skipped: deleted mid-pass, or an empty temporal value
    pub skipped: Vec<String>,
    /// Entries that could not be installed, with the reason
    pub failed: Vec<(String, String)>,
}

/// Re-install providers for every persisted entry
#[derive(Debug, Default, Deserialize)]
pub struct Rehydrate;

impl Rehydrate {
    pub fn new() -> Self {
        Self
    }

    /// Run the pass and return the structured report.
    pub async fn run(&self, ctx: &PresetContext) -> Result<RehydrateReport> {
        let mut report = RehydrateReport::default();

        for id in ctx.list_entry_ids().await? {
            let entry = match ctx.read_entry(&id).await {
                Ok(entry) => entry,
                Err(PresetError::EntryNotFound { .. }) => {
                    report.skipped.push(id.to_string());
                    continue;
                }
                // A corrupt or unreadable file must not block the rest
                Err(e) => {
                    report.failed.push((id.to_string(), e.to_string()));
                    continue;
                }
            };

            let field_def = match ctx.catalog().field(&entry.model, &entry.field) {
                Ok(def) => def,
                Err(e) => {
                    report.failed.push((id.to_string(), e.to_string()));
                    continue;
                }
            };

            let decoded = match TypedValue::decode(&field_def.kind, &entry.stored_value) {
                Ok(Some(value)) => value,
                Ok(None) => {
                    // empty temporal sentinel: nothing to install
                    report.skipped.push(id.to_string());
                    continue;
                }
                Err(e) => {
                    report.failed.push((id.to_string(), e.to_string()));
                    continue;
                }
            };

            // A delete that lands between the scan and this point wins over
            // the pending install.
            if !ctx.entry_exists(&id) {
                report.skipped.push(id.to_string());
                continue;
            }
            ctx.providers().install(&entry.model, &entry.field, decoded);
            report.installed += 1;
        }

        debug!(
            installed = report.installed,
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "re-hydrated default providers"
        );
        Ok(report)
    }
}

#[async_trait]
impl Execute<PresetContext, PresetError> for Rehydrate {
    async fn execute(&self, ctx: &PresetContext) -> Result<Value> {
        let report = self.run(ctx).await?;
        Ok(serde_json::to_value(&report)?)
    }
}

/// Detached startup task: wait out [`SETTLING_DELAY`], then re-hydrate.
/// Failures are logged and swallowed — startup must not crash.
pub fn spawn_rehydration(ctx: Arc<PresetContext>) -> JoinHandle<()> {
    spawn_rehydration_after(ctx, SETTLING_DELAY)
}

/// Like [`spawn_rehydration`] with an explicit settling delay.
pub fn spawn_rehydration_after(ctx: Arc<PresetContext>, settling_delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(settling_delay).await;
        match Rehydrate::new().run(&ctx).await {
            Ok(report) => {
                if !report.failed.is_empty() {
                    warn!(
                        failed = report.failed.len(),
                        "some default values could not be re-installed; \
                         restart the server to retry"
                    );
                }
            }
            Err(e) => {
                warn!(%e, "error loading default values; restart the server to retry");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_value::SetDefault;
    use crate::test_support::{setup, ticket_defaults, StaticLookup};
    use fieldpreset_fields::Catalog;
    use tempfile::TempDir;

    /// Reopen a context over the same directories, as a process restart would.
    async fn reopen(temp: &TempDir) -> PresetContext {
        let catalog = Catalog::open(temp.path().join("catalog"))
            .with_defaults(ticket_defaults())
            .build()
            .await
            .unwrap();
        PresetContext::open(temp.path().join("registry"))
            .with_catalog(catalog)
            .with_lookup(Arc::new(StaticLookup::new()))
            .build()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn rehydrate_installs_persisted_entries() {
        let (temp, ctx) = setup().await;
        SetDefault::new("ticket", "status", TypedValue::Selection("open".into()))
            .execute(&ctx)
            .await
            .unwrap();

        // Fresh process: empty provider registry
        let restarted = reopen(&temp).await;
        assert!(!restarted.providers().contains("ticket", "status"));

        let report = Rehydrate::new().run(&restarted).await.unwrap();
        assert_eq!(report.installed, 1);
        assert_eq!(
            restarted.providers().get("ticket", "status"),
            Some(TypedValue::Selection("open".into()))
        );
    }

    #[tokio::test]
    async fn rehydrate_is_idempotent() {
        let (temp, ctx) = setup().await;
        SetDefault::new("ticket", "urgent", TypedValue::Boolean(true))
            .execute(&ctx)
            .await
            .unwrap();

        let restarted = reopen(&temp).await;
        Rehydrate::new().run(&restarted).await.unwrap();
        let report = Rehydrate::new().run(&restarted).await.unwrap();

        assert_eq!(report.installed, 1);
        assert_eq!(restarted.providers().defaults_for("ticket").len(), 1);
    }

    #[tokio::test]
    async fn rehydrate_reports_undecodable_entries() {
        let (temp, ctx) = setup().await;
        // Corrupt a stored value behind the registry's back
        let entry = crate::types::DefaultValueEntry::new("ticket", "opened", "not-a-date");
        ctx.write_entry(&entry).await.unwrap();

        let restarted = reopen(&temp).await;
        let report = Rehydrate::new().run(&restarted).await.unwrap();

        assert_eq!(report.installed, 0);
        assert_eq!(report.failed.len(), 1);
        assert!(!restarted.providers().contains("ticket", "opened"));
    }

    #[tokio::test]
    async fn corrupt_entry_file_does_not_abort_the_pass() {
        let (temp, ctx) = setup().await;
        SetDefault::new("ticket", "status", TypedValue::Selection("open".into()))
            .execute(&ctx)
            .await
            .unwrap();
        // Garbage beside a healthy entry
        let stray = ctx
            .entries_dir()
            .join(format!("{}.yaml", crate::types::EntryId::new()));
        std::fs::write(stray, "did not find: [expected key").unwrap();

        let restarted = reopen(&temp).await;
        let report = Rehydrate::new().run(&restarted).await.unwrap();

        assert_eq!(report.installed, 1);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(
            restarted.providers().get("ticket", "status"),
            Some(TypedValue::Selection("open".into()))
        );
    }

    #[tokio::test]
    async fn rehydrate_reports_entries_for_missing_fields() {
        let (temp, ctx) = setup().await;
        let entry = crate::types::DefaultValueEntry::new("ticket", "vanished", "x");
        ctx.write_entry(&entry).await.unwrap();

        let restarted = reopen(&temp).await;
        let report = Rehydrate::new().run(&restarted).await.unwrap();

        assert_eq!(report.failed.len(), 1);
    }

    #[tokio::test]
    async fn spawned_task_installs_after_settling_delay() {
        let (temp, ctx) = setup().await;
        SetDefault::new("ticket", "status", TypedValue::Selection("open".into()))
            .execute(&ctx)
            .await
            .unwrap();

        let restarted = Arc::new(reopen(&temp).await);
        let handle = spawn_rehydration_after(restarted.clone(), Duration::from_millis(10));
        handle.await.unwrap();

        assert_eq!(
            restarted.providers().get("ticket", "status"),
            Some(TypedValue::Selection("open".into()))
        );
    }
}
