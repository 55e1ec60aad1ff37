//! End-to-end flow: seed a catalog, persist defaults, restart, re-hydrate,
//! and apply installed defaults on record creation.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tempfile::TempDir;

use fieldpreset::{
    default_value::{DeleteDefault, SetDefault},
    spawn_rehydration_after, Execute, PresetContext, Rehydrate, TypedValue,
};
use fieldpreset_fields::{Catalog, CatalogDefaults, FieldDef, FieldKind, ModelDef, SelectOption};

fn platform_models() -> CatalogDefaults {
    CatalogDefaults::new()
        .model(
            ModelDef::new("ticket")
                .with_label("Support Ticket")
                .field(FieldDef::new("title", FieldKind::Char))
                .field(FieldDef::new(
                    "status",
                    FieldKind::Selection {
                        options: vec![
                            SelectOption::new("open"),
                            SelectOption::new("in_progress").with_label("In Progress"),
                            SelectOption::new("closed"),
                        ],
                    },
                ))
                .field(FieldDef::new("urgent", FieldKind::Boolean))
                .field(FieldDef::new("opened", FieldKind::Date)),
        )
        .model(
            ModelDef::new("task").field(FieldDef::new(
                "priority",
                FieldKind::Selection {
                    options: vec![SelectOption::new("low"), SelectOption::new("high")],
                },
            )),
        )
}

async fn open_context(temp: &TempDir) -> PresetContext {
    let catalog = Catalog::open(temp.path().join("catalog"))
        .with_defaults(platform_models())
        .build()
        .await
        .unwrap();
    PresetContext::open(temp.path().join("registry"))
        .with_catalog(catalog)
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn defaults_survive_restart_and_fill_new_records() {
    let temp = TempDir::new().unwrap();

    // An administrator configures defaults
    let ctx = open_context(&temp).await;
    SetDefault::new("ticket", "status", TypedValue::Selection("open".into()))
        .execute(&ctx)
        .await
        .unwrap();
    SetDefault::new("ticket", "urgent", TypedValue::Boolean(false))
        .execute(&ctx)
        .await
        .unwrap();

    // Process restarts: provider registry starts empty, the startup task
    // re-installs after the settling delay
    let restarted = Arc::new(open_context(&temp).await);
    assert!(restarted.providers().defaults_for("ticket").is_empty());

    spawn_rehydration_after(restarted.clone(), Duration::from_millis(20))
        .await
        .unwrap();

    let defaults = restarted.providers().defaults_for("ticket");
    assert_eq!(defaults.len(), 2);
    assert_eq!(
        defaults.get("status"),
        Some(&TypedValue::Selection("open".into()))
    );

    // The create path fills what the caller leaves out
    let record = restarted
        .providers()
        .apply_defaults("ticket", json!({"title": "Printer on fire"}));
    assert_eq!(record["status"], "open");
    assert_eq!(record["urgent"], false);
    assert_eq!(record["title"], "Printer on fire");
}

#[tokio::test]
async fn deleted_entry_is_not_rehydrated() {
    let temp = TempDir::new().unwrap();

    let ctx = open_context(&temp).await;
    let created = SetDefault::new("task", "priority", TypedValue::Selection("low".into()))
        .execute(&ctx)
        .await
        .unwrap();
    let id = created["id"].as_str().unwrap().parse().unwrap();
    DeleteDefault::new(id).execute(&ctx).await.unwrap();

    let restarted = open_context(&temp).await;
    let report = Rehydrate::new().run(&restarted).await.unwrap();

    assert_eq!(report.installed, 0);
    assert!(!restarted.providers().contains("task", "priority"));
}

#[tokio::test]
async fn one_bad_entry_does_not_block_the_rest() {
    let temp = TempDir::new().unwrap();

    let ctx = open_context(&temp).await;
    SetDefault::new("ticket", "status", TypedValue::Selection("open".into()))
        .execute(&ctx)
        .await
        .unwrap();
    // A stale row whose field no longer exists in the catalog
    let stale = fieldpreset::DefaultValueEntry::new("ticket", "severity", "3");
    ctx.write_entry(&stale).await.unwrap();

    let restarted = open_context(&temp).await;
    let report = Rehydrate::new().run(&restarted).await.unwrap();

    assert_eq!(report.installed, 1);
    assert_eq!(report.failed.len(), 1);
    assert!(restarted.providers().contains("ticket", "status"));
}
