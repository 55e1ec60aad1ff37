//! Shared fixtures for unit tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tempfile::TempDir;

use fieldpreset_fields::{Catalog, CatalogDefaults, FieldDef, FieldKind, ModelDef, SelectOption};

use crate::context::PresetContext;
use crate::error::Result;
use crate::lookup::RecordLookup;

/// Catalog used across operation tests: a support-ticket platform.
pub(crate) fn ticket_defaults() -> CatalogDefaults {
    CatalogDefaults::new()
        .model(
            ModelDef::new("ticket")
                .with_label("Support Ticket")
                .field(FieldDef::new("title", FieldKind::Char))
                .field(FieldDef::new("notes", FieldKind::Text))
                .field(FieldDef::new(
                    "status",
                    FieldKind::Selection {
                        options: vec![
                            SelectOption::new("open"),
                            SelectOption::new("closed").with_label("Closed"),
                        ],
                    },
                ))
                .field(FieldDef::new("urgent", FieldKind::Boolean))
                .field(FieldDef::new("weight", FieldKind::Float))
                .field(FieldDef::new("total", FieldKind::Numeric))
                .field(FieldDef::new("opened", FieldKind::Date))
                .field(FieldDef::new("opened_at", FieldKind::DateTime))
                .field(FieldDef::new("alarm", FieldKind::Time))
                .field(FieldDef::new("escalations", FieldKind::Integer))
                .field(FieldDef::new(
                    "reporter",
                    FieldKind::Many2One {
                        relation: "partner".into(),
                    },
                ))
                .field(FieldDef::new("origin", FieldKind::Reference))
                .field(FieldDef::new("active", FieldKind::Boolean).with_default("True"))
                .field(FieldDef::new(
                    "age_days",
                    FieldKind::Computed {
                        derive: "days-since-open".into(),
                    },
                )),
        )
        .model(
            ModelDef::new("task")
                .field(FieldDef::new("title", FieldKind::Char))
                .field(FieldDef::new(
                    "priority",
                    FieldKind::Selection {
                        options: vec![SelectOption::new("low"), SelectOption::new("high")],
                    },
                )),
        )
        .model(ModelDef::new("partner").field(FieldDef::new("name", FieldKind::Char)))
}

/// Fixed record lookup for many2one enumeration tests.
pub(crate) struct StaticLookup {
    records: HashMap<String, Vec<(String, String)>>,
}

impl StaticLookup {
    pub(crate) fn new() -> Self {
        let mut records = HashMap::new();
        records.insert(
            "partner".to_string(),
            vec![
                ("01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(), "Acme".to_string()),
                ("01BX5ZZKBKACTAV9WEVGEMMVRZ".to_string(), "Globex".to_string()),
            ],
        );
        Self { records }
    }
}

#[async_trait]
impl RecordLookup for StaticLookup {
    async fn list_records(&self, model: &str) -> Result<Vec<(String, String)>> {
        Ok(self.records.get(model).cloned().unwrap_or_default())
    }
}

/// A seeded context in a fresh temp dir.
pub(crate) async fn setup() -> (TempDir, PresetContext) {
    let temp = TempDir::new().unwrap();
    let catalog = Catalog::open(temp.path().join("catalog"))
        .with_defaults(ticket_defaults())
        .build()
        .await
        .unwrap();
    let ctx = PresetContext::open(temp.path().join("registry"))
        .with_catalog(catalog)
        .with_lookup(Arc::new(StaticLookup::new()))
        .build()
        .await
        .unwrap();
    (temp, ctx)
}
