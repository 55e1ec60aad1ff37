//! PresetContext - I/O primitives for registry storage
//!
//! The context provides access to storage and collaborators. No business
//! logic methods, just data access primitives. Operations do all the work.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::fs;
use tracing::debug;
use ulid::Ulid;

use fieldpreset_fields::Catalog;

use crate::error::{PresetError, Result};
use crate::lookup::RecordLookup;
use crate::providers::ProviderRegistry;
use crate::types::{DefaultValueEntry, EntryId};

/// Builder for `PresetContext`. Created by `PresetContext::open()`.
pub struct PresetContextBuilder {
    root: PathBuf,
    catalog: Option<Catalog>,
    lookup: Option<Arc<dyn RecordLookup>>,
}

impl PresetContextBuilder {
    /// Provide the metadata catalog the registry validates against.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Provide a record lookup for many2one choice enumeration.
    pub fn with_lookup(mut self, lookup: Arc<dyn RecordLookup>) -> Self {
        self.lookup = Some(lookup);
        self
    }

    /// Build the context: create directories, open the catalog if none was
    /// supplied (under `catalog/` beneath the root).
    pub async fn build(self) -> Result<PresetContext> {
        let root = self.root;
        fs::create_dir_all(root.join("entries")).await?;

        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Catalog::open(root.join("catalog")).build().await?,
        };

        debug!(root = %root.display(), "registry context opened");

        Ok(PresetContext {
            root,
            catalog,
            providers: ProviderRegistry::new(),
            lookup: self.lookup,
        })
    }
}

/// Context passed to every operation - provides access, not logic
pub struct PresetContext {
    /// Path to the registry directory
    root: PathBuf,
    catalog: Catalog,
    providers: ProviderRegistry,
    lookup: Option<Arc<dyn RecordLookup>>,
}

impl PresetContext {
    /// Open or create a registry directory. Returns a builder for configuration.
    pub fn open(root: impl Into<PathBuf>) -> PresetContextBuilder {
        PresetContextBuilder {
            root: root.into(),
            catalog: None,
            lookup: None,
        }
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// The metadata catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The installed default providers.
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// The record lookup, if configured.
    pub fn lookup(&self) -> Result<&dyn RecordLookup> {
        self.lookup.as_deref().ok_or(PresetError::NoLookup)
    }

    // =========================================================================
    // Path helpers
    // =========================================================================

    /// Get the registry root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path to the entries directory
    pub fn entries_dir(&self) -> PathBuf {
        self.root.join("entries")
    }

    /// Path to an entry's YAML file
    pub fn entry_path(&self, id: &EntryId) -> PathBuf {
        self.entries_dir().join(format!("{id}.yaml"))
    }

    // =========================================================================
    // Entry I/O
    // =========================================================================

    /// Whether an entry file exists
    pub fn entry_exists(&self, id: &EntryId) -> bool {
        self.entry_path(id).exists()
    }

    /// Read an entry file
    pub async fn read_entry(&self, id: &EntryId) -> Result<DefaultValueEntry> {
        let path = self.entry_path(id);
        if !path.exists() {
            return Err(PresetError::EntryNotFound { id: id.to_string() });
        }
        let content = fs::read_to_string(&path).await?;
        let entry: DefaultValueEntry = serde_yaml_ng::from_str(&content)?;
        Ok(entry)
    }

    /// Write an entry file (atomic write via temp file)
    pub async fn write_entry(&self, entry: &DefaultValueEntry) -> Result<()> {
        let path = self.entry_path(&entry.id);
        let content = serde_yaml_ng::to_string(entry)?;
        atomic_write(&path, content.as_bytes()).await
    }

    /// Delete an entry file
    pub async fn delete_entry(&self, id: &EntryId) -> Result<()> {
        let path = self.entry_path(id);
        if !path.exists() {
            return Err(PresetError::EntryNotFound { id: id.to_string() });
        }
        fs::remove_file(&path).await?;
        Ok(())
    }

    /// List all entry ids
    pub async fn list_entry_ids(&self) -> Result<Vec<EntryId>> {
        let mut ids = Vec::new();
        let mut dir = fs::read_dir(self.entries_dir()).await?;
        while let Some(item) = dir.next_entry().await? {
            let path = item.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if let Ok(id) = stem.parse::<EntryId>() {
                    ids.push(id);
                }
            }
        }
        ids.sort_by_key(|id| id.to_string());
        Ok(ids)
    }

    /// Read all entries
    pub async fn list_entries(&self) -> Result<Vec<DefaultValueEntry>> {
        let mut entries = Vec::new();
        for id in self.list_entry_ids().await? {
            entries.push(self.read_entry(&id).await?);
        }
        Ok(entries)
    }

    /// Find the entry targeting a (model, field) pair, if any.
    ///
    /// The store holds at most one — this scan is also what enforces the
    /// uniqueness rule on create.
    pub async fn find_entry_for_field(
        &self,
        model: &str,
        field: &str,
    ) -> Result<Option<DefaultValueEntry>> {
        for id in self.list_entry_ids().await? {
            let entry = self.read_entry(&id).await?;
            if entry.model == model && entry.field == field {
                return Ok(Some(entry));
            }
        }
        Ok(None)
    }
}

/// Write to a temp file then rename for atomic persistence.
async fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidInput, "no parent dir"))?;
    let tmp = dir.join(format!(".tmp_{}", Ulid::new()));
    fs::write(&tmp, data).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
