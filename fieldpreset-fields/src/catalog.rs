//! Catalog — main API surface for the metadata catalog.
//!
//! Manages model descriptors as YAML files under a `models/` directory.
//! Provides an in-memory index for fast lookup by model name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;
use ulid::Ulid;

use crate::error::{CatalogError, Result};
use crate::types::{FieldDef, ModelDef};

/// A collection of default model descriptors.
///
/// Consumers build this to pass to `CatalogBuilder::with_defaults()`.
/// On open, models that don't already exist on disk are written.
pub struct CatalogDefaults {
    models: Vec<ModelDef>,
}

impl CatalogDefaults {
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Add a default model descriptor.
    pub fn model(mut self, def: ModelDef) -> Self {
        self.models.push(def);
        self
    }

    /// Access the model descriptors.
    pub fn models(&self) -> &[ModelDef] {
        &self.models
    }
}

impl Default for CatalogDefaults {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Catalog`. Created by `Catalog::open()`.
pub struct CatalogBuilder {
    root: PathBuf,
    defaults: Option<CatalogDefaults>,
}

impl CatalogBuilder {
    /// Provide default model descriptors. Defaults are seeded on first open;
    /// existing descriptors are preserved.
    pub fn with_defaults(mut self, defaults: CatalogDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Build the catalog: create directories, seed defaults, load from disk.
    pub async fn build(self) -> Result<Catalog> {
        let root = self.root;

        let models_dir = root.join("models");
        fs::create_dir_all(&models_dir).await?;

        // Seed defaults before loading (name-matched, existing files win)
        if let Some(defaults) = self.defaults {
            for def in defaults.models() {
                let path = models_dir.join(format!("{}.yaml", def.name));
                if !path.exists() {
                    let yaml = serde_yaml_ng::to_string(def)?;
                    atomic_write(&path, yaml.as_bytes()).await?;
                    debug!(name = %def.name, "seeded default model");
                }
            }
        }

        let mut catalog = Catalog {
            root,
            models: Vec::new(),
            name_index: HashMap::new(),
        };
        catalog.load_models().await?;

        debug!(models = catalog.models.len(), "catalog opened");

        Ok(catalog)
    }
}

/// The metadata catalog.
///
/// Owns a directory on disk with the structure:
/// ```text
/// catalog/
///   models/    ← one .yaml per model descriptor
/// ```
pub struct Catalog {
    root: PathBuf,
    models: Vec<ModelDef>,
    name_index: HashMap<String, usize>,
}

impl Catalog {
    /// Open or create a catalog directory. Returns a builder for optional configuration.
    pub fn open(root: impl Into<PathBuf>) -> CatalogBuilder {
        CatalogBuilder {
            root: root.into(),
            defaults: None,
        }
    }

    /// Get a model descriptor by name.
    pub fn model(&self, name: &str) -> Result<&ModelDef> {
        self.name_index
            .get(name)
            .map(|&i| &self.models[i])
            .ok_or_else(|| CatalogError::ModelNotFound { name: name.into() })
    }

    /// Get a field descriptor by model and field name.
    pub fn field(&self, model: &str, name: &str) -> Result<&FieldDef> {
        self.model(model)?
            .get_field(name)
            .ok_or_else(|| CatalogError::FieldNotFound {
                model: model.into(),
                name: name.into(),
            })
    }

    /// All model descriptors.
    pub fn all_models(&self) -> &[ModelDef] {
        &self.models
    }

    /// Fields of a model that may carry a registry default: supported kind,
    /// no programmatic default declared in the model.
    pub fn default_targets(&self, model: &str) -> Result<Vec<&FieldDef>> {
        Ok(self
            .model(model)?
            .fields
            .iter()
            .filter(|f| f.kind.is_default_target() && f.default.is_none())
            .collect())
    }

    /// Write (create or update) a model descriptor. Persists to YAML immediately.
    pub async fn write_model(&mut self, def: &ModelDef) -> Result<()> {
        let yaml = serde_yaml_ng::to_string(def)?;
        let path = self.model_path(&def.name);
        atomic_write(&path, yaml.as_bytes()).await?;

        if let Some(&idx) = self.name_index.get(&def.name) {
            self.models[idx] = def.clone();
        } else {
            let idx = self.models.len();
            self.models.push(def.clone());
            self.name_index.insert(def.name.clone(), idx);
        }

        Ok(())
    }

    /// The root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    // --- Internal ---

    fn model_path(&self, name: &str) -> PathBuf {
        self.root.join("models").join(format!("{name}.yaml"))
    }

    async fn load_models(&mut self) -> Result<()> {
        let models_dir = self.root.join("models");
        let mut entries = fs::read_dir(&models_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let content = fs::read_to_string(&path).await?;
            match serde_yaml_ng::from_str::<ModelDef>(&content) {
                Ok(def) => {
                    let idx = self.models.len();
                    self.name_index.insert(def.name.clone(), idx);
                    self.models.push(def);
                }
                Err(e) => {
                    tracing::warn!(?path, %e, "skipping invalid model descriptor");
                }
            }
        }
        Ok(())
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
