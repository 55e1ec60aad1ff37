//! Model and field metadata catalog
//!
//! `fieldpreset-fields` is a standalone, schema-only crate that manages model
//! descriptors and their typed fields. It knows nothing about default values or
//! providers — consumers provide their own built-in models via `with_defaults()`.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns model and field descriptors, not field values
//! - **YAML on disk**: One `.yaml` file per model descriptor
//! - **Consumer-agnostic**: Takes a `Path`, consumers decide where it lives
//! - **Default seeding**: `with_defaults()` writes models that don't exist, preserves customizations

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{Catalog, CatalogBuilder, CatalogDefaults};
pub use error::{CatalogError, Result};
pub use types::{FieldDef, FieldKind, ModelDef, SelectOption};
