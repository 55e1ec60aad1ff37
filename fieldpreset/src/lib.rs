//! Default-value registry with file-backed storage
//!
//! This crate lets an administrator persist a static default value for any
//! field of any data model, and have that default applied whenever a new
//! record of the target model is created. Entries are stored as YAML files
//! under a registry directory; installed defaults live in an explicit
//! per-model provider registry consulted by the host's create path.
//!
//! ## Overview
//!
//! - **One row per (model, field)** — the store enforces uniqueness on field
//! - **Text at rest** — every default is persisted as its string encoding;
//!   `TypedValue` carries the decoded form at runtime
//! - **Explicit providers** — no ambient process state; the provider registry
//!   is owned by the context and passed to the record-creation path
//! - **Startup re-hydration** — an idempotent pass re-installs providers for
//!   all persisted entries after a settling delay
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use fieldpreset::{default_value::SetDefault, Execute, PresetContext, TypedValue};
//! use fieldpreset_fields::Catalog;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::open("/path/to/catalog").build().await?;
//! let ctx = PresetContext::open("/path/to/registry")
//!     .with_catalog(catalog)
//!     .build()
//!     .await?;
//!
//! SetDefault::new("ticket", "status", TypedValue::Selection("open".into()))
//!     .execute(&ctx)
//!     .await?;
//!
//! // The host's create path consults the registry:
//! let _defaults = ctx.providers().defaults_for("ticket");
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! registry/
//! └── entries/
//!     └── {id}.yaml    # One DefaultValueEntry per file
//! ```

mod context;
mod error;
mod lookup;
mod operation;
mod providers;
pub mod rehydrate;
#[cfg(test)]
mod test_support;
pub mod types;
pub mod value;

// Command modules
pub mod choices;
pub mod default_value;

pub use context::{PresetContext, PresetContextBuilder};
pub use error::{PresetError, Result};
pub use lookup::RecordLookup;
pub use operation::Execute;
pub use providers::ProviderRegistry;
pub use rehydrate::{
    spawn_rehydration, spawn_rehydration_after, Rehydrate, RehydrateReport, SETTLING_DELAY,
};
pub use value::TypedValue;

// Re-export commonly used types
pub use types::{DefaultValueEntry, EntryId};
