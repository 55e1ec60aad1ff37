//! Core types for the default-value registry

mod entry;
mod ids;

pub use entry::DefaultValueEntry;
pub use ids::EntryId;
