//! The `Execute` trait for registry operations.
//!
//! Operations are structs where the fields are the parameters. Each executes
//! against a context and returns a JSON value for the host's generic
//! operation surface.

use async_trait::async_trait;
use serde_json::Value;

/// An executable operation against a context of type `C`.
#[async_trait]
pub trait Execute<C, E> {
    async fn execute(&self, ctx: &C) -> std::result::Result<Value, E>;
}
