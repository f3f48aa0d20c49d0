//! The shape contract shared by every stored entity type.

use std::fmt::Display;
use std::str::FromStr;

/// A record type served through the five-operation resource contract.
///
/// `TYPE_NAME` appears verbatim in not-found and deletion messages, so it
/// follows the external API vocabulary rather than the Rust type name.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Unique identifier: a natural string key or a surrogate numeric key.
    type Key: Clone + PartialEq + Display + FromStr + Send + Sync;

    /// Entity name used in error and confirmation messages.
    const TYPE_NAME: &'static str;

    /// Query parameter that carries the key on single-record routes.
    const KEY_PARAM: &'static str;

    /// The record's key.
    fn key(&self) -> Self::Key;

    /// Replace the record's key. Only the store calls this, when minting
    /// surrogate keys; a key is never reassigned after insert.
    fn set_key(&mut self, key: Self::Key);

    /// Overwrite every non-key field with the values from `incoming`.
    /// The key stays untouched regardless of what `incoming` carries.
    fn apply_update(&mut self, incoming: &Self);
}
