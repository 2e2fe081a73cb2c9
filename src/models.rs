//! Frontend Models
//!
//! Data structures matching the persisted and remote todo shape.

use serde::{Deserialize, Serialize};

/// A single todo entry
///
/// Field names match the seed endpoint's JSON objects; extra fields
/// from the remote source are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}
