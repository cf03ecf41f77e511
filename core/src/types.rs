//! The item record shared by the store and the HTTP layer.
//!
//! # Design
//! One type serves as both the stored record and the request payload. Both
//! fields default when absent, so `{"name":"x"}` and `{}` decode; a field of
//! the wrong JSON type is still a decode error. Unknown fields are ignored.
//! The capitalised spellings `ID`/`Id` and `Name`/`NAME` are accepted as
//! aliases; other case variants are treated as unknown fields.

use serde::{Deserialize, Serialize};

/// Identifier type for items. Assigned by the store on create.
pub type ItemId = i64;

/// A single item held in the collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Item {
    #[serde(alias = "ID", alias = "Id")]
    pub id: ItemId,
    #[serde(alias = "Name", alias = "NAME")]
    pub name: String,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
