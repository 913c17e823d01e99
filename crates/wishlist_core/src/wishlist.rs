use serde_json::{Map, Value};

use crate::entry::Fields;
use crate::error::{WishlistError, WishlistErrorCode};

pub fn store_link(gameid: &str) -> String {
    format!("https://store.steampowered.com/app/{gameid}")
}

/// Insertion-ordered mapping gameid -> entry fields.
///
/// Invariant: every value is a JSON object; `merge` and `from_value`
/// reject anything else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Wishlist {
    entries: Map<String, Value>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a wishlist from a parsed snapshot or wishlist page.
    pub fn from_value(value: Value) -> Result<Self, WishlistError> {
        let Value::Object(entries) = value else {
            return Err(WishlistError::new(
                WishlistErrorCode::Parse,
                "wishlist data is not a JSON object",
            ));
        };
        let mut wishlist = Self::new();
        wishlist.merge(entries)?;
        Ok(wishlist)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges one page of entries. Duplicate gameids overwrite earlier
    /// ones; in practice keys do not repeat across pages.
    pub fn merge(&mut self, page: Map<String, Value>) -> Result<(), WishlistError> {
        for (gameid, fields) in page {
            if !fields.is_object() {
                return Err(WishlistError::new(
                    WishlistErrorCode::Parse,
                    format!("wishlist entry {gameid} is not a JSON object"),
                ));
            }
            self.entries.insert(gameid, fields);
        }
        Ok(())
    }

    pub fn insert(&mut self, gameid: impl Into<String>, fields: Fields) {
        self.entries.insert(gameid.into(), Value::Object(fields));
    }

    pub fn gameids(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn entry(&self, gameid: &str) -> Option<&Fields> {
        self.entries.get(gameid).and_then(Value::as_object)
    }

    pub fn entry_mut(&mut self, gameid: &str) -> Option<&mut Fields> {
        self.entries.get_mut(gameid).and_then(Value::as_object_mut)
    }

    pub fn first_entry(&self) -> Option<&Fields> {
        self.entries.values().next().and_then(Value::as_object)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fields)> {
        self.entries
            .iter()
            .filter_map(|(gameid, fields)| fields.as_object().map(|f| (gameid.as_str(), f)))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }
}
