//! Whole-file wishlist snapshots, reusable offline via --load.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{WishlistError, WishlistErrorCode};
use crate::wishlist::Wishlist;

/// Writes the raw wishlist as one compact JSON object, overwriting `path`.
pub fn save(wishlist: &Wishlist, path: &Path) -> Result<(), WishlistError> {
    let text = serde_json::to_string(wishlist.as_map()).map_err(|e| {
        WishlistError::new(
            WishlistErrorCode::Parse,
            format!("failed to serialize wishlist: {e}"),
        )
    })?;
    fs::write(path, text).map_err(|e| {
        WishlistError::new(
            WishlistErrorCode::Io,
            format!("failed to write {}: {e}", path.display()),
        )
    })
}

pub fn load(path: &Path) -> Result<Wishlist, WishlistError> {
    let text = fs::read_to_string(path).map_err(|e| {
        WishlistError::new(
            WishlistErrorCode::Io,
            format!("failed to read {}: {e}", path.display()),
        )
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|e| {
        WishlistError::new(
            WishlistErrorCode::Parse,
            format!("{} is not a valid wishlist snapshot: {e}", path.display()),
        )
    })?;
    Wishlist::from_value(value)
}
