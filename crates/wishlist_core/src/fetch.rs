use log::info;
use serde_json::Value;

use crate::client::StoreClient;
use crate::error::{WishlistError, WishlistErrorCode};
use crate::wishlist::Wishlist;

const WISHLIST_URL_BASE: &str = "https://store.steampowered.com/wishlist/profiles";

/// Downloads every wishlist page for `userid`, merging them into one
/// wishlist. Pagination stops at the first page that is not a non-empty
/// JSON object. Any HTTP failure is fatal and carries a hint at the
/// likely cause: an invalid cookie when one was supplied, a private
/// wishlist otherwise.
pub fn fetch_wishlist(client: &StoreClient, userid: &str) -> Result<Wishlist, WishlistError> {
    let mut wishlist = Wishlist::new();
    let mut page: u32 = 0;
    loop {
        info!("Fetching wishlist page {}", page + 1);
        let url = format!("{WISHLIST_URL_BASE}/{userid}/wishlistdata/?p={page}");
        let value = match client.get_json_with_session(&url) {
            Ok(value) => value,
            Err(e) if e.code == WishlistErrorCode::Http => {
                let hint = if client.has_session_cookie() {
                    "Is the provided cookie invalid or expired?"
                } else {
                    "Is the wishlist private?"
                };
                return Err(WishlistError::new(
                    e.code,
                    format!("Could not get wishlist. {hint} ({})", e.message),
                ));
            }
            Err(e) => return Err(e),
        };
        match value {
            Value::Object(entries) if !entries.is_empty() => wishlist.merge(entries)?,
            _ => break,
        }
        page += 1;
    }
    Ok(wishlist)
}
