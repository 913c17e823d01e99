use log::info;
use serde_json::Value;

use crate::client::StoreClient;
use crate::error::{WishlistError, WishlistErrorCode};
use crate::wishlist::Wishlist;

const PRICE_URL_BASE: &str =
    "https://store.steampowered.com/api/appdetails/?filters=price_overview";

/// Marker field set on every price-checked entry, so a saved snapshot can
/// skip re-fetching on load.
pub const PRICE_CHECKED_FIELD: &str = "_price";

const BATCH_SIZE: usize = 100;

/// True when the wishlist already carries price data, judged by its first
/// entry. An empty wishlist reads as unpriced.
pub fn has_price_data(wishlist: &Wishlist) -> bool {
    wishlist
        .first_entry()
        .is_some_and(|fields| fields.contains_key(PRICE_CHECKED_FIELD))
}

/// Fetches current regional prices, 100 games per request, and merges the
/// `price_overview` fields into each entry in place. Entries the store
/// returns no price data for are still marked as checked. Existing fields
/// are never removed, only added or overwritten.
pub fn enrich_prices(
    client: &StoreClient,
    wishlist: &mut Wishlist,
    country: &str,
) -> Result<(), WishlistError> {
    let gameids = wishlist.gameids();
    for (index, batch) in gameids.chunks(BATCH_SIZE).enumerate() {
        info!("Fetching price information, batch {}", index + 1);
        let url = format!("{PRICE_URL_BASE}&cc={country}&appids={}", batch.join(","));
        let value = client.get_json(&url)?;
        let Value::Object(details) = value else {
            return Err(WishlistError::new(
                WishlistErrorCode::Parse,
                "price response is not a JSON object",
            ));
        };
        for (gameid, detail) in &details {
            let Some(fields) = wishlist.entry_mut(gameid) else {
                continue;
            };
            fields.insert(
                PRICE_CHECKED_FIELD.to_string(),
                Value::String("fetched".to_string()),
            );
            let overview = detail
                .get("data")
                .and_then(|data| data.get("price_overview"))
                .and_then(Value::as_object);
            if let Some(overview) = overview {
                for (key, price_value) in overview {
                    fields.insert(key.clone(), price_value.clone());
                }
            }
        }
    }
    Ok(())
}
