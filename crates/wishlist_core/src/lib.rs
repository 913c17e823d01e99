pub mod client;
pub mod entry;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod lists;
pub mod prices;
pub mod snapshot;
pub mod wishlist;

pub use entry::Fields;
pub use error::{WishlistError, WishlistErrorCode};
pub use wishlist::Wishlist;
