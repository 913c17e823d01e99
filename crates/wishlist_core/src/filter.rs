//! The filter chain. Each requested test must pass for an entry to
//! survive; tests that were not requested pass vacuously.

use crate::entry::{Fields, flag_field, int_field, str_field, string_items};
use crate::lists::FilterList;
use crate::wishlist::Wishlist;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub platforms: Vec<String>,
    pub types: Vec<String>,
    pub free: bool,
    pub no_free: bool,
    pub released: bool,
    pub no_released: bool,
    pub early: bool,
    pub no_early: bool,
    pub tags: Vec<String>,
    pub discount: Option<i64>,
    pub price: Option<i64>,
    pub deck: Option<i64>,
}

/// Tag normalization: lower-cased, alphabetic characters only, so
/// "Role Playing" and "role-playing" compare equal.
pub fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

impl Criteria {
    pub fn matches(&self, gameid: &str, fields: &Fields, lists: &[FilterList]) -> bool {
        if !self.platforms.is_empty()
            && !self
                .platforms
                .iter()
                .any(|platform| flag_field(fields, platform))
        {
            return false;
        }
        if !self.types.is_empty() {
            let app_type = str_field(fields, "type").to_lowercase();
            if !self.types.iter().any(|t| *t == app_type) {
                return false;
            }
        }
        if self.free && !flag_field(fields, "is_free_game") {
            return false;
        }
        if self.no_free && flag_field(fields, "is_free_game") {
            return false;
        }
        if self.released && flag_field(fields, "prerelease") {
            return false;
        }
        if self.no_released && !flag_field(fields, "prerelease") {
            return false;
        }
        if self.early && !flag_field(fields, "early_access") {
            return false;
        }
        if self.no_early && flag_field(fields, "early_access") {
            return false;
        }
        if !self.tags.is_empty() {
            // An entry without a tags field has no tags and cannot match.
            let entry_tags: Vec<String> = string_items(fields, "tags")
                .iter()
                .map(|tag| normalize_tag(tag))
                .collect();
            if !self
                .tags
                .iter()
                .any(|wanted| entry_tags.contains(&normalize_tag(wanted)))
            {
                return false;
            }
        }
        if let Some(discount) = self.discount {
            if int_field(fields, "discount_percent") < discount {
                return false;
            }
        }
        if let Some(price) = self.price {
            if int_field(fields, "final") > price {
                return false;
            }
        }
        if let Some(deck) = self.deck {
            if int_field(fields, "deck_compat") < deck {
                return false;
            }
        }
        lists.iter().all(|list| list.contains(gameid))
    }
}

/// Applies the criteria and curated lists, producing a new wishlist
/// holding only the surviving entries.
pub fn apply(wishlist: &Wishlist, criteria: &Criteria, lists: &[FilterList]) -> Wishlist {
    let mut filtered = Wishlist::new();
    for (gameid, fields) in wishlist.iter() {
        if criteria.matches(gameid, fields, lists) {
            filtered.insert(gameid, fields.clone());
        }
    }
    filtered
}
