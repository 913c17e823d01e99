//! Curated gameid lists maintained outside the wishlist API: games with a
//! demo, with trading cards, with achievements.

use std::collections::HashSet;

use log::info;

use crate::client::StoreClient;
use crate::error::WishlistError;

const LIST_URL_BASE: &str = "https://raw.githubusercontent.com/BlueBoxWare/steamdb/main/lists";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CuratedList {
    Demos,
    Cards,
    Achievements,
}

impl CuratedList {
    pub fn name(self) -> &'static str {
        match self {
            Self::Demos => "demos",
            Self::Cards => "cards",
            Self::Achievements => "achievements",
        }
    }
}

/// One downloaded curated list as a membership set.
#[derive(Debug, Clone)]
pub struct FilterList {
    name: &'static str,
    gameids: HashSet<String>,
}

impl FilterList {
    pub fn parse(list: CuratedList, body: &str) -> Self {
        Self {
            name: list.name(),
            gameids: body.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, gameid: &str) -> bool {
        self.gameids.contains(gameid)
    }
}

/// Downloads every requested curated list in order.
pub fn load_lists(
    client: &StoreClient,
    wanted: &[CuratedList],
) -> Result<Vec<FilterList>, WishlistError> {
    let mut lists = Vec::with_capacity(wanted.len());
    for &list in wanted {
        info!("Loading {}", list.name());
        let body = client.get_text(&format!("{LIST_URL_BASE}/{}", list.name()))?;
        lists.push(FilterList::parse(list, &body));
    }
    Ok(lists)
}
