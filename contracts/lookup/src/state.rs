use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: CanonicalAddr,
    /// Receiver allowed to apply updates, unset until linked
    pub writer: Option<CanonicalAddr>,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

/// name -> owner as known on the source chain
pub const ENTRIES: Map<&str, String> = Map::new("ENTRIES");
