use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub router: CanonicalAddr,
    pub lookup: CanonicalAddr,
    // Trusted origin, fixed at instantiate
    pub source_chain_selector: u64,
    pub source_sender: String,
    pub owner: CanonicalAddr,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

/// Ids of messages whose update was forwarded to the lookup
pub const PROCESSED: Map<&str, bool> = Map::new("PROCESSED");
