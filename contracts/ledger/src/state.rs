use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use ccns::chain::ChainDescriptor;
use ccns::ledger::Authorization;
use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map, U64Key};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: CanonicalAddr,
    pub chain_id: String,
    pub default_gas_limit: u64,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

/// name -> owner, first writer wins
pub const NAMES: Map<&str, CanonicalAddr> = Map::new("NAMES");

pub const CHAINS: Map<U64Key, ChainDescriptor> = Map::new("CHAINS");

/// chain id -> selector
pub const CHAIN_SELECTORS: Map<&str, u64> = Map::new("CHAIN_SELECTORS");

pub const AUTHORIZATIONS: Map<U64Key, Authorization> = Map::new("AUTHORIZATIONS");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Deployment {
    pub receiver: String,
    pub lookup: String,
}

pub const DEPLOYMENTS: Map<U64Key, Deployment> = Map::new("DEPLOYMENTS");

/// Last sequence number used towards each destination
pub const SEQUENCES: Map<U64Key, u64> = Map::new("SEQUENCES");
