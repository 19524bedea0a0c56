use crate::chain::{ChainDescriptor, ChainStatus};
use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Chain this ledger is deployed on, must be listed in `chains`
    pub chain_id: String,
    pub chains: Vec<ChainDescriptor>,
    pub default_gas_limit: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Register {
        name: String,
    },
    Propagate {
        name: String,
        destination_chain_selector: u64,
    },
    Authorize {
        destination_chain_selector: u64,
        receiver: String,
        gas_limit: Option<u64>,
    },
    Deauthorize {
        destination_chain_selector: u64,
    },
    RecordDeployment {
        destination_chain_selector: u64,
        receiver: String,
        lookup: String,
    },
    SetChain {
        chain: ChainDescriptor,
    },
    SetConfig {
        owner: String,
        default_gas_limit: u64,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    ResolveLocal {
        name: String,
    },
    Names {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    IsAuthorized {
        destination_chain_selector: u64,
    },
    Authorization {
        destination_chain_selector: u64,
    },
    Authorizations {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    Chain {
        chain_id: String,
    },
    Chains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    ChainStatus {
        destination_chain_selector: u64,
    },
    DeploymentRecord {
        chain_id: String,
    },
    GetConfig {},
}

/// Permission for the ledger to send updates to one destination receiver.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Authorization {
    pub destination_chain_selector: u64,
    pub receiver: String,
    pub gas_limit: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ResolveResponse {
    pub name: String,
    pub owner: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NamesResponse {
    pub names: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct IsAuthorizedResponse {
    pub is_authorized: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AuthorizationResponse {
    pub authorization: Option<Authorization>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AuthorizationsResponse {
    pub authorizations: Vec<Authorization>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainResponse {
    pub chain: Option<ChainDescriptor>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainsResponse {
    pub chains: Vec<ChainDescriptor>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainStatusResponse {
    pub status: ChainStatus,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub owner: Addr,
    pub chain_id: String,
    pub chain_selector: u64,
    pub default_gas_limit: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
