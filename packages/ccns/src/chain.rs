use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Static description of a chain reachable through the messaging transport.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ChainDescriptor {
    /// Human readable identifier, e.g. "osmosis-1"
    pub chain_id: String,
    /// Unique numeric identifier of the chain within the transport
    pub selector: u64,
    /// Address of the transport router on that chain
    pub router: String,
    /// Gas to reserve on delivery when an authorization does not set one
    pub gas_limit: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChainStatus {
    /// No receiver is known on the destination
    Unregistered,
    /// A receiver was deployed but the source has not authorized it yet
    Deployed,
    /// Registrations propagate end-to-end
    Authorized,
}

/// Addresses external tooling persists once a destination is authorized.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DeploymentRecord {
    pub chain_id: String,
    pub ledger: String,
    pub lookup: String,
    pub receiver: String,
}
