//! Boundary with the cross-chain messaging transport.
//!
//! The ledger hands outbound messages to the router of its own chain, and the
//! router of a destination chain delivers them to the receiver contract.
use cosmwasm_std::Binary;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RouterExecuteMsg {
    CcipSend {
        destination_chain_selector: u64,
        message: Wasm2AnyMessage,
    },
}

/// Outbound message as handed to the local router.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Wasm2AnyMessage {
    pub message_id: String,
    /// Receiver identity on the destination chain
    pub receiver: String,
    pub data: Binary,
    pub gas_limit: u64,
}

/// Inbound message as delivered by the destination router.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Any2WasmMessage {
    pub message_id: String,
    pub source_chain_selector: u64,
    /// Identity of the contract that sent the message on the source chain
    pub sender: String,
    pub data: Binary,
}
