use cosmwasm_std::{from_binary, to_binary, Binary, StdResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tiny_keccak::Keccak;

pub const NAME_SUFFIX: &str = ".ccns";

/// Gas reserved on the destination when nothing more specific is configured.
pub const DEFAULT_GAS_LIMIT: u64 = 200_000;

/// Payload carried by every cross-chain message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NameRecord {
    pub name: String,
    pub owner: String,
}

pub fn keccak256(i: &[u8]) -> Vec<u8> {
    let mut o = vec![0u8; 32];
    Keccak::keccak256(i, &mut o);
    return o;
}

/// A name is valid when it carries a non-empty label followed by `.ccns`.
pub fn is_valid_name(name: &str) -> bool {
    name.len() > NAME_SUFFIX.len() && name.ends_with(NAME_SUFFIX)
}

pub fn encode_name_record(record: &NameRecord) -> StdResult<Binary> {
    to_binary(record)
}

pub fn decode_name_record(data: &Binary) -> StdResult<NameRecord> {
    from_binary(data)
}

pub fn compute_message_id(
    source_chain_selector: u64,
    destination_chain_selector: u64,
    sequence: u64,
    sender: &str,
    data: &[u8],
) -> String {
    let arr = [
        &source_chain_selector.to_be_bytes()[..],
        &destination_chain_selector.to_be_bytes()[..],
        &sequence.to_be_bytes()[..],
        sender.as_bytes(),
        data,
    ]
    .concat();
    hex::encode(keccak256(&arr))
}
