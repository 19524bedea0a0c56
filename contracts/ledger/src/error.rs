use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized { description: Option<String> },

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("InvalidNameFormat: {name} must end with .ccns")]
    InvalidNameFormat { name: String },

    #[error("NameAlreadyTaken: {name} is owned by {owner}.")]
    NameAlreadyTaken { name: String, owner: String },

    #[error("NameNotFound: {name} is not registered.")]
    NameNotFound { name: String },

    #[error("NotAuthorized: Chain {destination_chain_selector} is not authorized.")]
    NotAuthorized { destination_chain_selector: u64 },

    #[error("TransportRejected: Sending to chain {destination_chain_selector} failed: {reason}")]
    TransportRejected {
        destination_chain_selector: u64,
        reason: String,
    },

    #[error("UnknownChain: {chain_id}")]
    UnknownChain { chain_id: String },

    #[error("UnknownChainSelector: {selector}")]
    UnknownChainSelector { selector: u64 },

    #[error("DuplicateChain: chain {chain_id} or selector {selector} is already registered.")]
    DuplicateChain { chain_id: String, selector: u64 },

    #[error("InvalidDestination: {selector} is the ledger's own chain.")]
    InvalidDestination { selector: u64 },

    #[error("InvalidReceiver")]
    InvalidReceiver {},

    #[error("NotDeployed: No deployment is recorded for chain {destination_chain_selector}.")]
    NotDeployed { destination_chain_selector: u64 },

    #[error("ReceiverMismatch: Chain {destination_chain_selector} is bound to {expected}, not {receiver}.")]
    ReceiverMismatch {
        destination_chain_selector: u64,
        expected: String,
        receiver: String,
    },
}
