use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("InvalidRouter: {sender} is not the router.")]
    InvalidRouter { sender: String },

    #[error("UntrustedSource: sender {sender} on chain {source_chain_selector} is not trusted.")]
    UntrustedSource {
        source_chain_selector: u64,
        sender: String,
    },

    #[error("MalformedPayload: {reason}")]
    MalformedPayload { reason: String },

    #[error("InvalidSourceSender")]
    InvalidSourceSender {},
}
