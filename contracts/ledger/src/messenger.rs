//! Outbound half of the cross-chain messenger.
//!
//! Every update leaves the ledger as a `CcipSend` to the router of the chain the
//! ledger lives on. The submessage id is the destination selector so that a
//! failing router can be attributed in `reply`.
use crate::error::ContractError;
use crate::state::{AUTHORIZATIONS, CHAINS, CHAIN_SELECTORS, CONFIG, SEQUENCES};
use ccns::chain::ChainDescriptor;
use ccns::router::{RouterExecuteMsg, Wasm2AnyMessage};
use ccns::utils::{compute_message_id, encode_name_record, NameRecord};
use cosmwasm_std::{
    to_binary, ContractResult, Deps, DepsMut, Env, Event, Order, Reply, Response, StdResult,
    SubMsg, WasmMsg,
};
use cw_storage_plus::U64Key;

pub struct Outbound {
    pub message: SubMsg,
    pub event: Event,
    pub message_id: String,
}

pub fn local_chain(deps: Deps) -> Result<ChainDescriptor, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let selector = CHAIN_SELECTORS
        .may_load(deps.storage, config.chain_id.as_str())?
        .ok_or(ContractError::UnknownChain {
            chain_id: config.chain_id.clone(),
        })?;
    let chain = CHAINS
        .may_load(deps.storage, U64Key::from(selector))?
        .ok_or(ContractError::UnknownChain {
            chain_id: config.chain_id,
        })?;
    Ok(chain)
}

pub fn send(
    deps: DepsMut,
    env: &Env,
    destination_chain_selector: u64,
    record: &NameRecord,
) -> Result<Outbound, ContractError> {
    if CHAINS
        .may_load(deps.storage, U64Key::from(destination_chain_selector))?
        .is_none()
    {
        return Err(ContractError::UnknownChainSelector {
            selector: destination_chain_selector,
        });
    }
    let authorization = AUTHORIZATIONS
        .may_load(deps.storage, U64Key::from(destination_chain_selector))?
        .ok_or(ContractError::NotAuthorized {
            destination_chain_selector,
        })?;
    let local = local_chain(deps.as_ref())?;
    let router = deps.api.addr_validate(local.router.as_str())?;

    let sequence = SEQUENCES
        .may_load(deps.storage, U64Key::from(destination_chain_selector))?
        .unwrap_or(0)
        + 1;
    SEQUENCES.save(
        deps.storage,
        U64Key::from(destination_chain_selector),
        &sequence,
    )?;

    let data = encode_name_record(record)?;
    let message_id = compute_message_id(
        local.selector,
        destination_chain_selector,
        sequence,
        env.contract.address.as_str(),
        data.as_slice(),
    );

    let ccip_send_msg = WasmMsg::Execute {
        contract_addr: router.to_string(),
        msg: to_binary(&RouterExecuteMsg::CcipSend {
            destination_chain_selector,
            message: Wasm2AnyMessage {
                message_id: message_id.clone(),
                receiver: authorization.receiver.clone(),
                data,
                gas_limit: authorization.gas_limit,
            },
        })?,
        funds: vec![],
    };

    let event = Event::new("ccns_message_sent")
        .add_attribute(
            "destination_chain_selector",
            destination_chain_selector.to_string(),
        )
        .add_attribute("receiver", authorization.receiver)
        .add_attribute("message_id", message_id.clone())
        .add_attribute("sequence", sequence.to_string())
        .add_attribute("gas_limit", authorization.gas_limit.to_string());

    Ok(Outbound {
        message: SubMsg::reply_on_error(ccip_send_msg, destination_chain_selector),
        event,
        message_id,
    })
}

/// Sends `record` to every authorized destination, in selector order.
pub fn broadcast(
    mut deps: DepsMut,
    env: &Env,
    record: &NameRecord,
) -> Result<Vec<Outbound>, ContractError> {
    let selectors = AUTHORIZATIONS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, authorization)| authorization.destination_chain_selector))
        .collect::<StdResult<Vec<u64>>>()?;

    let mut outbound = vec![];
    for selector in selectors {
        outbound.push(send(deps.branch(), env, selector, record)?);
    }
    Ok(outbound)
}

pub fn handle_send_reply(msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        ContractResult::Ok(_) => Ok(Response::default()),
        ContractResult::Err(reason) => Err(ContractError::TransportRejected {
            destination_chain_selector: msg.id,
            reason,
        }),
    }
}
