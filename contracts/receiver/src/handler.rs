use crate::error::ContractError;
use crate::state::{Config, CONFIG, PROCESSED};
use ccns::lookup::ExecuteMsg as LookupExecuteMsg;
use ccns::receiver::{ConfigResponse, IsProcessedResponse};
use ccns::router::Any2WasmMessage;
use ccns::utils::{decode_name_record, is_valid_name, NameRecord};
use cosmwasm_std::{
    to_binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult, WasmMsg,
};

fn only_owner(deps: Deps, info: &MessageInfo) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.owner {
        return Err(ContractError::NotOwner {
            sender: info.sender.to_string(),
            owner: deps.api.addr_humanize(&config.owner)?.to_string(),
        });
    }
    Ok(true)
}

fn only_router(deps: Deps, info: &MessageInfo, config: &Config) -> Result<bool, ContractError> {
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.router {
        return Err(ContractError::InvalidRouter {
            sender: info.sender.to_string(),
        });
    }
    Ok(true)
}

pub fn validate_message(
    config: &Config,
    message: &Any2WasmMessage,
) -> Result<NameRecord, ContractError> {
    if message.source_chain_selector != config.source_chain_selector
        || message.sender != config.source_sender
    {
        return Err(ContractError::UntrustedSource {
            source_chain_selector: message.source_chain_selector,
            sender: message.sender.clone(),
        });
    }

    let record = decode_name_record(&message.data).map_err(|err| {
        ContractError::MalformedPayload {
            reason: err.to_string(),
        }
    })?;
    if !is_valid_name(&record.name) || record.owner.is_empty() {
        return Err(ContractError::MalformedPayload {
            reason: format!("invalid record for name {:?}", record.name),
        });
    }
    Ok(record)
}

fn rejection_reason(err: &ContractError) -> &'static str {
    match err {
        ContractError::UntrustedSource { .. } => "untrusted_source",
        ContractError::MalformedPayload { .. } => "malformed_payload",
        _ => "invalid_message",
    }
}

/// Entry point of the transport on this chain.
///
/// Only the router may deliver. A message that is delivered but not trusted or
/// not decodable is refused without reverting, so the router can keep
/// delivering the ones after it.
pub fn ccip_receive(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    message: Any2WasmMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    only_router(deps.as_ref(), &info, &config)?;

    let response = Response::new()
        .add_attribute("method", "ccip_receive")
        .add_attribute("message_id", message.message_id.clone());

    if PROCESSED
        .may_load(deps.storage, message.message_id.as_str())?
        .is_some()
    {
        return Ok(response.add_attribute("status", "duplicate"));
    }

    let record = match validate_message(&config, &message) {
        Ok(record) => record,
        Err(err) => {
            deps.api.debug(&format!(
                "ccns: rejected message {}: {}",
                message.message_id, err
            ));
            return Ok(response
                .add_attribute("status", "rejected")
                .add_attribute("reason", rejection_reason(&err))
                .add_attribute("error", err.to_string()));
        }
    };

    PROCESSED.save(deps.storage, message.message_id.as_str(), &true)?;

    let lookup = deps.api.addr_humanize(&config.lookup)?;
    let apply_update_msg = WasmMsg::Execute {
        contract_addr: lookup.to_string(),
        msg: to_binary(&LookupExecuteMsg::ApplyUpdate {
            name: record.name.clone(),
            owner: record.owner.clone(),
        })?,
        funds: vec![],
    };

    Ok(response
        .add_message(apply_update_msg)
        .add_attribute("status", "accepted")
        .add_attribute("name", record.name)
        .add_attribute("owner", record.owner))
}

pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    lookup_address: String,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;

    config.lookup = deps.api.addr_canonicalize(lookup_address.as_str())?;
    config.owner = deps.api.addr_canonicalize(owner.as_str())?;

    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("lookup_address", lookup_address)
        .add_attribute("owner", owner))
}

pub fn query_is_processed(deps: Deps, message_id: String) -> StdResult<IsProcessedResponse> {
    let is_processed = PROCESSED
        .may_load(deps.storage, message_id.as_str())?
        .unwrap_or(false);
    Ok(IsProcessedResponse { is_processed })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        router_address: deps.api.addr_humanize(&config.router)?,
        lookup_address: deps.api.addr_humanize(&config.lookup)?,
        source_chain_selector: config.source_chain_selector,
        source_sender: config.source_sender,
        owner: deps.api.addr_humanize(&config.owner)?,
    })
}
