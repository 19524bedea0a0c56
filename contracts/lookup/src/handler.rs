use crate::error::ContractError;
use crate::state::{CONFIG, ENTRIES};
use ccns::lookup::{ConfigResponse, LookupResponse};
use cosmwasm_std::{Deps, DepsMut, Env, MessageInfo, Response, StdResult};

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

fn only_writer(deps: Deps, info: &MessageInfo) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if config.writer != Some(sender) {
        return Err(ContractError::NotWriter {
            sender: info.sender.to_string(),
        });
    }
    Ok(true)
}

pub fn set_writer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let writer = deps.api.addr_canonicalize(address.as_str())?;
    let mut config = CONFIG.load(deps.storage)?;
    config.writer = Some(writer);
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_writer")
        .add_attribute("writer", address))
}

/// Last writer wins, so replaying an update leaves the entry untouched.
pub fn apply_update(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: String,
    owner: String,
) -> Result<Response, ContractError> {
    only_writer(deps.as_ref(), &info)?;
    let previous = ENTRIES.may_load(deps.storage, name.as_str())?;
    let changed = previous.as_ref() != Some(&owner);
    if changed {
        ENTRIES.save(deps.storage, name.as_str(), &owner)?;
    }
    Ok(Response::new()
        .add_attribute("method", "apply_update")
        .add_attribute("name", name)
        .add_attribute("owner", owner)
        .add_attribute("changed", changed.to_string()))
}

pub fn query_lookup(deps: Deps, _env: Env, name: String) -> StdResult<LookupResponse> {
    let owner = ENTRIES.may_load(deps.storage, name.as_str())?;
    Ok(LookupResponse { name, owner })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_humanize(&config.owner)?;
    let writer = match config.writer {
        Some(writer) => Some(deps.api.addr_humanize(&writer)?),
        None => None,
    };
    Ok(ConfigResponse { owner, writer })
}
