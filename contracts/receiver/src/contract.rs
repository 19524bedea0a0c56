use crate::error::ContractError;
use crate::handler::{ccip_receive, get_config, query_is_processed, set_config};
use crate::state::{Config, CONFIG};
use ccns::receiver::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:ccns-receiver";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    if msg.source_sender.trim().is_empty() {
        return Err(ContractError::InvalidSourceSender {});
    }

    let router = deps.api.addr_canonicalize(msg.router_address.as_str())?;
    let lookup = deps.api.addr_canonicalize(msg.lookup_address.as_str())?;
    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;
    CONFIG.save(
        deps.storage,
        &Config {
            router,
            lookup,
            source_chain_selector: msg.source_chain_selector,
            source_sender: msg.source_sender.clone(),
            owner,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute(
            "source_chain_selector",
            msg.source_chain_selector.to_string(),
        )
        .add_attribute("source_sender", msg.source_sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CcipReceive { message } => ccip_receive(deps, env, info, message),
        ExecuteMsg::SetConfig {
            lookup_address,
            owner,
        } => set_config(deps, env, info, lookup_address, owner),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::IsProcessed { message_id } => to_binary(&query_is_processed(deps, message_id)?),
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
