use crate::error::ContractError;
use crate::handler::{
    authorize, deauthorize, get_config, propagate, query_authorization, query_authorizations,
    query_chain, query_chain_status, query_chains, query_deployment_record, query_is_authorized,
    query_names, record_deployment, register, resolve_local, save_chain, set_chain, set_config,
};
use crate::messenger::handle_send_reply;
use crate::state::{Config, CHAIN_SELECTORS, CONFIG};
use ccns::ledger::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use ccns::utils::DEFAULT_GAS_LIMIT;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
};
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:ccns-ledger";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    for chain in msg.chains.iter() {
        if CHAIN_SELECTORS
            .may_load(deps.storage, chain.chain_id.as_str())?
            .is_some()
        {
            return Err(ContractError::DuplicateChain {
                chain_id: chain.chain_id.clone(),
                selector: chain.selector,
            });
        }
        save_chain(deps.storage, chain)?;
    }

    let local = msg
        .chains
        .iter()
        .find(|chain| chain.chain_id == msg.chain_id)
        .ok_or(ContractError::UnknownChain {
            chain_id: msg.chain_id.clone(),
        })?;
    deps.api.addr_validate(local.router.as_str())?;

    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;
    let default_gas_limit = msg.default_gas_limit.unwrap_or(DEFAULT_GAS_LIMIT);
    CONFIG.save(
        deps.storage,
        &Config {
            owner,
            chain_id: msg.chain_id.clone(),
            default_gas_limit,
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("chain_id", msg.chain_id)
        .add_attribute("chains", msg.chains.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Register { name } => register(deps, env, info, name),
        ExecuteMsg::Propagate {
            name,
            destination_chain_selector,
        } => propagate(deps, env, info, name, destination_chain_selector),
        ExecuteMsg::Authorize {
            destination_chain_selector,
            receiver,
            gas_limit,
        } => authorize(
            deps,
            env,
            info,
            destination_chain_selector,
            receiver,
            gas_limit,
        ),
        ExecuteMsg::Deauthorize {
            destination_chain_selector,
        } => deauthorize(deps, env, info, destination_chain_selector),
        ExecuteMsg::RecordDeployment {
            destination_chain_selector,
            receiver,
            lookup,
        } => record_deployment(
            deps,
            env,
            info,
            destination_chain_selector,
            receiver,
            lookup,
        ),
        ExecuteMsg::SetChain { chain } => set_chain(deps, env, info, chain),
        ExecuteMsg::SetConfig {
            owner,
            default_gas_limit,
        } => set_config(deps, env, info, owner, default_gas_limit),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    handle_send_reply(msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ResolveLocal { name } => to_binary(&resolve_local(deps, env, name)?),
        QueryMsg::Names { start_after, limit } => {
            to_binary(&query_names(deps, start_after, limit)?)
        }
        QueryMsg::IsAuthorized {
            destination_chain_selector,
        } => to_binary(&query_is_authorized(deps, destination_chain_selector)?),
        QueryMsg::Authorization {
            destination_chain_selector,
        } => to_binary(&query_authorization(deps, destination_chain_selector)?),
        QueryMsg::Authorizations { start_after, limit } => {
            to_binary(&query_authorizations(deps, start_after, limit)?)
        }
        QueryMsg::Chain { chain_id } => to_binary(&query_chain(deps, chain_id)?),
        QueryMsg::Chains { start_after, limit } => {
            to_binary(&query_chains(deps, start_after, limit)?)
        }
        QueryMsg::ChainStatus {
            destination_chain_selector,
        } => to_binary(&query_chain_status(deps, destination_chain_selector)?),
        QueryMsg::DeploymentRecord { chain_id } => {
            to_binary(&query_deployment_record(deps, env, chain_id)?)
        }
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
