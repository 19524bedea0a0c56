use crate::error::ContractError;
use crate::messenger::{broadcast, send, Outbound};
use crate::state::{
    Deployment, AUTHORIZATIONS, CHAINS, CHAIN_SELECTORS, CONFIG, DEPLOYMENTS, NAMES, SEQUENCES,
};
use ccns::chain::{ChainDescriptor, ChainStatus, DeploymentRecord};
use ccns::ledger::{
    Authorization, AuthorizationResponse, AuthorizationsResponse, ChainResponse,
    ChainStatusResponse, ChainsResponse, ConfigResponse, IsAuthorizedResponse, NamesResponse,
    ResolveResponse,
};
use ccns::utils::{is_valid_name, NameRecord};
use cosmwasm_std::{
    Deps, DepsMut, Env, MessageInfo, Order, Response, StdError, StdResult, Storage,
};
use cw_storage_plus::{Bound, U64Key};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

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

fn validate_name(name: &str) -> Result<(), ContractError> {
    if !is_valid_name(name) {
        return Err(ContractError::InvalidNameFormat {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn with_outbound(mut response: Response, outbound: Vec<Outbound>) -> Response {
    for Outbound {
        message,
        event,
        message_id: _,
    } in outbound
    {
        response = response.add_submessage(message).add_event(event);
    }
    response
}

pub fn register(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
) -> Result<Response, ContractError> {
    validate_name(&name)?;

    if let Some(owner) = NAMES.may_load(deps.storage, name.as_str())? {
        return Err(ContractError::NameAlreadyTaken {
            name,
            owner: deps.api.addr_humanize(&owner)?.to_string(),
        });
    }

    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;
    NAMES.save(deps.storage, name.as_str(), &owner)?;

    let record = NameRecord {
        name: name.clone(),
        owner: info.sender.to_string(),
    };
    let outbound = broadcast(deps.branch(), &env, &record)?;
    let destinations = outbound.len();

    Ok(with_outbound(Response::new(), outbound)
        .add_attribute("method", "register")
        .add_attribute("name", name)
        .add_attribute("owner", info.sender)
        .add_attribute("destinations", destinations.to_string()))
}

pub fn propagate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    destination_chain_selector: u64,
) -> Result<Response, ContractError> {
    let owner = NAMES
        .may_load(deps.storage, name.as_str())?
        .ok_or(ContractError::NameNotFound { name: name.clone() })?;
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != owner && sender != config.owner {
        return Err(ContractError::Unauthorized {
            description: Some(String::from(
                "only the ledger owner or the name owner may propagate a name",
            )),
        });
    }

    let record = NameRecord {
        name: name.clone(),
        owner: deps.api.addr_humanize(&owner)?.to_string(),
    };
    let outbound = send(deps, &env, destination_chain_selector, &record)?;
    let message_id = outbound.message_id.clone();

    Ok(with_outbound(Response::new(), vec![outbound])
        .add_attribute("method", "propagate")
        .add_attribute("name", name)
        .add_attribute(
            "destination_chain_selector",
            destination_chain_selector.to_string(),
        )
        .add_attribute("message_id", message_id))
}

pub fn authorize(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    destination_chain_selector: u64,
    receiver: String,
    gas_limit: Option<u64>,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;

    let chain = CHAINS
        .may_load(deps.storage, U64Key::from(destination_chain_selector))?
        .ok_or(ContractError::UnknownChainSelector {
            selector: destination_chain_selector,
        })?;
    if chain.chain_id == config.chain_id {
        return Err(ContractError::InvalidDestination {
            selector: destination_chain_selector,
        });
    }
    if receiver.trim().is_empty() {
        return Err(ContractError::InvalidReceiver {});
    }
    let deployment = DEPLOYMENTS
        .may_load(deps.storage, U64Key::from(destination_chain_selector))?
        .ok_or(ContractError::NotDeployed {
            destination_chain_selector,
        })?;
    if deployment.receiver != receiver {
        return Err(ContractError::ReceiverMismatch {
            destination_chain_selector,
            expected: deployment.receiver,
            receiver,
        });
    }

    let gas_limit = gas_limit
        .or(chain.gas_limit)
        .unwrap_or(config.default_gas_limit);
    AUTHORIZATIONS.save(
        deps.storage,
        U64Key::from(destination_chain_selector),
        &Authorization {
            destination_chain_selector,
            receiver: receiver.clone(),
            gas_limit,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "authorize")
        .add_attribute("chain_id", chain.chain_id)
        .add_attribute(
            "destination_chain_selector",
            destination_chain_selector.to_string(),
        )
        .add_attribute("receiver", receiver)
        .add_attribute("gas_limit", gas_limit.to_string()))
}

pub fn deauthorize(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    destination_chain_selector: u64,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    AUTHORIZATIONS.remove(deps.storage, U64Key::from(destination_chain_selector));
    Ok(Response::new()
        .add_attribute("method", "deauthorize")
        .add_attribute(
            "destination_chain_selector",
            destination_chain_selector.to_string(),
        ))
}

pub fn record_deployment(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    destination_chain_selector: u64,
    receiver: String,
    lookup: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    if CHAINS
        .may_load(deps.storage, U64Key::from(destination_chain_selector))?
        .is_none()
    {
        return Err(ContractError::UnknownChainSelector {
            selector: destination_chain_selector,
        });
    }
    if receiver.trim().is_empty() {
        return Err(ContractError::InvalidReceiver {});
    }
    // an authorized receiver has to be deauthorized before it is replaced
    if let Some(authorization) =
        AUTHORIZATIONS.may_load(deps.storage, U64Key::from(destination_chain_selector))?
    {
        if authorization.receiver != receiver {
            return Err(ContractError::ReceiverMismatch {
                destination_chain_selector,
                expected: authorization.receiver,
                receiver,
            });
        }
    }

    DEPLOYMENTS.save(
        deps.storage,
        U64Key::from(destination_chain_selector),
        &Deployment {
            receiver: receiver.clone(),
            lookup: lookup.clone(),
        },
    )?;
    Ok(Response::new()
        .add_attribute("method", "record_deployment")
        .add_attribute(
            "destination_chain_selector",
            destination_chain_selector.to_string(),
        )
        .add_attribute("receiver", receiver)
        .add_attribute("lookup", lookup))
}

/// Moves everything the ledger keeps per destination from one selector to another.
fn move_destination(storage: &mut dyn Storage, from: u64, to: u64) -> StdResult<()> {
    if let Some(mut authorization) = AUTHORIZATIONS.may_load(storage, U64Key::from(from))? {
        authorization.destination_chain_selector = to;
        AUTHORIZATIONS.remove(storage, U64Key::from(from));
        AUTHORIZATIONS.save(storage, U64Key::from(to), &authorization)?;
    }
    if let Some(deployment) = DEPLOYMENTS.may_load(storage, U64Key::from(from))? {
        DEPLOYMENTS.remove(storage, U64Key::from(from));
        DEPLOYMENTS.save(storage, U64Key::from(to), &deployment)?;
    }
    if let Some(sequence) = SEQUENCES.may_load(storage, U64Key::from(from))? {
        SEQUENCES.remove(storage, U64Key::from(from));
        SEQUENCES.save(storage, U64Key::from(to), &sequence)?;
    }
    Ok(())
}

/// Upserts a chain descriptor, keeping chain ids and selectors one-to-one.
pub fn save_chain(storage: &mut dyn Storage, chain: &ChainDescriptor) -> Result<(), ContractError> {
    if chain.chain_id.is_empty() {
        return Err(ContractError::UnknownChain {
            chain_id: chain.chain_id.clone(),
        });
    }
    if let Some(existing) = CHAINS.may_load(storage, U64Key::from(chain.selector))? {
        if existing.chain_id != chain.chain_id {
            return Err(ContractError::DuplicateChain {
                chain_id: chain.chain_id.clone(),
                selector: chain.selector,
            });
        }
    }
    if let Some(previous) = CHAIN_SELECTORS.may_load(storage, chain.chain_id.as_str())? {
        if previous != chain.selector {
            CHAINS.remove(storage, U64Key::from(previous));
            move_destination(storage, previous, chain.selector)?;
        }
    }
    CHAINS.save(storage, U64Key::from(chain.selector), chain)?;
    CHAIN_SELECTORS.save(storage, chain.chain_id.as_str(), &chain.selector)?;
    Ok(())
}

pub fn set_chain(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    chain: ChainDescriptor,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;
    if chain.chain_id == config.chain_id {
        // the local router is the one messages are handed to
        deps.api.addr_validate(chain.router.as_str())?;
    }
    save_chain(deps.storage, &chain)?;
    Ok(Response::new()
        .add_attribute("method", "set_chain")
        .add_attribute("chain_id", chain.chain_id)
        .add_attribute("selector", chain.selector.to_string())
        .add_attribute("router", chain.router))
}

pub fn set_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
    default_gas_limit: u64,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;

    let owner = deps.api.addr_canonicalize(owner.as_str())?;
    config.owner = owner.clone();
    config.default_gas_limit = default_gas_limit;

    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_config")
        .add_attribute("owner", deps.api.addr_humanize(&owner)?)
        .add_attribute("default_gas_limit", default_gas_limit.to_string()))
}

pub fn resolve_local(deps: Deps, _env: Env, name: String) -> StdResult<ResolveResponse> {
    let owner = match NAMES.may_load(deps.storage, name.as_str())? {
        Some(owner) => Some(deps.api.addr_humanize(&owner)?),
        None => None,
    };
    Ok(ResolveResponse { name, owner })
}

pub fn query_names(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<NamesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);
    let names: StdResult<Vec<String>> = NAMES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| -> StdResult<String> {
            let (k, _) = item?;
            Ok(String::from_utf8(k)?)
        })
        .collect();
    Ok(NamesResponse { names: names? })
}

pub fn query_is_authorized(
    deps: Deps,
    destination_chain_selector: u64,
) -> StdResult<IsAuthorizedResponse> {
    let is_authorized = AUTHORIZATIONS
        .may_load(deps.storage, U64Key::from(destination_chain_selector))?
        .is_some();
    Ok(IsAuthorizedResponse { is_authorized })
}

pub fn query_authorization(
    deps: Deps,
    destination_chain_selector: u64,
) -> StdResult<AuthorizationResponse> {
    let authorization =
        AUTHORIZATIONS.may_load(deps.storage, U64Key::from(destination_chain_selector))?;
    Ok(AuthorizationResponse { authorization })
}

pub fn query_authorizations(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<AuthorizationsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(|s| Bound::exclusive(s.to_be_bytes().to_vec()));
    let authorizations: StdResult<Vec<Authorization>> = AUTHORIZATIONS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, authorization)| authorization))
        .collect();
    Ok(AuthorizationsResponse {
        authorizations: authorizations?,
    })
}

pub fn query_chain(deps: Deps, chain_id: String) -> StdResult<ChainResponse> {
    let chain = match CHAIN_SELECTORS.may_load(deps.storage, chain_id.as_str())? {
        Some(selector) => CHAINS.may_load(deps.storage, U64Key::from(selector))?,
        None => None,
    };
    Ok(ChainResponse { chain })
}

pub fn query_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<ChainsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(|s| Bound::exclusive(s.to_be_bytes().to_vec()));
    let chains: StdResult<Vec<ChainDescriptor>> = CHAINS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, chain)| chain))
        .collect();
    Ok(ChainsResponse { chains: chains? })
}

pub fn query_chain_status(
    deps: Deps,
    destination_chain_selector: u64,
) -> StdResult<ChainStatusResponse> {
    let status = if AUTHORIZATIONS
        .may_load(deps.storage, U64Key::from(destination_chain_selector))?
        .is_some()
    {
        ChainStatus::Authorized
    } else if DEPLOYMENTS
        .may_load(deps.storage, U64Key::from(destination_chain_selector))?
        .is_some()
    {
        ChainStatus::Deployed
    } else {
        ChainStatus::Unregistered
    };
    Ok(ChainStatusResponse { status })
}

pub fn query_deployment_record(
    deps: Deps,
    env: Env,
    chain_id: String,
) -> StdResult<DeploymentRecord> {
    let selector = CHAIN_SELECTORS
        .may_load(deps.storage, chain_id.as_str())?
        .ok_or_else(|| StdError::not_found(format!("chain {}", chain_id)))?;
    let authorization = AUTHORIZATIONS
        .may_load(deps.storage, U64Key::from(selector))?
        .ok_or_else(|| StdError::generic_err(format!("chain {} is not authorized", chain_id)))?;
    let deployment = DEPLOYMENTS.load(deps.storage, U64Key::from(selector))?;
    Ok(DeploymentRecord {
        chain_id,
        ledger: env.contract.address.to_string(),
        lookup: deployment.lookup,
        receiver: authorization.receiver,
    })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_humanize(&config.owner)?;
    let chain_selector = CHAIN_SELECTORS.load(deps.storage, config.chain_id.as_str())?;
    Ok(ConfigResponse {
        owner,
        chain_id: config.chain_id,
        chain_selector,
        default_gas_limit: config.default_gas_limit,
    })
}
