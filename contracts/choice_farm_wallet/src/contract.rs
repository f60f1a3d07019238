use choice::asset::AssetInfo;
use choice::pair::compute_pair_address;
use choice::querier::query_token_balance;
use choice::router::ExecuteMsg as RouterExecuteMsg;
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coin, to_json_binary, Addr, Api, Binary, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo,
    Reply, Response, StdResult, SubMsg, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::farm::{select_farm, validate_pool};
use crate::msg::{
    AddLiquidityNativeParams, AddLiquidityParams, ExecuteMsg, FarmVersion, InstantiateMsg,
    PairResponse, PoolLiquidityResponse, QueryMsg, ReconcileResponse,
};
use crate::state::{
    increase_pool_liquidity, load_pool_liquidity, Config, PendingDeposit, CONFIG,
    PENDING_DEPOSIT,
};

const CONTRACT_NAME: &str = "crates.io:choice-farm-wallet";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const PROVIDE_LIQUIDITY_REPLY_ID: u64 = 1;

pub const DEPOSIT_EVENT: &str = "liquidity_deposited_and_staked";

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    let wrapped_native = validate_non_null(deps.api, &msg.wrapped_native)?;
    let router = validate_non_null(deps.api, &msg.router)?;
    let farm_v1 = validate_non_null(deps.api, &msg.farm_v1)?;
    let farm_v2 = validate_non_null(deps.api, &msg.farm_v2)?;
    let pair_factory = validate_non_null(deps.api, &msg.pair_factory)?;

    if msg.native_denom.trim().is_empty() {
        return Err(ContractError::EmptyDenom {});
    }
    if msg.pair_code_checksum.len() != 32 {
        return Err(ContractError::InvalidChecksum {});
    }

    let config = Config {
        owner: owner.clone(),
        proposed_owner: None,
        wrapped_native,
        native_denom: msg.native_denom,
        router,
        farm_v1,
        farm_v2,
        pair_factory,
        pair_code_checksum: msg.pair_code_checksum,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("router", msg.router)
        .add_attribute("farm_v1", msg.farm_v1)
        .add_attribute("farm_v2", msg.farm_v2))
}

fn validate_non_null(api: &dyn Api, addr: &str) -> Result<Addr, ContractError> {
    if addr.trim().is_empty() {
        return Err(ContractError::NullAddress {});
    }
    Ok(api.addr_validate(addr)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddLiquidity { params } => execute_add_liquidity(deps, env, info, params),
        ExecuteMsg::AddLiquidityNative { params } => {
            execute_add_liquidity_native(deps, env, info, params)
        }
        ExecuteMsg::ProposeNewOwner { new_owner } => {
            execute_propose_new_owner(deps, info, new_owner)
        }
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),
        ExecuteMsg::CancelOwnershipProposal {} => execute_cancel_ownership_proposal(deps, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        PROVIDE_LIQUIDITY_REPLY_ID => handle_provide_liquidity_reply(deps, env),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

fn assert_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

/// Pair of `token_a` and `token_b` as deployed by the configured factory.
pub fn resolve_pair(
    api: &dyn Api,
    config: &Config,
    token_a: &Addr,
    token_b: &Addr,
) -> Result<Addr, ContractError> {
    if token_a == token_b {
        return Err(ContractError::IdenticalAssets {});
    }
    Ok(compute_pair_address(
        api,
        &config.pair_factory,
        config.pair_code_checksum.as_slice(),
        token_a,
        token_b,
    )?)
}

pub fn execute_add_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: AddLiquidityParams,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    let token_a = deps.api.addr_validate(&params.token_a)?;
    let token_b = deps.api.addr_validate(&params.token_b)?;
    let pair = resolve_pair(deps.api, &config, &token_a, &token_b)?;

    let farm = select_farm(&config, params.farm);
    validate_pool(&deps.querier, farm.as_ref(), params.pool_id, &pair)?;

    let pending = snapshot_deposit(
        deps.as_ref(),
        &env,
        info.sender,
        params.farm,
        params.pool_id,
        pair,
        [
            AssetInfo::Token {
                contract_addr: token_a.to_string(),
            },
            AssetInfo::Token {
                contract_addr: token_b.to_string(),
            },
        ],
        [params.amount_a_desired, params.amount_b_desired],
    )?;
    PENDING_DEPOSIT.save(deps.storage, &pending)?;

    let router_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.router.to_string(),
        msg: to_json_binary(&RouterExecuteMsg::AddLiquidity {
            token_a: token_a.to_string(),
            token_b: token_b.to_string(),
            amount_a_desired: params.amount_a_desired,
            amount_b_desired: params.amount_b_desired,
            amount_a_min: params.amount_a_min,
            amount_b_min: params.amount_b_min,
            to: env.contract.address.to_string(),
            deadline: env.block.time.seconds(),
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(increase_allowance_msg(
            &token_a,
            &config.router,
            params.amount_a_desired,
        )?)
        .add_message(increase_allowance_msg(
            &token_b,
            &config.router,
            params.amount_b_desired,
        )?)
        .add_submessage(SubMsg::reply_on_success(
            router_msg,
            PROVIDE_LIQUIDITY_REPLY_ID,
        ))
        .add_attribute("action", "add_liquidity")
        .add_attribute("farm", params.farm.as_str())
        .add_attribute("pool_id", params.pool_id.to_string())
        .add_attribute("pair", pending.lp_token))
}

pub fn execute_add_liquidity_native(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: AddLiquidityNativeParams,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    let token = deps.api.addr_validate(&params.token)?;
    let pair = resolve_pair(deps.api, &config, &token, &config.wrapped_native)?;

    let farm = select_farm(&config, params.farm);
    validate_pool(&deps.querier, farm.as_ref(), params.pool_id, &pair)?;

    let pending = snapshot_deposit(
        deps.as_ref(),
        &env,
        info.sender,
        params.farm,
        params.pool_id,
        pair,
        [
            AssetInfo::Token {
                contract_addr: token.to_string(),
            },
            AssetInfo::NativeToken {
                denom: config.native_denom.clone(),
            },
        ],
        [params.amount_token_desired, params.amount_native_desired],
    )?;
    PENDING_DEPOSIT.save(deps.storage, &pending)?;

    let router_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.router.to_string(),
        msg: to_json_binary(&RouterExecuteMsg::AddLiquidityNative {
            token: token.to_string(),
            amount_token_desired: params.amount_token_desired,
            amount_token_min: params.amount_token_min,
            amount_native_min: params.amount_native_min,
            to: env.contract.address.to_string(),
            deadline: env.block.time.seconds(),
        })?,
        funds: vec![coin(
            params.amount_native_desired.u128(),
            config.native_denom.clone(),
        )],
    });

    Ok(Response::new()
        .add_message(increase_allowance_msg(
            &token,
            &config.router,
            params.amount_token_desired,
        )?)
        .add_submessage(SubMsg::reply_on_success(
            router_msg,
            PROVIDE_LIQUIDITY_REPLY_ID,
        ))
        .add_attribute("action", "add_liquidity_native")
        .add_attribute("farm", params.farm.as_str())
        .add_attribute("pool_id", params.pool_id.to_string())
        .add_attribute("pair", pending.lp_token))
}

/// Records the wallet's balances ahead of the router call, after checking
/// that no other deposit is in flight and that the desired amounts are held.
#[allow(clippy::too_many_arguments)]
fn snapshot_deposit(
    deps: Deps,
    env: &Env,
    depositor: Addr,
    farm: FarmVersion,
    pool_id: u64,
    lp_token: Addr,
    assets: [AssetInfo; 2],
    amounts_desired: [Uint128; 2],
) -> Result<PendingDeposit, ContractError> {
    if PENDING_DEPOSIT.may_load(deps.storage)?.is_some() {
        return Err(ContractError::DepositInProgress {});
    }

    let mut balances_before = [Uint128::zero(); 2];
    for (i, asset) in assets.iter().enumerate() {
        let balance = asset.query_balance(&deps.querier, &env.contract.address)?;
        if balance < amounts_desired[i] {
            return Err(ContractError::InsufficientBalance {
                asset: asset.to_string(),
                required: amounts_desired[i].to_string(),
                available: balance.to_string(),
            });
        }
        balances_before[i] = balance;
    }

    let lp_balance_before =
        query_token_balance(&deps.querier, lp_token.clone(), env.contract.address.clone())?;

    Ok(PendingDeposit {
        depositor,
        farm,
        pool_id,
        lp_token,
        assets,
        amounts_desired,
        balances_before,
        lp_balance_before,
    })
}

fn increase_allowance_msg(
    token: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount,
            expires: None,
        })?,
        funds: vec![],
    }))
}

// The router has run: measure what it consumed and minted, then stake.
pub fn handle_provide_liquidity_reply(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let pending = PENDING_DEPOSIT.load(deps.storage)?;
    PENDING_DEPOSIT.remove(deps.storage);

    let mut amounts_used = [Uint128::zero(); 2];
    for (i, asset) in pending.assets.iter().enumerate() {
        let balance_after = asset.query_balance(&deps.querier, &env.contract.address)?;
        amounts_used[i] = pending.balances_before[i].checked_sub(balance_after)?;
    }

    let lp_balance_after = query_token_balance(
        &deps.querier,
        pending.lp_token.clone(),
        env.contract.address.clone(),
    )?;
    let liquidity = lp_balance_after.checked_sub(pending.lp_balance_before)?;
    if liquidity.is_zero() {
        return Err(ContractError::NoLiquidityMinted {});
    }

    let farm = select_farm(&config, pending.farm);
    let stake_msgs = farm.stake_msgs(
        &pending.lp_token,
        pending.pool_id,
        liquidity,
        &env.contract.address,
    )?;

    let pool_liquidity =
        increase_pool_liquidity(deps.storage, pending.farm, pending.pool_id, liquidity)?;

    // Unused input stays in the wallet; only the router's leftover allowance is revoked.
    let mut allowance_msgs = vec![];
    for (i, asset) in pending.assets.iter().enumerate() {
        if let AssetInfo::Token { contract_addr } = asset {
            let unused = pending.amounts_desired[i].checked_sub(amounts_used[i])?;
            if !unused.is_zero() {
                allowance_msgs.push(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: contract_addr.clone(),
                    msg: to_json_binary(&Cw20ExecuteMsg::DecreaseAllowance {
                        spender: config.router.to_string(),
                        amount: unused,
                        expires: None,
                    })?,
                    funds: vec![],
                }));
            }
        }
    }

    let event = Event::new(DEPOSIT_EVENT)
        .add_attribute("depositor", pending.depositor.to_string())
        .add_attribute("farm", pending.farm.as_str())
        .add_attribute("pool_id", pending.pool_id.to_string())
        .add_attribute("lp_token", pending.lp_token.to_string())
        .add_attribute("asset_a", pending.assets[0].to_string())
        .add_attribute("amount_a", amounts_used[0].to_string())
        .add_attribute("asset_b", pending.assets[1].to_string())
        .add_attribute("amount_b", amounts_used[1].to_string())
        .add_attribute("liquidity", liquidity.to_string())
        .add_attribute("pool_liquidity", pool_liquidity.to_string());

    Ok(Response::new()
        .add_messages(stake_msgs)
        .add_messages(allowance_msgs)
        .add_event(event)
        .add_attribute("action", "stake")
        .add_attribute("liquidity", liquidity))
}

pub fn execute_propose_new_owner(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    let validated = deps.api.addr_validate(&new_owner)?;
    config.proposed_owner = Some(validated);
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "propose_new_owner")
        .add_attribute("proposed_owner", new_owner))
}

pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    match config.proposed_owner {
        Some(ref proposed) if *proposed == info.sender => {
            config.owner = info.sender.clone();
            config.proposed_owner = None;
            CONFIG.save(deps.storage, &config)?;

            Ok(Response::new()
                .add_attribute("action", "accept_ownership")
                .add_attribute("new_owner", info.sender))
        }
        _ => Err(ContractError::NoOwnershipProposal {}),
    }
}

pub fn execute_cancel_ownership_proposal(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    assert_owner(&config, &info.sender)?;

    config.proposed_owner = None;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "cancel_ownership_proposal")
        .add_attribute("owner", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(to_json_binary(&CONFIG.load(deps.storage)?)?),
        QueryMsg::PoolLiquidity { farm, pool_id } => Ok(to_json_binary(&PoolLiquidityResponse {
            farm,
            pool_id,
            amount: load_pool_liquidity(deps.storage, farm, pool_id)?,
        })?),
        QueryMsg::Reconcile { farm, pool_id } => {
            Ok(to_json_binary(&query_reconcile(deps, env, farm, pool_id)?)?)
        }
        QueryMsg::Pair { token_a, token_b } => {
            Ok(to_json_binary(&query_pair(deps, token_a, token_b)?)?)
        }
    }
}

fn query_reconcile(
    deps: Deps,
    env: Env,
    farm_version: FarmVersion,
    pool_id: u64,
) -> StdResult<ReconcileResponse> {
    let config = CONFIG.load(deps.storage)?;
    let ledger_amount = load_pool_liquidity(deps.storage, farm_version, pool_id)?;
    let farm_amount = select_farm(&config, farm_version).staked_amount(
        &deps.querier,
        pool_id,
        &env.contract.address,
    )?;

    Ok(ReconcileResponse {
        ledger_amount,
        farm_amount,
        in_sync: ledger_amount == farm_amount,
    })
}

fn query_pair(deps: Deps, token_a: String, token_b: String) -> Result<PairResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;

    Ok(PairResponse {
        pair: resolve_pair(deps.api, &config, &token_a, &token_b)?,
    })
}
