#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, BankMsg, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order,
    Response, StdResult, Uint128, Uint64,
};
use cw_storage_plus::Bound;
use trustful_oracle::OracleContract;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, OwnerOfResponse, PoolResponse, QueryMsg, QuoteResponse,
    UnitsResponse,
};
use crate::state::{units, Config, PaymentPolicy, Unit, CONFIG, NEXT_UNIT_ID};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let config = Config {
        oracle: deps.api.addr_validate(&msg.oracle)?,
        symbol: msg.symbol,
        denom: msg.denom,
        payment_policy: msg.payment_policy.unwrap_or_default(),
    };
    // Funds sent along seed the pool
    let seeded = paid_amount(&info, &config.denom)?;

    CONFIG.save(deps.storage, &config)?;
    NEXT_UNIT_ID.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("oracle", config.oracle)
        .add_attribute("symbol", config.symbol)
        .add_attribute("pool", seeded))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BuyOne {} => execute_buy_one(deps, info),
        ExecuteMsg::Approve { spender, unit_id } => {
            execute_approve(deps, env, info, spender, unit_id)
        }
        ExecuteMsg::Revoke { unit_id } => execute_revoke(deps, info, unit_id),
        ExecuteMsg::SellOne { unit_id } => execute_sell_one(deps, env, info, unit_id),
    }
}

pub fn execute_buy_one(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let paid = paid_amount(&info, &config.denom)?;
    if paid.is_zero() {
        return Err(ContractError::ZeroPayment {});
    }

    let price = current_price(deps.as_ref(), &config)?;
    let accepted = match config.payment_policy {
        PaymentPolicy::Exact => paid == price,
        PaymentPolicy::AtLeast => paid >= price,
    };
    if !accepted {
        return Err(ContractError::InsufficientPayment { paid, price });
    }

    let unit_id = NEXT_UNIT_ID.load(deps.storage)?;
    let next = Uint64::new(unit_id).checked_add(Uint64::one())?;
    NEXT_UNIT_ID.save(deps.storage, &next.u64())?;
    units().save(
        deps.storage,
        unit_id,
        &Unit {
            owner: info.sender.clone(),
            approved: None,
        },
    )?;

    let mut response = Response::new()
        .add_attribute("action", "buy_one")
        .add_event(
            Event::new("token_bought")
                .add_attribute("buyer", info.sender.as_str())
                .add_attribute("unit_id", unit_id.to_string())
                .add_attribute("price", price),
        );

    let change = paid.checked_sub(price)?;
    if !change.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(change.u128(), config.denom),
        });
    }

    Ok(response)
}

pub fn execute_approve(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    spender: String,
    unit_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let spender = deps.api.addr_validate(&spender)?;
    if spender != env.contract.address {
        return Err(ContractError::InvalidSpender {
            spender: spender.to_string(),
        });
    }
    let mut unit = load_owned(deps.as_ref(), &info, unit_id)?;

    unit.approved = Some(spender.clone());
    units().save(deps.storage, unit_id, &unit)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("unit_id", unit_id.to_string())
        .add_attribute("spender", spender))
}

pub fn execute_revoke(
    deps: DepsMut,
    info: MessageInfo,
    unit_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let mut unit = load_owned(deps.as_ref(), &info, unit_id)?;

    unit.approved = None;
    units().save(deps.storage, unit_id, &unit)?;

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("unit_id", unit_id.to_string()))
}

/// The payout is whatever the oracle says right now; it has no relation to
/// what the seller paid for the unit.
pub fn execute_sell_one(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    unit_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    let mut unit = load_owned(deps.as_ref(), &info, unit_id)?;
    if unit.approved.as_ref() != Some(&env.contract.address) {
        return Err(ContractError::NotApproved { unit_id });
    }

    let payout = current_price(deps.as_ref(), &config)?;
    let pool = deps
        .querier
        .query_balance(env.contract.address.as_str(), config.denom.as_str())?
        .amount;
    if pool < payout {
        return Err(ContractError::InsufficientPool { pool, payout });
    }

    unit.owner = env.contract.address;
    unit.approved = None;
    units().save(deps.storage, unit_id, &unit)?;

    let mut response = Response::new()
        .add_attribute("action", "sell_one")
        .add_event(
            Event::new("token_sold")
                .add_attribute("seller", info.sender.as_str())
                .add_attribute("unit_id", unit_id.to_string())
                .add_attribute("price", payout),
        );
    if !payout.is_zero() {
        response = response.add_message(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: coins(payout.u128(), config.denom),
        });
    }

    Ok(response)
}

/// Oracle median for the configured symbol at call time.
fn current_price(deps: Deps, config: &Config) -> Result<Uint128, ContractError> {
    OracleContract(config.oracle.clone())
        .median_price(&deps.querier, &config.symbol)?
        .ok_or_else(|| ContractError::NoData {
            symbol: config.symbol.clone(),
        })
}

/// Sum of the attached coins, all of which must be in `denom`.
fn paid_amount(info: &MessageInfo, denom: &str) -> Result<Uint128, ContractError> {
    info.funds.iter().try_fold(Uint128::zero(), |total, coin| {
        if coin.denom != denom {
            return Err(ContractError::UnsupportedDenom {
                denom: coin.denom.clone(),
            });
        }
        Ok(total.checked_add(coin.amount)?)
    })
}

fn nonpayable(info: &MessageInfo) -> Result<(), ContractError> {
    if info.funds.is_empty() {
        Ok(())
    } else {
        Err(ContractError::NonPayable {})
    }
}

/// Missing units and units held by someone else both count as not owned.
fn load_owned(deps: Deps, info: &MessageInfo, unit_id: u64) -> Result<Unit, ContractError> {
    units()
        .may_load(deps.storage, unit_id)?
        .filter(|unit| unit.owner == info.sender)
        .ok_or(ContractError::NotOwner { unit_id })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let binary = match msg {
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?)?,
        QueryMsg::OwnerOf { unit_id } => to_json_binary(&query_owner_of(deps, unit_id)?)?,
        QueryMsg::UnitsOf {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_units_of(deps, owner, start_after, limit)?)?,
        QueryMsg::Quote {} => to_json_binary(&query_quote(deps)?)?,
        QueryMsg::Pool {} => to_json_binary(&query_pool(deps, env)?)?,
    };
    Ok(binary)
}

pub fn query_owner_of(deps: Deps, unit_id: u64) -> StdResult<OwnerOfResponse> {
    let unit = units().load(deps.storage, unit_id)?;
    Ok(OwnerOfResponse {
        unit_id,
        owner: unit.owner,
        approved: unit.approved,
    })
}

pub fn query_units_of(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<UnitsResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let unit_ids = units()
        .idx
        .owner
        .prefix(owner)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(UnitsResponse { units: unit_ids })
}

pub fn query_quote(deps: Deps) -> Result<QuoteResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let price = current_price(deps, &config)?;
    Ok(QuoteResponse {
        symbol: config.symbol,
        price,
    })
}

pub fn query_pool(deps: Deps, env: Env) -> StdResult<PoolResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address.as_str(), config.denom.as_str())?;
    Ok(PoolResponse { balance })
}
