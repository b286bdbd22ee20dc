#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, Event, MessageInfo, Order, Response,
    StdResult, Storage, Uint128,
};

use crate::error::ContractError;
use crate::median::median_price;
use crate::msg::{
    AllPricesResponse, CurrentMedianResponse, ExecuteMsg, InstantiateMsg, MedianPriceResponse,
    PriceBySourceResponse, QueryMsg, SourcePrice, SourcesResponse,
};
use crate::state::{PRICES, TRUSTED_SOURCES};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if msg.sources.is_empty() {
        return Err(ContractError::NoSources {});
    }
    for source in &msg.sources {
        let source = deps.api.addr_validate(source)?;
        TRUSTED_SOURCES.save(deps.storage, &source, &Empty {})?;
    }

    let mut response = Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("initializer", info.sender)
        .add_attribute("sources", msg.sources.len().to_string());

    // Seeded prices go through the same trust check as a live post
    for initial in msg.initial_prices {
        let source = deps.api.addr_validate(&initial.source)?;
        let event = set_price(deps.storage, &source, &initial.symbol, initial.price)?;
        response = response.add_event(event);
    }

    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::PostPrice { symbol, price } => execute_post_price(deps, info, symbol, price),
    }
}

pub fn execute_post_price(
    deps: DepsMut,
    info: MessageInfo,
    symbol: String,
    price: Uint128,
) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::NonPayable {});
    }
    let event = set_price(deps.storage, &info.sender, &symbol, price)?;

    Ok(Response::new()
        .add_attribute("action", "post_price")
        .add_attribute("source", info.sender)
        .add_event(event))
}

/// Overwrites the price `source` reports for `symbol`. No bound is placed on
/// `price`: a trusted source is believed unconditionally.
fn set_price(
    storage: &mut dyn Storage,
    source: &Addr,
    symbol: &str,
    price: Uint128,
) -> Result<Event, ContractError> {
    if !TRUSTED_SOURCES.has(storage, source) {
        return Err(ContractError::Unauthorized {
            sender: source.to_string(),
        });
    }

    let old_price = PRICES
        .may_load(storage, (symbol, source))?
        .unwrap_or_default();
    PRICES.save(storage, (symbol, source), &price)?;

    Ok(Event::new("updated_price")
        .add_attribute("source", source.as_str())
        .add_attribute("symbol", symbol)
        .add_attribute("old_price", old_price)
        .add_attribute("new_price", price))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let binary = match msg {
        QueryMsg::MedianPrice { symbol } => to_json_binary(&query_median_price(deps, symbol)?)?,
        QueryMsg::CurrentMedian { symbol } => {
            to_json_binary(&query_current_median(deps, symbol)?)?
        }
        QueryMsg::AllPrices { symbol } => to_json_binary(&query_all_prices(deps, symbol)?)?,
        QueryMsg::PriceBySource { source, symbol } => {
            to_json_binary(&query_price_by_source(deps, source, symbol)?)?
        }
        QueryMsg::Sources {} => to_json_binary(&query_sources(deps)?)?,
    };
    Ok(binary)
}

/// Recomputed from the live postings on every call.
fn current_median(deps: Deps, symbol: &str) -> StdResult<Option<Uint128>> {
    let mut prices = PRICES
        .prefix(symbol)
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, price)| price))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(median_price(&mut prices))
}

pub fn query_median_price(
    deps: Deps,
    symbol: String,
) -> Result<MedianPriceResponse, ContractError> {
    match current_median(deps, &symbol)? {
        Some(price) => Ok(MedianPriceResponse { symbol, price }),
        None => Err(ContractError::NoData { symbol }),
    }
}

pub fn query_current_median(deps: Deps, symbol: String) -> StdResult<CurrentMedianResponse> {
    let price = current_median(deps, &symbol)?;
    Ok(CurrentMedianResponse { symbol, price })
}

pub fn query_all_prices(deps: Deps, symbol: String) -> StdResult<AllPricesResponse> {
    let prices = PRICES
        .prefix(symbol.as_str())
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(source, price)| SourcePrice { source, price }))
        .collect::<StdResult<Vec<_>>>()?;
    Ok(AllPricesResponse { symbol, prices })
}

pub fn query_price_by_source(
    deps: Deps,
    source: String,
    symbol: String,
) -> StdResult<PriceBySourceResponse> {
    let source = deps.api.addr_validate(&source)?;
    let price = PRICES.may_load(deps.storage, (symbol.as_str(), &source))?;
    Ok(PriceBySourceResponse { price })
}

pub fn query_sources(deps: Deps) -> StdResult<SourcesResponse> {
    let sources = TRUSTED_SOURCES
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<_>>>()?;
    Ok(SourcesResponse { sources })
}
