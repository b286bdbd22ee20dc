use cosmwasm_std::{Addr, Coin, Uint128};
use serde::{Deserialize, Serialize};

use crate::state::PaymentPolicy;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstantiateMsg {
    pub oracle: String,
    pub symbol: String,
    pub denom: String,
    #[serde(default)]
    pub payment_policy: Option<PaymentPolicy>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Pay the current oracle price and receive a freshly minted unit.
    BuyOne {},
    /// Let `spender` take `unit_id`. The exchange is the only spender that
    /// can ever move a unit, so any other address is rejected.
    Approve { spender: String, unit_id: u64 },
    Revoke { unit_id: u64 },
    /// Hand `unit_id` to the exchange for the current oracle price.
    SellOne { unit_id: u64 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    OwnerOf { unit_id: u64 },
    /// Unit ids held by `owner`, ascending, at most `limit` per page.
    UnitsOf {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    Quote {},
    Pool {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct OwnerOfResponse {
    pub unit_id: u64,
    pub owner: Addr,
    pub approved: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UnitsResponse {
    pub units: Vec<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuoteResponse {
    pub symbol: String,
    pub price: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PoolResponse {
    pub balance: Coin,
}
