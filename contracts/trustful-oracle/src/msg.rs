use cosmwasm_std::{Addr, Uint128};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InitialPrice {
    pub source: String,
    pub symbol: String,
    pub price: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InstantiateMsg {
    pub sources: Vec<String>,
    #[serde(default)]
    pub initial_prices: Vec<InitialPrice>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Only callable by a trusted source. Replaces the sender's price for `symbol`.
    PostPrice { symbol: String, price: Uint128 },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Fails with `NoData` when nobody has posted for `symbol`.
    MedianPrice { symbol: String },
    /// Same median, but an unposted symbol answers `price: None`.
    CurrentMedian { symbol: String },
    AllPrices { symbol: String },
    PriceBySource { source: String, symbol: String },
    Sources {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MedianPriceResponse {
    pub symbol: String,
    pub price: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CurrentMedianResponse {
    pub symbol: String,
    pub price: Option<Uint128>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SourcePrice {
    pub source: Addr,
    pub price: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AllPricesResponse {
    pub symbol: String,
    pub prices: Vec<SourcePrice>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PriceBySourceResponse {
    pub price: Option<Uint128>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SourcesResponse {
    pub sources: Vec<Addr>,
}
