use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("payment of {paid} does not meet current price {price}")]
    InsufficientPayment { paid: Uint128, price: Uint128 },

    #[error("payment must be greater than zero")]
    ZeroPayment {},

    #[error("sender does not own unit {unit_id}")]
    NotOwner { unit_id: u64 },

    #[error("exchange is not approved to take unit {unit_id}")]
    NotApproved { unit_id: u64 },

    #[error("pool balance {pool} cannot cover payout {payout}")]
    InsufficientPool { pool: Uint128, payout: Uint128 },

    #[error("no price data for symbol {symbol}")]
    NoData { symbol: String },

    #[error("{spender} cannot be approved; only the exchange can take units")]
    InvalidSpender { spender: String },

    #[error("unsupported denom {denom}")]
    UnsupportedDenom { denom: String },

    #[error("this message does not accept funds")]
    NonPayable {},
}
