use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{sender} is not a trusted source")]
    Unauthorized { sender: String },

    #[error("no price data for symbol {symbol}")]
    NoData { symbol: String },

    #[error("oracle needs at least one trusted source")]
    NoSources {},

    #[error("oracle does not accept funds")]
    NonPayable {},
}
