//! Exchange that sells and buys back unique units of one asset at whatever
//! median price the trustful oracle reports at the moment of the call.

pub mod contract;
mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
