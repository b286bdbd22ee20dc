//! Price oracle that reports the median of prices posted by a fixed set of
//! trusted sources. Any trusted source moves the median the moment its
//! post is executed; there is no staleness window or deviation cap.

pub mod contract;
mod error;
pub mod helpers;
pub mod median;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
pub use crate::helpers::OracleContract;
