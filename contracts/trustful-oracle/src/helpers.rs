use cosmwasm_std::{Addr, QuerierWrapper, StdResult, Uint128};

use crate::msg::{CurrentMedianResponse, QueryMsg};

/// Handle for contracts that price assets off a deployed oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OracleContract(pub Addr);

impl OracleContract {
    pub fn addr(&self) -> &Addr {
        &self.0
    }

    /// Current median for `symbol`, read at call time. `None` if no source
    /// has posted for it, so callers can report that in their own error type.
    pub fn median_price(
        &self,
        querier: &QuerierWrapper,
        symbol: &str,
    ) -> StdResult<Option<Uint128>> {
        let res: CurrentMedianResponse = querier.query_wasm_smart(
            self.0.as_str(),
            &QueryMsg::CurrentMedian {
                symbol: symbol.to_string(),
            },
        )?;
        Ok(res.price)
    }
}
