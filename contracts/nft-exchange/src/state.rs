use cosmwasm_std::Addr;
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, MultiIndex};
use serde::{Deserialize, Serialize};

/// How a buy payment is checked against the quoted price.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentPolicy {
    /// Payment must equal the price.
    Exact,
    /// Payment must cover the price; the excess is refunded.
    #[default]
    AtLeast,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub oracle: Addr,
    pub symbol: String,
    pub denom: String,
    pub payment_policy: PaymentPolicy,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    pub owner: Addr,
    pub approved: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const NEXT_UNIT_ID: Item<u64> = Item::new("next_unit_id");

pub struct UnitIndexes<'a> {
    pub owner: MultiIndex<'a, Addr, Unit, u64>,
}

impl<'a> IndexList<Unit> for UnitIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<Unit>> + '_> {
        let v: Vec<&dyn Index<Unit>> = vec![&self.owner];
        Box::new(v.into_iter())
    }
}

/// Every unit ever minted, indexed by owner so per-owner listings never
/// walk the whole arena. Sold units stay here, owned by the exchange.
pub fn units<'a>() -> IndexedMap<u64, Unit, UnitIndexes<'a>> {
    let indexes = UnitIndexes {
        owner: MultiIndex::new(|_pk, unit: &Unit| unit.owner.clone(), "units", "units__owner"),
    };
    IndexedMap::new("units", indexes)
}
