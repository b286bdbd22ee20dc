use cosmwasm_std::{Addr, Empty, Uint128};
use cw_storage_plus::Map;

/// Trusted reporters, fixed at instantiation.
pub const TRUSTED_SOURCES: Map<&Addr, Empty> = Map::new("trusted_sources");

/// Latest price per (symbol, source). A new post overwrites the entry.
pub const PRICES: Map<(&str, &Addr), Uint128> = Map::new("prices");
