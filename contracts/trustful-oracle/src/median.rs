use cosmwasm_std::Uint128;

/// Median of `prices`, sorting the slice in place.
///
/// Odd lengths return the middle element. Even lengths return the floor of
/// the mean of the two middle elements. An empty slice has no median.
pub fn median_price(prices: &mut [Uint128]) -> Option<Uint128> {
    if prices.is_empty() {
        return None;
    }
    prices.sort_unstable();

    let mid = prices.len() / 2;
    if prices.len() % 2 == 1 {
        return Some(prices[mid]);
    }

    // lo + (hi - lo) / 2 cannot overflow, unlike (lo + hi) / 2
    let lo = prices[mid - 1].u128();
    let hi = prices[mid].u128();
    Some(Uint128::new(lo + (hi - lo) / 2))
}
