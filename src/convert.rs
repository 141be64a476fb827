//! Share/asset conversion for ERC-4626 vaults
//!
//! A vault share is worth `price_per_share / 10^vault_decimals` units of the
//! underlying asset. Conversions here follow the rounding rule that the user
//! is never under-delivered: shares-to-assets floors (display of expected
//! output), assets-to-shares ceils (shares required to cover a target asset
//! amount). A zero price-per-share means the ratio is not loaded yet, and
//! every conversion degrades to zero instead of dividing by it.

use alloy::primitives::{U256, U512};

use crate::constants::pow10;

/// Asset amount received for redeeming `shares`.
///
/// `floor(shares * price_per_share / 10^vault_decimals)`. Monotonic
/// non-decreasing in `shares`.
pub fn shares_to_assets(shares: U256, price_per_share: U256, vault_decimals: u8) -> U256 {
    if shares.is_zero() || price_per_share.is_zero() {
        return U256::ZERO;
    }
    let product = U512::from(shares) * U512::from(price_per_share);
    U256::saturating_from(product / U512::from(pow10(vault_decimals)))
}

/// Shares required to receive at least `assets`.
///
/// `ceil(assets * 10^vault_decimals / price_per_share)`. Ceiling, not floor:
/// redeeming the result always yields an asset amount `>= assets`, at the
/// cost of at most one share-unit of excess.
pub fn assets_to_shares(assets: U256, price_per_share: U256, vault_decimals: u8) -> U256 {
    if assets.is_zero() || price_per_share.is_zero() {
        return U256::ZERO;
    }
    let numerator = U512::from(assets) * U512::from(pow10(vault_decimals));
    let divisor = U512::from(price_per_share);
    U256::saturating_from((numerator + divisor - U512::from(1u8)) / divisor)
}

/// What the user asked to redeem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedeemTarget {
    /// Redeem enough shares to receive this asset amount.
    Assets(U256),
    /// Redeem the entire held balance.
    Max,
}

/// Shares to redeem for a withdrawal, clamped to the held balance.
///
/// `Max` uses the exact held share balance rather than converting back from a
/// displayed asset amount, so no dust is left behind and no more than the
/// balance is ever requested. A target asset amount goes through the ceiling
/// conversion, then the same clamp.
pub fn shares_for_redeem(
    target: RedeemTarget,
    held_shares: U256,
    price_per_share: U256,
    vault_decimals: u8,
) -> U256 {
    match target {
        RedeemTarget::Max => held_shares,
        RedeemTarget::Assets(assets) => {
            assets_to_shares(assets, price_per_share, vault_decimals).min(held_shares)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECIMALS: u8 = 6;

    fn one() -> U256 {
        pow10(DECIMALS)
    }

    #[test]
    fn test_one_to_one_ratio_is_identity() {
        let amount = U256::from(123_456_789u64);
        assert_eq!(shares_to_assets(amount, one(), DECIMALS), amount);
        assert_eq!(assets_to_shares(amount, one(), DECIMALS), amount);
    }

    #[test]
    fn test_shares_to_assets_floors() {
        // 1 share at pps 2.0 (1e6 scale) = 2 units of asset
        assert_eq!(
            shares_to_assets(U256::from(1_000_000u64), U256::from(2_000_000u64), DECIMALS),
            U256::from(2_000_000u64)
        );
        // 1 share at pps 1.5 = 1.5 units; 1 raw share at pps 1.5 floors to 1
        assert_eq!(
            shares_to_assets(U256::from(1u64), U256::from(1_500_000u64), DECIMALS),
            U256::from(1u64)
        );
    }

    #[test]
    fn test_assets_to_shares_ceils() {
        // 1.000001 assets at pps 2.0 needs 0.5000005 shares; ceiling gives
        // 500001 raw shares, not 500000
        assert_eq!(
            assets_to_shares(U256::from(1_000_001u64), U256::from(2_000_000u64), DECIMALS),
            U256::from(500_001u64)
        );
        assert_eq!(
            assets_to_shares(U256::from(1_000_000u64), U256::from(2_000_000u64), DECIMALS),
            U256::from(500_000u64)
        );
    }

    #[test]
    fn test_zero_price_per_share_degrades_to_zero() {
        let x = U256::from(1_000_000u64);
        assert_eq!(shares_to_assets(x, U256::ZERO, DECIMALS), U256::ZERO);
        assert_eq!(assets_to_shares(x, U256::ZERO, DECIMALS), U256::ZERO);
        assert_eq!(shares_to_assets(U256::ZERO, one(), DECIMALS), U256::ZERO);
        assert_eq!(assets_to_shares(U256::ZERO, one(), DECIMALS), U256::ZERO);
    }

    #[test]
    fn test_round_trip_never_under_delivers() {
        let prices = [
            U256::from(1u64),
            U256::from(999_999u64),
            U256::from(1_000_000u64),
            U256::from(1_034_567u64),
            U256::from(2_000_000u64),
            U256::from(123_456_789u64),
        ];
        let amounts = [
            U256::from(1u64),
            U256::from(17u64),
            U256::from(1_000_001u64),
            U256::from(987_654_321u64),
        ];
        for pps in prices {
            for assets in amounts {
                let shares = assets_to_shares(assets, pps, DECIMALS);
                let received = shares_to_assets(shares, pps, DECIMALS);
                assert!(
                    received >= assets,
                    "under-delivered: {assets} -> {shares} -> {received} at pps {pps}"
                );
                // Excess is bounded by one share's worth of asset
                let excess = received - assets;
                let bound = shares_to_assets(U256::from(1u64), pps, DECIMALS) + U256::from(1u64);
                assert!(excess <= bound, "excess {excess} above bound {bound}");
            }
        }
    }

    #[test]
    fn test_monotonic_in_shares() {
        let pps = U256::from(1_034_567u64);
        let mut previous = U256::ZERO;
        for raw in [0u64, 1, 2, 999_999, 1_000_000, 1_000_001, 5_000_000] {
            let assets = shares_to_assets(U256::from(raw), pps, DECIMALS);
            assert!(assets >= previous);
            previous = assets;
        }
    }

    #[test]
    fn test_large_values_do_not_overflow() {
        // A whale position: 10^30 raw shares at an 18-decimal pps
        let shares = pow10(30);
        let pps = pow10(18) * U256::from(3u64);
        assert_eq!(shares_to_assets(shares, pps, 18), shares * U256::from(3u64));
    }

    #[test]
    fn test_redeem_max_uses_held_balance_exactly() {
        let held = U256::from(123_456_789u64);
        assert_eq!(
            shares_for_redeem(RedeemTarget::Max, held, U256::from(1_100_000u64), DECIMALS),
            held
        );
        // Max works even while the ratio is still loading
        assert_eq!(
            shares_for_redeem(RedeemTarget::Max, held, U256::ZERO, DECIMALS),
            held
        );
    }

    #[test]
    fn test_redeem_target_clamps_to_held_balance() {
        let pps = U256::from(2_000_000u64);
        let held = U256::from(400_000u64);
        // Needs 500001 shares but only 400000 are held
        assert_eq!(
            shares_for_redeem(
                RedeemTarget::Assets(U256::from(1_000_001u64)),
                held,
                pps,
                DECIMALS
            ),
            held
        );
        // Within balance: plain ceiling conversion
        assert_eq!(
            shares_for_redeem(
                RedeemTarget::Assets(U256::from(600_000u64)),
                held,
                pps,
                DECIMALS
            ),
            U256::from(300_000u64)
        );
    }
}
