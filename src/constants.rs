//! Constants and precision values for vaultkit

use alloy::primitives::U256;

/// USDC has 6 decimals
pub const USDC_DECIMALS: u8 = 6;

/// Slippage uses 2 decimals (percentage * 100 = basis points)
/// e.g., 0.5% slippage = 50
pub const SLIPPAGE_DECIMALS: u8 = 2;

/// Maximum slippage allowed (100%)
pub const MAX_SLIPPAGE: f64 = 100.0;

/// Default slippage (0.5%)
pub const DEFAULT_SLIPPAGE: f64 = 0.5;

/// `10^decimals` as a U256
pub fn pow10(decimals: u8) -> U256 {
    U256::from(10u64).pow(U256::from(decimals))
}

/// Scale slippage to basis points (percentage * 100)
pub fn scale_slippage(slippage_percent: f64) -> u16 {
    (slippage_percent * 100.0) as u16
}

/// Unscale a U256 value to floating point with specified decimals.
///
/// Lossy above 2^53; display only.
pub fn unscale_from_decimals(value: U256, decimals: u8) -> f64 {
    let divisor = 10u64.pow(decimals as u32) as f64;
    let value_u128: u128 = value.try_into().unwrap_or(u128::MAX);
    value_u128 as f64 / divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), U256::from(1u64));
        assert_eq!(pow10(6), U256::from(1_000_000u64));
        assert_eq!(pow10(18), U256::from(1_000_000_000_000_000_000u64));
    }

    #[test]
    fn test_scale_slippage() {
        // 0.5% slippage = 50 bps
        assert_eq!(scale_slippage(0.5), 50);
        // 2% slippage = 200
        assert_eq!(scale_slippage(2.0), 200);
    }

    #[test]
    fn test_unscale_from_decimals() {
        // 100 USDC = 100_000_000 (6 decimals)
        assert_eq!(unscale_from_decimals(U256::from(100_000_000u64), 6), 100.0);
        assert_eq!(unscale_from_decimals(U256::from(500_000u64), 6), 0.5);
    }
}
