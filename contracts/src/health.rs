//! Health factor model for account solvency checks.
//!
//! The health factor is the ratio of threshold-discounted collateral value
//! to outstanding SSC debt, in 1e18 fixed point. Accounts with no debt are
//! always healthy.

use odra::casper_types::U256;

/// Share of collateral value that counts toward backing debt (50%)
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Denominator for the liquidation threshold (percent scale)
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Internal fixed-point scale (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Minimum safe health factor (1.0 in 1e18 fixed point)
pub const MIN_HEALTH_FACTOR: u128 = 1_000_000_000_000_000_000;

/// Calculate the health factor for an account.
///
/// `collateral_usd_value` and `ssc_minted` are both 18-decimal amounts.
/// With no debt the factor is `U256::MAX`: an account that owes nothing can
/// never be blocked by the solvency check.
///
/// factor = (collateral_usd * threshold / 100) * 1e18 / debt
pub fn health_factor(collateral_usd_value: U256, ssc_minted: U256) -> U256 {
    if ssc_minted.is_zero() {
        return U256::MAX;
    }

    let adjusted_collateral = collateral_usd_value * U256::from(LIQUIDATION_THRESHOLD)
        / U256::from(LIQUIDATION_PRECISION);

    adjusted_collateral * U256::from(PRECISION) / ssc_minted
}

/// Whether a health factor clears the minimum safe ratio.
pub fn is_healthy(factor: U256) -> bool {
    factor >= U256::from(MIN_HEALTH_FACTOR)
}
