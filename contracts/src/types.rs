//! Common types used across the SSC engine.

use odra::casper_types::U256;
use odra::prelude::*;

/// Price data returned by a USD price feed
#[odra::odra_type]
#[derive(Copy)]
pub struct PriceQuote {
    /// Integer fixed-point price (USD per whole token, `decimals` places)
    pub price: U256,
    /// Decimal places for `price`
    pub decimals: u8,
    /// Block time of the last feed update
    pub updated_at: u64,
}

/// Aggregate account view exposed by the engine
#[odra::odra_type]
pub struct AccountSummary {
    /// Outstanding minted SSC debt
    pub ssc_minted: U256,
    /// Total collateral value in USD (18 decimals)
    pub collateral_usd_value: U256,
}
