//! Price feed client and USD conversion math.
//!
//! One external feed backs each registered collateral token. Feeds report
//! integer fixed-point prices with a declared decimal count (Chainlink-style
//! feeds use 8); collateral amounts use 18 decimals. All conversion math is
//! integer fixed-point with explicit rescaling, never floating point.

use odra::casper_types::{runtime_args, U256};
use odra::prelude::*;
use odra::CallDef;

use crate::errors::SscError;
use crate::types::PriceQuote;

/// Maximum quote age before it is rejected as stale (1 hour of block time)
pub const MAX_PRICE_AGE_MILLIS: u64 = 3_600_000;

/// Fixed-point scale for USD values and token amounts (1e18)
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// Decimal count USD values and token amounts are expressed in
pub const VALUE_DECIMALS: u8 = 18;

/// Read the latest quote from a price feed contract.
pub fn fetch_quote(env: &odra::ContractEnv, feed: Address) -> PriceQuote {
    let call_def = CallDef::new("latest_quote", false, runtime_args! {});
    env.call_contract(feed, call_def)
}

/// Validate a quote against zero-price and staleness rules.
///
/// A quote older than [`MAX_PRICE_AGE_MILLIS`] is stale even if the feed
/// never reported a failure; freshness beyond that window is the feed's
/// responsibility.
pub fn validate_quote(quote: &PriceQuote, now: u64) -> Result<(), SscError> {
    if quote.price.is_zero() || quote.decimals > VALUE_DECIMALS {
        return Err(SscError::InvalidPrice);
    }
    if now.saturating_sub(quote.updated_at) > MAX_PRICE_AGE_MILLIS {
        return Err(SscError::StalePrice);
    }
    Ok(())
}

/// USD value (18 decimals) of a token amount (18 decimals) at a quoted price.
///
/// value = amount * (price * 10^(18 - feed_decimals)) / 1e18
pub fn usd_value(amount: U256, price: U256, feed_decimals: u8) -> U256 {
    amount * rescaled_price(price, feed_decimals) / U256::from(PRECISION)
}

/// Token amount (18 decimals) worth a USD amount (18 decimals) at a quoted price.
///
/// amount = usd * 1e18 / (price * 10^(18 - feed_decimals))
pub fn token_amount_from_usd(usd_amount: U256, price: U256, feed_decimals: u8) -> U256 {
    usd_amount * U256::from(PRECISION) / rescaled_price(price, feed_decimals)
}

/// Rescale a feed price to 18 decimals.
fn rescaled_price(price: U256, feed_decimals: u8) -> U256 {
    let missing = (VALUE_DECIMALS - feed_decimals) as u64;
    price * U256::from(10u64).pow(U256::from(missing))
}
