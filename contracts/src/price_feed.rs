//! USD price feed contract.
//!
//! Minimal push-model feed: an authorized feeder account posts integer
//! fixed-point prices with a declared decimal count (8 for Chainlink-style
//! wiring). The engine reads `latest_quote` and applies its own zero-price
//! and staleness validation, so the feed itself stays dumb. Doubles as the
//! deterministic price source in tests.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::SscError;
use crate::types::PriceQuote;

/// USD price feed for a single asset
#[odra::module]
pub struct PriceFeed {
    /// Latest posted price (fixed point, `decimals` places)
    price: Var<U256>,
    /// Decimal places for the price
    decimals: Var<u8>,
    /// Block time of the last price update
    updated_at: Var<u64>,
    /// Account allowed to post prices
    feeder: Var<Address>,
}

#[odra::module]
impl PriceFeed {
    /// Initialize the feed with an initial price; the deployer becomes the feeder.
    pub fn init(&mut self, initial_price: U256, decimals: u8) {
        self.price.set(initial_price);
        self.decimals.set(decimals);
        self.updated_at.set(self.env().get_block_time());
        self.feeder.set(self.env().caller());
    }

    /// Latest quote with its update timestamp.
    pub fn latest_quote(&self) -> PriceQuote {
        PriceQuote {
            price: self.price.get().unwrap_or(U256::zero()),
            decimals: self.decimals.get().unwrap_or(0),
            updated_at: self.updated_at.get().unwrap_or(0),
        }
    }

    /// Post a new price (feeder only). Zero is accepted and left for the
    /// consumer to reject, matching feeds that can report bad rounds.
    pub fn set_price(&mut self, price: U256) {
        self.require_feeder();
        self.price.set(price);
        self.updated_at.set(self.env().get_block_time());
    }

    /// Hand the feeder role to another account (feeder only).
    pub fn set_feeder(&mut self, feeder: Address) {
        self.require_feeder();
        self.feeder.set(feeder);
    }

    /// Current feeder account.
    pub fn get_feeder(&self) -> Option<Address> {
        self.feeder.get()
    }

    fn require_feeder(&self) {
        let caller = self.env().caller();
        match self.feeder.get() {
            Some(feeder) if caller == feeder => {}
            _ => self.env().revert(SscError::Unauthorized),
        }
    }
}
