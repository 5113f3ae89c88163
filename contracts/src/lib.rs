//! SSC Engine Contracts
//!
//! Collateralized-debt issuance engine for the SSC pegged stable unit.
//!
//! ## Architecture
//!
//! - **SscEngine**: collateral custody, SSC issuance, and the health
//!   factor invariant gating every state change
//! - **StableCoin (SSC)**: CEP-18 compatible pegged unit with owner-gated
//!   mint/burn (the engine holds ownership)
//! - **PriceFeed**: push-model USD price feed, one per collateral token
//! - **oracle**: feed client plus fixed-point USD conversion math
//! - **health**: health factor calculation and the minimum safe ratio
//!
//! ## Solvency Invariant
//!
//! Every operation that can degrade an account (mint, redeem) re-checks the
//! health factor after its own state changes and reverts in full when the
//! account would fall below the minimum. Deposits and burns only ever
//! improve the factor and skip the check.

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod errors;
pub mod health;
pub mod oracle;
pub mod types;

// Contract modules
pub mod engine;
pub mod price_feed;
pub mod stablecoin;
