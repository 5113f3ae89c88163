//! Deploy the SSC engine to Casper livenet/testnet using the Odra livenet
//! environment.
//!
//! Usage:
//!   cargo run --bin deploy_livenet --release
//!
//! Requires .env file with:
//!   ODRA_CASPER_LIVENET_SECRET_KEY_PATH=/path/to/secret_key.pem
//!   ODRA_CASPER_LIVENET_NODE_ADDRESS=https://node.testnet.casper.network
//!   ODRA_CASPER_LIVENET_CHAIN_NAME=casper-test
//!   ODRA_CASPER_LIVENET_PAYMENT_AMOUNT=200000000000

use odra::casper_types::U256;
use odra::host::{Deployer, HostRef};
use odra::prelude::*;

use ssc_engine_contracts::engine::{SscEngine, SscEngineInitArgs};
use ssc_engine_contracts::price_feed::{PriceFeed, PriceFeedInitArgs};
use ssc_engine_contracts::stablecoin::{StableCoin, StableCoinInitArgs};

fn main() {
    // Load environment from .env file
    dotenv::dotenv().ok();

    println!("=== SSC Engine Livenet Deployment ===");
    println!();

    // Initialize Odra livenet environment
    let env = odra_casper_livenet_env::env();

    // Configure payment amount for deployments/calls (required for Casper 2.0 txs)
    let payment_amount: u64 = std::env::var("ODRA_CASPER_LIVENET_PAYMENT_AMOUNT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(200_000_000_000);
    env.set_gas(payment_amount);

    let deployer = env.caller();
    println!("Deployer: {:?}", deployer);
    println!();

    // Initial feed prices, 8 feed decimals
    let eth_usd_price = U256::from(200_000_000_000u64); // $2000
    let btc_usd_price = U256::from(100_000_000_000u64); // $1000
    let feed_decimals: u8 = 8;

    // ==================== Phase 1: Price Feeds ====================
    println!("=== Phase 1: Deploying Price Feeds ===");
    println!();

    println!("Deploying ETH/USD PriceFeed...");
    let eth_feed = PriceFeed::deploy(
        &env,
        PriceFeedInitArgs {
            initial_price: eth_usd_price,
            decimals: feed_decimals,
        },
    );
    let eth_feed_addr = eth_feed.address().clone();
    println!("ETH/USD PriceFeed deployed at: {:?}", eth_feed_addr);

    println!("Deploying BTC/USD PriceFeed...");
    let btc_feed = PriceFeed::deploy(
        &env,
        PriceFeedInitArgs {
            initial_price: btc_usd_price,
            decimals: feed_decimals,
        },
    );
    let btc_feed_addr = btc_feed.address().clone();
    println!("BTC/USD PriceFeed deployed at: {:?}", btc_feed_addr);

    println!();

    // ==================== Phase 2: Tokens ====================
    println!("=== Phase 2: Deploying Tokens ===");
    println!();

    println!("Deploying WETH collateral token...");
    let weth = StableCoin::deploy(
        &env,
        StableCoinInitArgs {
            name: String::from("Wrapped ETH"),
            symbol: String::from("WETH"),
            decimals: 18,
        },
    );
    let weth_addr = weth.address().clone();
    println!("WETH deployed at: {:?}", weth_addr);

    println!("Deploying WBTC collateral token...");
    let wbtc = StableCoin::deploy(
        &env,
        StableCoinInitArgs {
            name: String::from("Wrapped BTC"),
            symbol: String::from("WBTC"),
            decimals: 18,
        },
    );
    let wbtc_addr = wbtc.address().clone();
    println!("WBTC deployed at: {:?}", wbtc_addr);

    println!("Deploying SSC stablecoin...");
    let mut ssc = StableCoin::deploy(
        &env,
        StableCoinInitArgs {
            name: String::from("Srj Stable Coin"),
            symbol: String::from("SSC"),
            decimals: 18,
        },
    );
    let ssc_addr = ssc.address().clone();
    println!("SSC deployed at: {:?}", ssc_addr);

    println!();

    // ==================== Phase 3: Engine ====================
    println!("=== Phase 3: Deploying Engine ===");
    println!();

    println!("Deploying SscEngine...");
    let engine = SscEngine::deploy(
        &env,
        SscEngineInitArgs {
            tokens: vec![weth_addr, wbtc_addr],
            feeds: vec![eth_feed_addr, btc_feed_addr],
            ssc_token: ssc_addr,
        },
    );
    let engine_addr = engine.address().clone();
    println!("SscEngine deployed at: {:?}", engine_addr);

    println!();

    // ==================== Phase 4: Cross-contract Configuration ====================
    println!("=== Phase 4: Cross-contract Configuration ===");
    println!();

    // The engine must be the only party able to mint and burn SSC.
    println!("Transferring SSC ownership to the engine...");
    ssc.transfer_ownership(engine_addr);
    println!("Done.");

    println!();
    println!("=== Deployment Complete ===");
    println!();
    println!("Contract Addresses:");
    println!("  SscEngine:         {:?}", engine_addr);
    println!("  SSC:               {:?}", ssc_addr);
    println!("  WETH:              {:?}", weth_addr);
    println!("  WBTC:              {:?}", wbtc_addr);
    println!("  ETH/USD PriceFeed: {:?}", eth_feed_addr);
    println!("  BTC/USD PriceFeed: {:?}", btc_feed_addr);
}
