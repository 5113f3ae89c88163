//! SSC Engine Contract
//!
//! Orchestrates collateral custody and SSC issuance:
//! - Per-user, per-token collateral bookkeeping
//! - Mint/burn of SSC against the external token contract
//! - Health factor enforcement after every state-degrading operation
//!
//! The accepted collateral set and its price feeds are fixed at init and
//! immutable afterwards. Every entry point either completes in full or
//! reverts with a typed error, leaving no partial state behind.

use odra::casper_types::{runtime_args, U256};
use odra::prelude::*;
use odra::CallDef;

use crate::errors::SscError;
use crate::health;
use crate::oracle;
use crate::types::{AccountSummary, PriceQuote};

/// SSC Engine Contract
#[odra::module]
pub struct SscEngine {
    /// SSC token contract address (engine holds mint authority)
    ssc_token: Var<Address>,
    /// Registered collateral token addresses, fixed at init
    collateral_tokens: Var<Vec<Address>>,
    /// Price feed per collateral token
    price_feeds: Mapping<Address, Address>,
    /// Collateral balances by (user, token)
    collateral_deposited: Mapping<(Address, Address), U256>,
    /// Outstanding minted SSC per user
    ssc_minted: Mapping<Address, U256>,
}

#[odra::module]
impl SscEngine {
    /// Initialize the engine with the immutable (token, feed) pairs and the
    /// SSC token address. `tokens` and `feeds` are parallel vectors.
    pub fn init(&mut self, tokens: Vec<Address>, feeds: Vec<Address>, ssc_token: Address) {
        if tokens.is_empty() || tokens.len() != feeds.len() {
            self.env().revert(SscError::InvalidConfig);
        }

        for (token, feed) in tokens.iter().zip(feeds.iter()) {
            self.price_feeds.set(token, *feed);
        }
        self.collateral_tokens.set(tokens);
        self.ssc_token.set(ssc_token);
    }

    // ========== Public Operations ==========

    /// Deposit collateral into engine custody.
    ///
    /// Pulls `amount` of `token` from the caller (requires prior approval)
    /// and credits the caller's ledger balance. Deposits only ever improve
    /// the health factor, so no solvency check runs.
    pub fn deposit_collateral(&mut self, token: Address, amount: U256) {
        let caller = self.env().caller();
        self.deposit_internal(caller, token, amount);
    }

    /// Mint SSC against the caller's collateral.
    ///
    /// Reverts with `BreaksHealthFactor` if the resulting debt is not
    /// covered by threshold-discounted collateral value.
    pub fn mint_ssc(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.mint_internal(caller, amount);
    }

    /// Deposit collateral and mint SSC in one call.
    pub fn deposit_collateral_and_mint_ssc(
        &mut self,
        token: Address,
        amount: U256,
        mint_amount: U256,
    ) {
        let caller = self.env().caller();
        self.deposit_internal(caller, token, amount);
        self.mint_internal(caller, mint_amount);
    }

    /// Redeem collateral from engine custody back to the caller.
    ///
    /// The health factor is re-checked after the ledger debit; a redeem
    /// that would leave outstanding debt under-collateralized reverts in
    /// full.
    pub fn redeem_collateral(&mut self, token: Address, amount: U256) {
        let caller = self.env().caller();
        self.redeem_internal(caller, token, amount);
        self.assert_healthy(caller);
    }

    /// Burn SSC, reducing the caller's outstanding debt.
    ///
    /// Pulls the SSC from the caller (requires prior approval) and destroys
    /// it. Burning only ever improves the health factor.
    pub fn burn_ssc(&mut self, amount: U256) {
        let caller = self.env().caller();
        self.burn_internal(caller, amount);
    }

    /// Burn SSC and redeem collateral in one call.
    pub fn redeem_collateral_for_ssc(
        &mut self,
        token: Address,
        collateral_amount: U256,
        debt_amount: U256,
    ) {
        let caller = self.env().caller();
        self.burn_internal(caller, debt_amount);
        self.redeem_internal(caller, token, collateral_amount);
        self.assert_healthy(caller);
    }

    // ========== Read Surface ==========

    /// Collateral balance of a user for a given token.
    pub fn get_collateral_balance_of_user(&self, user: Address, token: Address) -> U256 {
        self.collateral_deposited
            .get(&(user, token))
            .unwrap_or(U256::zero())
    }

    /// Total USD value (18 decimals) of a user's collateral across all
    /// registered tokens.
    pub fn get_collateral_amount_in_usd(&self, user: Address) -> U256 {
        let tokens = self.collateral_tokens.get().unwrap_or_default();
        let mut total = U256::zero();

        for token in tokens {
            let balance = self.get_collateral_balance_of_user(user, token);
            if balance.is_zero() {
                continue;
            }
            total = total + self.usd_value_of(token, balance);
        }

        total
    }

    /// USD value (18 decimals) of a token amount at the current feed price.
    pub fn get_usd_amount_from_token(&self, token: Address, amount: U256) -> U256 {
        self.usd_value_of(token, amount)
    }

    /// Token amount worth a USD amount (18 decimals) at the current feed price.
    pub fn get_token_amount_from_usd(&self, token: Address, usd_amount: U256) -> U256 {
        let quote = self.validated_quote(token);
        oracle::token_amount_from_usd(usd_amount, quote.price, quote.decimals)
    }

    /// Registered collateral token addresses.
    pub fn get_collateral_tokens(&self) -> Vec<Address> {
        self.collateral_tokens.get().unwrap_or_default()
    }

    /// Price feed address for a registered collateral token.
    pub fn get_token_price_feed(&self, token: Address) -> Option<Address> {
        self.price_feeds.get(&token)
    }

    /// Outstanding minted SSC for a user.
    pub fn get_minted_ssc_count(&self, user: Address) -> U256 {
        self.ssc_minted.get(&user).unwrap_or(U256::zero())
    }

    /// Current health factor for a user (1e18 fixed point, `U256::MAX`
    /// with no debt).
    pub fn get_health_factor(&self, user: Address) -> U256 {
        self.health_factor_of(user)
    }

    /// Debt and collateral value in a single call.
    pub fn get_account_summary(&self, user: Address) -> AccountSummary {
        AccountSummary {
            ssc_minted: self.get_minted_ssc_count(user),
            collateral_usd_value: self.get_collateral_amount_in_usd(user),
        }
    }

    /// SSC token contract address.
    pub fn get_ssc_address(&self) -> Option<Address> {
        self.ssc_token.get()
    }

    // ========== Internal Operations ==========

    /// Pull collateral from `user`, then credit the ledger. The external
    /// transfer runs and is verified before any accounting mutation.
    fn deposit_internal(&mut self, user: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(SscError::ZeroAmount);
        }
        self.require_supported(token);

        let pulled = self.pull_token(token, user, amount);
        if !pulled {
            self.env().revert(SscError::TransferFailed);
        }

        let balance = self.get_collateral_balance_of_user(user, token);
        self.collateral_deposited.set(&(user, token), balance + amount);
    }

    /// Record new debt, check solvency, then issue the tokens. A failed
    /// health check reverts the debt increment together with everything
    /// else in the call.
    fn mint_internal(&mut self, user: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(SscError::ZeroAmount);
        }

        let minted = self.get_minted_ssc_count(user);
        self.ssc_minted.set(&user, minted + amount);
        self.assert_healthy(user);

        if !self.issue_ssc(user, amount) {
            self.env().revert(SscError::MintFailed);
        }
    }

    /// Debit the ledger and push collateral back to `user`. Callers run the
    /// health check after this returns.
    fn redeem_internal(&mut self, user: Address, token: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(SscError::ZeroAmount);
        }
        self.require_supported(token);

        let balance = self.get_collateral_balance_of_user(user, token);
        if balance < amount {
            self.env().revert(SscError::InsufficientCollateral);
        }

        self.collateral_deposited.set(&(user, token), balance - amount);

        if !self.push_token(token, user, amount) {
            self.env().revert(SscError::TransferFailed);
        }
    }

    /// Pull SSC from `user` and destroy it, then clear the debt. Both
    /// external calls are verified before the debt counter moves.
    fn burn_internal(&mut self, user: Address, amount: U256) {
        if amount.is_zero() {
            self.env().revert(SscError::ZeroAmount);
        }

        let minted = self.get_minted_ssc_count(user);
        if minted < amount {
            self.env().revert(SscError::InsufficientDebt);
        }

        let ssc = self.ssc_address();
        let pulled: bool = self.env().call_contract(
            ssc,
            CallDef::new(
                "transfer_from",
                true,
                runtime_args! {
                    "owner" => user,
                    "recipient" => self.env().self_address(),
                    "amount" => amount,
                },
            ),
        );
        if !pulled {
            self.env().revert(SscError::BurnFailed);
        }

        let burned: bool = self.env().call_contract(
            ssc,
            CallDef::new("burn", true, runtime_args! { "amount" => amount }),
        );
        if !burned {
            self.env().revert(SscError::BurnFailed);
        }

        self.ssc_minted.set(&user, minted - amount);
    }

    // ========== Internal Helpers ==========

    fn require_supported(&self, token: Address) {
        if self.price_feeds.get(&token).is_none() {
            self.env().revert(SscError::UnsupportedCollateral);
        }
    }

    /// Fetch the feed quote for a token and reject invalid or stale data.
    fn validated_quote(&self, token: Address) -> PriceQuote {
        let feed = match self.price_feeds.get(&token) {
            Some(feed) => feed,
            None => self.env().revert(SscError::UnsupportedCollateral),
        };

        let quote = oracle::fetch_quote(&self.env(), feed);
        if let Err(error) = oracle::validate_quote(&quote, self.env().get_block_time()) {
            self.env().revert(error);
        }
        quote
    }

    fn usd_value_of(&self, token: Address, amount: U256) -> U256 {
        let quote = self.validated_quote(token);
        oracle::usd_value(amount, quote.price, quote.decimals)
    }

    fn health_factor_of(&self, user: Address) -> U256 {
        let minted = self.get_minted_ssc_count(user);
        let collateral_usd = self.get_collateral_amount_in_usd(user);
        health::health_factor(collateral_usd, minted)
    }

    fn assert_healthy(&self, user: Address) {
        if !health::is_healthy(self.health_factor_of(user)) {
            self.env().revert(SscError::BreaksHealthFactor);
        }
    }

    fn pull_token(&self, token: Address, from: Address, amount: U256) -> bool {
        self.env().call_contract(
            token,
            CallDef::new(
                "transfer_from",
                true,
                runtime_args! {
                    "owner" => from,
                    "recipient" => self.env().self_address(),
                    "amount" => amount,
                },
            ),
        )
    }

    fn push_token(&self, token: Address, to: Address, amount: U256) -> bool {
        self.env().call_contract(
            token,
            CallDef::new(
                "transfer",
                true,
                runtime_args! {
                    "recipient" => to,
                    "amount" => amount,
                },
            ),
        )
    }

    fn issue_ssc(&self, to: Address, amount: U256) -> bool {
        self.env().call_contract(
            self.ssc_address(),
            CallDef::new(
                "mint",
                true,
                runtime_args! {
                    "to" => to,
                    "amount" => amount,
                },
            ),
        )
    }

    fn ssc_address(&self) -> Address {
        match self.ssc_token.get() {
            Some(address) => address,
            None => self.env().revert(SscError::InvalidConfig),
        }
    }
}
