//! SSC Stablecoin Contract
//!
//! CEP-18 compatible pegged stable unit with owner-gated minting and
//! burning. The engine takes ownership after deployment and is the only
//! party allowed to issue SSC; burning is open to any holder.

use odra::casper_types::U256;
use odra::prelude::*;

use crate::errors::SscError;

/// SSC Stablecoin Contract
#[odra::module]
pub struct StableCoin {
    /// Token name
    name: Var<String>,
    /// Token symbol
    symbol: Var<String>,
    /// Decimals (18 for SSC)
    decimals: Var<u8>,
    /// Total supply
    total_supply: Var<U256>,
    /// Balance mapping
    balances: Mapping<Address, U256>,
    /// Allowance mapping (owner -> spender -> amount)
    allowances: Mapping<(Address, Address), U256>,
    /// Owner (holds mint authority; transferred to the engine after deploy)
    owner: Var<Address>,
}

#[odra::module]
impl StableCoin {
    /// Initialize the token; the deployer becomes the owner.
    pub fn init(&mut self, name: String, symbol: String, decimals: u8) {
        self.name.set(name);
        self.symbol.set(symbol);
        self.decimals.set(decimals);
        self.total_supply.set(U256::zero());
        self.owner.set(self.env().caller());
    }

    // ========== CEP-18 Standard Functions ==========

    /// Get token name
    pub fn name(&self) -> String {
        self.name.get().unwrap_or_default()
    }

    /// Get token symbol
    pub fn symbol(&self) -> String {
        self.symbol.get().unwrap_or_default()
    }

    /// Get decimals
    pub fn decimals(&self) -> u8 {
        self.decimals.get().unwrap_or(18)
    }

    /// Get total supply
    pub fn total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get balance of an account
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).unwrap_or(U256::zero())
    }

    /// Get allowance for spender
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).unwrap_or(U256::zero())
    }

    /// Transfer tokens to recipient
    pub fn transfer(&mut self, recipient: Address, amount: U256) -> bool {
        let sender = self.env().caller();
        self.transfer_internal(sender, recipient, amount);
        true
    }

    /// Approve spender to spend tokens
    pub fn approve(&mut self, spender: Address, amount: U256) -> bool {
        let owner = self.env().caller();
        self.allowances.set(&(owner, spender), amount);
        true
    }

    /// Transfer tokens from owner to recipient (requires allowance)
    pub fn transfer_from(&mut self, owner: Address, recipient: Address, amount: U256) -> bool {
        let spender = self.env().caller();

        let current_allowance = self.allowance(owner, spender);
        if current_allowance < amount {
            self.env().revert(SscError::InsufficientAllowance);
        }

        self.transfer_internal(owner, recipient, amount);
        self.allowances.set(&(owner, spender), current_allowance - amount);
        true
    }

    // ========== Issuance Functions (Owner-Gated) ==========

    /// Mint new tokens (owner only)
    pub fn mint(&mut self, to: Address, amount: U256) -> bool {
        self.require_owner();
        if amount.is_zero() {
            self.env().revert(SscError::ZeroAmount);
        }

        let current_balance = self.balance_of(to);
        self.balances.set(&to, current_balance + amount);
        self.total_supply.set(self.total_supply() + amount);
        true
    }

    /// Burn tokens from the caller's balance
    pub fn burn(&mut self, amount: U256) -> bool {
        if amount.is_zero() {
            self.env().revert(SscError::ZeroAmount);
        }
        let caller = self.env().caller();
        self.burn_internal(caller, amount);
        true
    }

    /// Burn tokens from an account using its allowance
    pub fn burn_from(&mut self, from: Address, amount: U256) -> bool {
        if amount.is_zero() {
            self.env().revert(SscError::ZeroAmount);
        }
        let spender = self.env().caller();

        let current_allowance = self.allowance(from, spender);
        if current_allowance < amount {
            self.env().revert(SscError::InsufficientAllowance);
        }

        self.burn_internal(from, amount);
        self.allowances.set(&(from, spender), current_allowance - amount);
        true
    }

    // ========== Ownership ==========

    /// Transfer ownership, and with it mint authority (owner only)
    pub fn transfer_ownership(&mut self, new_owner: Address) {
        self.require_owner();
        self.owner.set(new_owner);
    }

    /// Current owner
    pub fn owner(&self) -> Option<Address> {
        self.owner.get()
    }

    // ========== Internal Functions ==========

    fn transfer_internal(&mut self, from: Address, to: Address, amount: U256) {
        let from_balance = self.balance_of(from);
        if from_balance < amount {
            self.env().revert(SscError::InsufficientTokenBalance);
        }

        self.balances.set(&from, from_balance - amount);
        let to_balance = self.balance_of(to);
        self.balances.set(&to, to_balance + amount);
    }

    fn burn_internal(&mut self, from: Address, amount: U256) {
        let current_balance = self.balance_of(from);
        if current_balance < amount {
            self.env().revert(SscError::InsufficientTokenBalance);
        }

        self.balances.set(&from, current_balance - amount);
        self.total_supply.set(self.total_supply() - amount);
    }

    fn require_owner(&self) {
        let caller = self.env().caller();
        match self.owner.get() {
            Some(owner) if caller == owner => {}
            _ => self.env().revert(SscError::Unauthorized),
        }
    }
}
