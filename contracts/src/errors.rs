//! Engine error definitions.

use odra::prelude::*;

/// SSC engine errors
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SscError {
    // Engine/accounting errors (1xx)
    ZeroAmount = 100,
    UnsupportedCollateral = 101,
    InsufficientCollateral = 102,
    InsufficientDebt = 103,
    BreaksHealthFactor = 104,

    // Oracle errors (2xx)
    StalePrice = 200,
    InvalidPrice = 201,

    // Token flow errors (3xx)
    TransferFailed = 300,
    MintFailed = 301,
    BurnFailed = 302,
    InsufficientTokenBalance = 303,
    InsufficientAllowance = 304,

    // Access control / configuration errors (4xx)
    Unauthorized = 400,
    InvalidConfig = 401,
}

impl SscError {
    pub const fn message(&self) -> &'static str {
        match self {
            // Engine
            SscError::ZeroAmount => "Amount must be greater than zero",
            SscError::UnsupportedCollateral => "Collateral token not supported",
            SscError::InsufficientCollateral => "Insufficient collateral balance",
            SscError::InsufficientDebt => "Burn amount exceeds minted SSC",
            SscError::BreaksHealthFactor => "Operation breaks health factor",

            // Oracle
            SscError::StalePrice => "Oracle price is stale",
            SscError::InvalidPrice => "Oracle price is zero or invalid",

            // Token
            SscError::TransferFailed => "Collateral token transfer failed",
            SscError::MintFailed => "SSC mint failed",
            SscError::BurnFailed => "SSC burn failed",
            SscError::InsufficientTokenBalance => "Insufficient token balance",
            SscError::InsufficientAllowance => "Insufficient token allowance",

            // Access control / config
            SscError::Unauthorized => "Unauthorized caller",
            SscError::InvalidConfig => "Invalid configuration parameter",
        }
    }
}

impl core::fmt::Display for SscError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<SscError> for OdraError {
    fn from(error: SscError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
