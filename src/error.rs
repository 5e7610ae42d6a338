//! Unified error types for Monero account derivation
//!
//! All errors flow through this module for consistent handling
//! and serializable error reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all derivation and codec operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_digit(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDigit, msg)
    }

    pub fn invalid_encoded_size(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidEncodedSize, msg)
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Overflow, msg)
    }

    pub fn invalid_mnemonic(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidMnemonic, msg)
    }

    pub fn mnemonic_checksum_mismatch(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::MnemonicChecksumMismatch, msg)
    }

    pub fn unsupported_language(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::UnsupportedLanguage, msg)
    }

    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidSeed, msg)
    }

    pub fn invalid_network(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidNetwork, msg)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        Error::invalid_seed("seed is not valid hex").with_details(err.to_string())
    }
}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Base58 decoding
    InvalidDigit,
    InvalidEncodedSize,
    Overflow,

    // Mnemonic handling
    InvalidMnemonic,
    MnemonicChecksumMismatch,
    UnsupportedLanguage,

    // Seed input
    InvalidSeed,

    // Network selection
    InvalidNetwork,
}

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
