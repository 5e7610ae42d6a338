//! Monero account derivation
//!
//! Derives full Monero accounts (secret/public spend and view keys
//! plus the base58 public address) from a raw 32-byte seed, a hex
//! seed, or a 25-word Electrum-style mnemonic. All curve arithmetic
//! is self-contained.
//!
//! ```no_run
//! use monero_account::{Account, Language, Network};
//!
//! let account = Account::from_hex(
//!     "4e25d92060638d875517575c5bd285f2208c86390fa29f597c31f5ee3bccae0e",
//!     Network::Mainnet,
//! )?;
//! println!("{}", account.address());
//! # Ok::<(), monero_account::Error>(())
//! ```

pub mod account;
pub mod base58;
pub mod crypto;
pub mod error;
pub mod mnemonic;
pub mod utils;

pub use account::{Account, Network, SeedSource};
pub use error::{Error, ErrorCode, Result};
pub use mnemonic::Language;
pub use utils::crypto::keccak256;
