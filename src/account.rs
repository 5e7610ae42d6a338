//! Account derivation
//!
//! A Monero account is fully determined by a 32-byte seed: the secret
//! spend key is the seed reduced mod the group order, the secret view
//! key is the reduced Keccak-256 of the seed, and the public keys are
//! the compressed basepoint multiples of the two secrets.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::base58;
use crate::crypto::edwards::scalar_mul_base;
use crate::crypto::scalar;
use crate::error::{Error, Result};
use crate::log_debug;
use crate::mnemonic::{self, Language};
use crate::utils::crypto::keccak256;

/// Monero network, identified by its two-digit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub fn code(self) -> u8 {
        match self {
            Network::Mainnet => 12,
            Network::Testnet => 35,
        }
    }

    /// Address prefix byte: the decimal digits of the network code
    /// read as hex nibbles (12 -> 0x12, 35 -> 0x35).
    pub fn prefix_byte(self) -> u8 {
        let code = self.code();
        ((code / 10) << 4) | (code % 10)
    }

    pub fn from_name(name: &str) -> Result<Network> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            other => Err(Error::invalid_network(format!("unknown network {:?}", other))),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// The three accepted seed input forms.
#[derive(Debug, Clone, Copy)]
pub enum SeedSource<'a> {
    /// Raw seed bytes.
    Bytes(&'a [u8; 32]),
    /// Hex string; must decode to exactly 32 bytes.
    Hex(&'a str),
    /// 25-word phrase in the given language.
    Mnemonic(&'a str, Language),
}

impl SeedSource<'_> {
    /// Normalize to raw seed bytes.
    fn normalize(&self) -> Result<[u8; 32]> {
        match *self {
            SeedSource::Bytes(bytes) => Ok(*bytes),
            SeedSource::Hex(hex_str) => {
                let decoded = hex::decode(hex_str.trim())?;
                decoded.try_into().map_err(|bad: Vec<u8>| {
                    Error::invalid_seed(format!(
                        "seed must be 32 bytes, got {}",
                        bad.len()
                    ))
                })
            }
            SeedSource::Mnemonic(phrase, language) => {
                let words: Vec<&str> = phrase.split_whitespace().collect();
                if words.len() != 25 {
                    return Err(Error::invalid_mnemonic(format!(
                        "expected 25 words, got {}",
                        words.len()
                    )));
                }
                let seed = mnemonic::decode(&words, language)?;
                seed.try_into().map_err(|bad: Vec<u8>| {
                    Error::invalid_mnemonic(format!(
                        "phrase decodes to {} bytes, expected 32",
                        bad.len()
                    ))
                })
            }
        }
    }

    fn language(&self) -> Language {
        match *self {
            SeedSource::Mnemonic(_, language) => language,
            _ => Language::English,
        }
    }
}

/// A derived account: seed, mnemonic, the four keys and the address.
#[derive(Zeroize, ZeroizeOnDrop)]
#[cfg_attr(test, derive(Debug))]
pub struct Account {
    seed: [u8; 32],
    words: Vec<String>,
    secret_spend_key: [u8; 32],
    secret_view_key: [u8; 32],
    public_spend_key: [u8; 32],
    public_view_key: [u8; 32],
    #[zeroize(skip)]
    network: Network,
    #[zeroize(skip)]
    address: String,
}

impl Account {
    /// Derive an account from any seed input form.
    pub fn new(source: SeedSource<'_>, network: Network) -> Result<Account> {
        let seed = source.normalize()?;
        let words = mnemonic::encode(&seed, source.language())?;

        let mut hashed = keccak256(&seed);
        let secret_spend_key = scalar::reduce32(&seed);
        let secret_view_key = scalar::reduce32(&hashed);
        hashed.zeroize();

        // The unreduced seed feeds scalar multiplication directly;
        // the result equals the multiple of the reduced spend key.
        let public_spend_key = scalar_mul_base(&seed).compress();
        let public_view_key = scalar_mul_base(&secret_view_key).compress();

        let address = encode_address(network, &public_spend_key, &public_view_key);

        log_debug!(
            "account",
            "derived account",
            network = network,
            address = address,
        );

        Ok(Account {
            seed,
            words,
            secret_spend_key,
            secret_view_key,
            public_spend_key,
            public_view_key,
            network,
            address,
        })
    }

    pub fn from_seed(seed: &[u8; 32], network: Network) -> Result<Account> {
        Account::new(SeedSource::Bytes(seed), network)
    }

    pub fn from_hex(seed_hex: &str, network: Network) -> Result<Account> {
        Account::new(SeedSource::Hex(seed_hex), network)
    }

    pub fn from_mnemonic(phrase: &str, language: Language, network: Network) -> Result<Account> {
        Account::new(SeedSource::Mnemonic(phrase, language), network)
    }

    /// Switch networks. Keys are network-independent, so only the
    /// address is rebuilt.
    pub fn set_network(&mut self, network: Network) {
        if self.network != network {
            self.network = network;
            self.address =
                encode_address(network, &self.public_spend_key, &self.public_view_key);
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn seed(&self) -> &[u8; 32] {
        &self.seed
    }

    pub fn seed_hex(&self) -> String {
        hex::encode(self.seed)
    }

    /// The 25-word mnemonic for the seed.
    pub fn mnemonic(&self) -> &[String] {
        &self.words
    }

    pub fn mnemonic_phrase(&self) -> String {
        self.words.join(" ")
    }

    pub fn secret_spend_key(&self) -> &[u8; 32] {
        &self.secret_spend_key
    }

    pub fn secret_spend_key_hex(&self) -> String {
        hex::encode(self.secret_spend_key)
    }

    pub fn secret_view_key(&self) -> &[u8; 32] {
        &self.secret_view_key
    }

    pub fn secret_view_key_hex(&self) -> String {
        hex::encode(self.secret_view_key)
    }

    pub fn public_spend_key(&self) -> &[u8; 32] {
        &self.public_spend_key
    }

    pub fn public_spend_key_hex(&self) -> String {
        hex::encode(self.public_spend_key)
    }

    pub fn public_view_key(&self) -> &[u8; 32] {
        &self.public_view_key
    }

    pub fn public_view_key_hex(&self) -> String {
        hex::encode(self.public_view_key)
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

/// prefix byte || spend key || view key || first 4 checksum bytes,
/// base58-encoded (69 raw bytes -> 95 characters).
fn encode_address(network: Network, public_spend_key: &[u8; 32], public_view_key: &[u8; 32]) -> String {
    let mut payload = Vec::with_capacity(69);
    payload.push(network.prefix_byte());
    payload.extend_from_slice(public_spend_key);
    payload.extend_from_slice(public_view_key);
    let checksum = keccak256(&payload);
    payload.extend_from_slice(&checksum[..4]);
    base58::encode(&payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    const SEED_HEX: &str = "4e25d92060638d875517575c5bd285f2208c86390fa29f597c31f5ee3bccae0e";
    const PHRASE: &str = "worry irritate mural vocal bogeys peeled nudged muddy uphill rewind \
                          python pairing bubble cottage hotel boil teeming dented demonstrate \
                          moment lamb love pride rudely worry";
    const MAINNET_ADDRESS: &str = "42mbz5LaemQG9xDssWW9LEB7Lb27nBuNtNKSEYPqYoFtUmj9qQ13oRMYgXFnhwEkJYQkqHKjcPAYNPW8eZgMTa1zFc1vbB4";
    const TESTNET_ADDRESS: &str = "9tK9UKzqw8WG9xDssWW9LEB7Lb27nBuNtNKSEYPqYoFtUmj9qQ13oRMYgXFnhwEkJYQkqHKjcPAYNPW8eZgMTa1zFZWQXEf";

    #[test]
    fn test_network_prefix_bytes() {
        assert_eq!(Network::Mainnet.prefix_byte(), 0x12);
        assert_eq!(Network::Testnet.prefix_byte(), 0x35);
    }

    #[test]
    fn test_network_from_name() {
        assert_eq!(Network::from_name("Mainnet").unwrap(), Network::Mainnet);
        assert_eq!(Network::from_name("test").unwrap(), Network::Testnet);
        let err = Network::from_name("stagenet").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidNetwork);
    }

    #[test]
    fn test_derive_from_hex() {
        let account = Account::from_hex(SEED_HEX, Network::Mainnet).unwrap();
        assert_eq!(account.secret_spend_key_hex(), SEED_HEX);
        assert_eq!(
            account.secret_view_key_hex(),
            "957dea6a302e3b4bcebcb049b32ef0ed8e87d7f0905c282af9e8693cd6090b01"
        );
        assert_eq!(
            account.public_spend_key_hex(),
            "1e40e628f2195b5a9a1757b55951933c707b3b397425a57f737985347fc4afa6"
        );
        assert_eq!(
            account.public_view_key_hex(),
            "0869ca06c855acbd692790e06a2bad8e06b7ac2d0c34bf868844f97d0b880d81"
        );
        assert_eq!(account.address(), MAINNET_ADDRESS);
        assert_eq!(account.mnemonic_phrase(), PHRASE.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_derive_from_mnemonic_matches_hex() {
        let from_phrase =
            Account::from_mnemonic(PHRASE, Language::English, Network::Mainnet).unwrap();
        assert_eq!(from_phrase.seed_hex(), SEED_HEX);
        assert_eq!(from_phrase.address(), MAINNET_ADDRESS);
    }

    #[test]
    fn test_set_network_rebuilds_only_address() {
        let mut account = Account::from_hex(SEED_HEX, Network::Mainnet).unwrap();
        account.set_network(Network::Testnet);
        assert_eq!(account.address(), TESTNET_ADDRESS);
        assert_eq!(account.secret_spend_key_hex(), SEED_HEX);
        account.set_network(Network::Mainnet);
        assert_eq!(account.address(), MAINNET_ADDRESS);
    }

    #[test]
    fn test_unreduced_seed() {
        let seed: [u8; 32] = {
            let mut s = [0u8; 32];
            for (i, b) in s.iter_mut().enumerate() {
                *b = 0xe0 + i as u8;
            }
            s
        };
        let account = Account::from_seed(&seed, Network::Mainnet).unwrap();
        assert_eq!(
            account.secret_spend_key_hex(),
            "fd767b715917d3be59b9685fe149deb6eff1f2f3f4f5f6f7f8f9fafbfcfdfe0f"
        );
        assert_eq!(
            account.secret_view_key_hex(),
            "2745b71a8b6be5bd161d541db73286287701a3eac902c55407711fa28589da07"
        );
        assert_eq!(
            account.public_spend_key_hex(),
            "828d525c70d8fca0ccd51b696bbd5eba9ab7dbb0782a6d13f41abf2e153c3d50"
        );
        assert_eq!(
            account.public_view_key_hex(),
            "75457a3a45da11637b0781027dfded0760abae8f74e05218189ca87310f2b703"
        );
        assert_eq!(
            account.address(),
            "46a46NYqGGjTtxqNjGbJvyYDJB9RZBCrx4LaJqD9p49iETYZw5ShpMWHe61DhVFjYG2EaBimmBFwF52mEsuYe31x1MXphYp"
        );
    }

    #[test]
    fn test_rejects_short_hex() {
        let err = Account::from_hex("4e25d920", Network::Mainnet).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSeed);
    }

    #[test]
    fn test_rejects_wrong_word_count() {
        let err = Account::from_mnemonic("worry irritate mural", Language::English, Network::Mainnet)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidMnemonic);
    }
}
