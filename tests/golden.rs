//! Known-answer tests for the whole derivation pipeline.

use monero_account::{base58, mnemonic, Account, Language, Network};

const SEED_HEX: &str = "4e25d92060638d875517575c5bd285f2208c86390fa29f597c31f5ee3bccae0e";
const PHRASE: &str = "worry irritate mural vocal bogeys peeled nudged muddy uphill rewind \
                      python pairing bubble cottage hotel boil teeming dented demonstrate \
                      moment lamb love pride rudely worry";
const MAINNET_ADDRESS: &str = "42mbz5LaemQG9xDssWW9LEB7Lb27nBuNtNKSEYPqYoFtUmj9qQ13oRMYgXFnhwEkJYQkqHKjcPAYNPW8eZgMTa1zFc1vbB4";
const TESTNET_ADDRESS: &str = "9tK9UKzqw8WG9xDssWW9LEB7Lb27nBuNtNKSEYPqYoFtUmj9qQ13oRMYgXFnhwEkJYQkqHKjcPAYNPW8eZgMTa1zFZWQXEf";

fn phrase() -> String {
    PHRASE.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[test]
fn full_account_from_hex_seed() {
    let account = Account::from_hex(SEED_HEX, Network::Mainnet).unwrap();

    assert_eq!(account.seed_hex(), SEED_HEX);
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
    assert_eq!(account.mnemonic_phrase(), phrase());
}

#[test]
fn mnemonic_and_hex_inputs_agree() {
    let from_hex = Account::from_hex(SEED_HEX, Network::Mainnet).unwrap();
    let from_words = Account::from_mnemonic(PHRASE, Language::English, Network::Mainnet).unwrap();

    assert_eq!(from_hex.seed(), from_words.seed());
    assert_eq!(from_hex.address(), from_words.address());
}

#[test]
fn testnet_address_differs_only_in_prefix_and_checksum() {
    let account = Account::from_hex(SEED_HEX, Network::Testnet).unwrap();
    assert_eq!(account.address(), TESTNET_ADDRESS);

    // Decode both addresses: keys in the middle must be identical.
    let mainnet = base58::decode(MAINNET_ADDRESS).unwrap();
    let testnet = base58::decode(TESTNET_ADDRESS).unwrap();
    assert_eq!(mainnet.len(), 69);
    assert_eq!(testnet.len(), 69);
    assert_eq!(mainnet[0], 0x12);
    assert_eq!(testnet[0], 0x35);
    assert_eq!(mainnet[1..65], testnet[1..65]);
}

#[test]
fn address_checksum_is_keccak_prefix() {
    let raw = base58::decode(MAINNET_ADDRESS).unwrap();
    let checksum = monero_account::keccak256(&raw[..65]);
    assert_eq!(raw[65..], checksum[..4]);
}

#[test]
fn checksum_word_of_golden_phrase() {
    let words: Vec<&str> = PHRASE.split_whitespace().collect();
    assert!(mnemonic::verify_checksum(&words));

    // Tamper with one data word and the checksum no longer matches.
    let mut tampered: Vec<&str> = words.clone();
    tampered[1] = "mural";
    assert!(!mnemonic::verify_checksum(&tampered));
}

#[test]
fn high_seed_exercises_scalar_reduction() {
    let mut seed = [0u8; 32];
    for (i, b) in seed.iter_mut().enumerate() {
        *b = 0xe0 + i as u8;
    }
    let account = Account::from_seed(&seed, Network::Mainnet).unwrap();

    assert_eq!(
        account.secret_spend_key_hex(),
        "fd767b715917d3be59b9685fe149deb6eff1f2f3f4f5f6f7f8f9fafbfcfdfe0f"
    );
    assert_eq!(
        account.address(),
        "46a46NYqGGjTtxqNjGbJvyYDJB9RZBCrx4LaJqD9p49iETYZw5ShpMWHe61DhVFjYG2EaBimmBFwF52mEsuYe31x1MXphYp"
    );
    assert_eq!(
        account.mnemonic_phrase(),
        "corrode envy chlorine himself waxing token observant pigment nobody stylishly \
         guarded fibula ajar aphid aces else sayings rift kickoff judge january problems \
         cigar chrome himself"
    );
}
