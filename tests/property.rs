use monero_account::{base58, mnemonic, Account, Language, Network};
use proptest::prelude::*;

fn any_seed() -> impl Strategy<Value = [u8; 32]> {
    prop::array::uniform32(any::<u8>())
}

proptest! {
    #[test]
    fn base58_roundtrips(data in prop::collection::vec(any::<u8>(), 0..80)) {
        let encoded = base58::encode(&data);
        prop_assert!(encoded.bytes().all(|c| c.is_ascii_alphanumeric()));
        let decoded = base58::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn base58_preserves_zero_runs(
        prefix_zeros in 0usize..12,
        interior in prop::collection::vec(any::<u8>(), 0..20),
        suffix_zeros in 0usize..12,
    ) {
        let mut data = vec![0u8; prefix_zeros];
        data.extend_from_slice(&interior);
        data.extend(std::iter::repeat(0u8).take(suffix_zeros));
        let decoded = base58::decode(&base58::encode(&data)).unwrap();
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn mnemonic_roundtrips(seed in any_seed()) {
        let words = mnemonic::encode(&seed, Language::English).unwrap();
        prop_assert_eq!(words.len(), 25);
        prop_assert!(mnemonic::verify_checksum(&words));

        let refs: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
        let decoded = mnemonic::decode(&refs, Language::English).unwrap();
        prop_assert_eq!(decoded.as_slice(), seed.as_slice());
    }

    #[test]
    fn derivation_is_deterministic(seed in any_seed()) {
        let first = Account::from_seed(&seed, Network::Mainnet).unwrap();
        let second = Account::from_seed(&seed, Network::Mainnet).unwrap();
        prop_assert_eq!(first.address(), second.address());
        prop_assert_eq!(first.secret_view_key(), second.secret_view_key());
    }

    #[test]
    fn addresses_decode_to_payload(seed in any_seed()) {
        let account = Account::from_seed(&seed, Network::Mainnet).unwrap();
        let raw = base58::decode(account.address()).unwrap();
        prop_assert_eq!(raw.len(), 69);
        prop_assert_eq!(raw[0], 0x12);
        prop_assert_eq!(&raw[1..33], account.public_spend_key().as_slice());
        prop_assert_eq!(&raw[33..65], account.public_view_key().as_slice());
        let checksum = monero_account::keccak256(&raw[..65]);
        prop_assert_eq!(&raw[65..], &checksum[..4]);
    }

    #[test]
    fn network_switch_keeps_keys(seed in any_seed()) {
        let mut account = Account::from_seed(&seed, Network::Mainnet).unwrap();
        let mainnet_address = account.address().to_string();
        let spend = *account.public_spend_key();

        account.set_network(Network::Testnet);
        prop_assert_ne!(account.address(), mainnet_address.as_str());
        prop_assert_eq!(account.public_spend_key(), &spend);

        account.set_network(Network::Mainnet);
        prop_assert_eq!(account.address(), mainnet_address.as_str());
    }
}
