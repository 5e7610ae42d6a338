use clap::Parser;
use serde_json::json;

use monero_account::utils::logging;
use monero_account::{mnemonic, Account, Error, Language, Network, SeedSource};

/// Derive a Monero account from a seed or mnemonic phrase.
#[derive(Parser)]
#[command(name = "monero-account", version, about)]
struct Args {
    /// 64-character hex seed
    #[arg(long, conflicts_with = "mnemonic")]
    seed_hex: Option<String>,

    /// 25-word mnemonic phrase
    #[arg(long)]
    mnemonic: Option<String>,

    /// Mnemonic language
    #[arg(long, default_value = "english")]
    language: String,

    /// Network: mainnet or testnet
    #[arg(long, default_value = "mainnet")]
    network: String,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,

    /// Include the seed, mnemonic and secret keys in the output
    #[arg(long)]
    show_secrets: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        logging::enable_debug();
    }

    let network = Network::from_name(&args.network)?;
    let language = Language::from_name(&args.language)?;

    let source = match (&args.seed_hex, &args.mnemonic) {
        (Some(seed_hex), None) => SeedSource::Hex(seed_hex),
        (None, Some(phrase)) => {
            let words: Vec<&str> = phrase.split_whitespace().collect();
            if !mnemonic::verify_checksum(&words) {
                return Err(Error::mnemonic_checksum_mismatch(
                    "the 25th word does not match the phrase checksum",
                )
                .into());
            }
            SeedSource::Mnemonic(phrase, language)
        }
        _ => {
            return Err("pass exactly one of --seed-hex or --mnemonic".into());
        }
    };

    let account = Account::new(source, network)?;

    if args.json {
        let mut out = json!({
            "network": account.network().to_string(),
            "public_spend_key": account.public_spend_key_hex(),
            "public_view_key": account.public_view_key_hex(),
            "address": account.address(),
        });
        if args.show_secrets {
            if let Some(obj) = out.as_object_mut() {
                obj.insert("seed".into(), json!(account.seed_hex()));
                obj.insert("mnemonic".into(), json!(account.mnemonic_phrase()));
                obj.insert(
                    "secret_spend_key".into(),
                    json!(account.secret_spend_key_hex()),
                );
                obj.insert(
                    "secret_view_key".into(),
                    json!(account.secret_view_key_hex()),
                );
            }
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("Network:          {}", account.network());
        if args.show_secrets {
            println!("Seed:             {}", account.seed_hex());
            println!("Mnemonic:         {}", account.mnemonic_phrase());
            println!("Secret spend key: {}", account.secret_spend_key_hex());
            println!("Secret view key:  {}", account.secret_view_key_hex());
        }
        println!("Public spend key: {}", account.public_spend_key_hex());
        println!("Public view key:  {}", account.public_view_key_hex());
        println!("Address:          {}", account.address());
    }

    Ok(())
}
