//! Electrum-style mnemonic codec
//!
//! A 32-byte seed maps to 24 words (three words per 32-bit chunk,
//! little-endian) plus a trailing checksum word picked from the phrase
//! itself by CRC32 over the unique word prefixes.

pub mod english;

use crate::error::{Error, Result};
use lazy_static::lazy_static;
use std::collections::HashMap;

pub use english::PREFIX_LENGTH;

/// Mnemonic wordlist language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
}

impl Language {
    /// Look up a language by name, case-insensitive.
    pub fn from_name(name: &str) -> Result<Language> {
        match name.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            other => Err(Error::unsupported_language(format!(
                "no wordlist for language {:?}",
                other
            ))),
        }
    }

    fn wordlist(self) -> &'static [&'static str; 1626] {
        match self {
            Language::English => &english::WORDS,
        }
    }
}

lazy_static! {
    /// Unique-prefix index into the English list.
    static ref ENGLISH_PREFIXES: HashMap<&'static str, u32> = english::WORDS
        .iter()
        .enumerate()
        .map(|(i, w)| (prefix(w), i as u32))
        .collect();
}

/// The first `PREFIX_LENGTH` characters of a word.
fn prefix(word: &str) -> &str {
    match word.char_indices().nth(PREFIX_LENGTH) {
        Some((i, _)) => &word[..i],
        None => word,
    }
}

fn word_index(word: &str, language: Language) -> Result<u32> {
    let lowered = word.to_ascii_lowercase();
    match language {
        Language::English => ENGLISH_PREFIXES.get(prefix(&lowered)).copied(),
    }
    .ok_or_else(|| Error::invalid_mnemonic(format!("word {:?} is not in the wordlist", word)))
}

/// Decode a phrase of 3k+1 words into its seed bytes. The trailing
/// checksum word is dropped, not decoded; use [`verify_checksum`] to
/// check it first.
pub fn decode(words: &[&str], language: Language) -> Result<Vec<u8>> {
    if words.len() < 4 || words.len() % 3 != 1 {
        return Err(Error::invalid_mnemonic(format!(
            "expected 3k+1 words, got {}",
            words.len()
        )));
    }

    let n = language.wordlist().len() as u64;
    let mut seed = Vec::with_capacity((words.len() / 3) * 4);

    for triple in words[..words.len() - 1].chunks_exact(3) {
        let w1 = word_index(triple[0], language)? as u64;
        let w2 = word_index(triple[1], language)? as u64;
        let w3 = word_index(triple[2], language)? as u64;

        let x = w1 + n * ((n - w1 + w2) % n) + n * n * ((n - w2 + w3) % n);

        // The chunk must fit 32 bits; wrap like the reference
        // implementation and let the consistency check reject it.
        let chunk = x as u32;
        if (chunk as u64) % n != w1 {
            return Err(Error::mnemonic_checksum_mismatch("mnemonic decoding failed"));
        }
        seed.extend_from_slice(&chunk.to_le_bytes());
    }

    Ok(seed)
}

/// Encode seed bytes (length a multiple of 4) into a phrase with the
/// checksum word appended.
pub fn encode(seed: &[u8], language: Language) -> Result<Vec<String>> {
    if seed.is_empty() || seed.len() % 4 != 0 {
        return Err(Error::invalid_seed(format!(
            "cannot encode {} bytes as a mnemonic",
            seed.len()
        )));
    }

    let list = language.wordlist();
    let n = list.len() as u32;
    let mut words = Vec::with_capacity(seed.len() / 4 * 3 + 1);

    for chunk in seed.chunks_exact(4) {
        let x = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let w1 = x % n;
        let w2 = (x / n + w1) % n;
        let w3 = (x / n / n + w2) % n;
        words.push(list[w1 as usize].to_string());
        words.push(list[w2 as usize].to_string());
        words.push(list[w3 as usize].to_string());
    }

    let checksum = words[checksum_index(&words)].clone();
    words.push(checksum);
    Ok(words)
}

/// Index of the checksum word: CRC32 over the concatenated prefixes,
/// modulo the word count.
pub fn checksum_index<S: AsRef<str>>(words: &[S]) -> usize {
    let mut hasher = crc32fast::Hasher::new();
    for word in words {
        hasher.update(prefix(word.as_ref()).as_bytes());
    }
    hasher.finalize() as usize % words.len()
}

/// Check the trailing checksum word of a full phrase.
pub fn verify_checksum<S: AsRef<str>>(words: &[S]) -> bool {
    if words.len() < 2 {
        return false;
    }
    let body = &words[..words.len() - 1];
    let expected = body[checksum_index(body)].as_ref();
    prefix(expected) == prefix(words[words.len() - 1].as_ref())
}
