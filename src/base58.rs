//! Monero-style base58
//!
//! Unlike Bitcoin base58, data is split into 8-byte blocks and every
//! block encodes to a fixed width, so the output length is a pure
//! function of the input length and decoding can work block by block.

use crate::error::{Error, Result};

const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const FULL_BLOCK_SIZE: usize = 8;
const FULL_ENCODED_BLOCK_SIZE: usize = 11;

/// Encoded width for each raw block length 0..=8.
const ENCODED_BLOCK_SIZES: [usize; FULL_BLOCK_SIZE + 1] = [0, 2, 3, 5, 6, 7, 9, 10, 11];

/// Encode bytes to Monero base58. The empty input encodes to the
/// empty string.
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));
    for chunk in data.chunks(FULL_BLOCK_SIZE) {
        encode_block(chunk, &mut out);
    }
    out
}

fn encoded_len(data_len: usize) -> usize {
    let full_blocks = data_len / FULL_BLOCK_SIZE;
    full_blocks * FULL_ENCODED_BLOCK_SIZE + ENCODED_BLOCK_SIZES[data_len % FULL_BLOCK_SIZE]
}

fn encode_block(block: &[u8], out: &mut String) {
    assert!(
        !block.is_empty() && block.len() <= FULL_BLOCK_SIZE,
        "base58 block must be 1..=8 bytes"
    );

    let mut value = 0u64;
    for &byte in block {
        value = (value << 8) | byte as u64;
    }

    // Fill from the least significant digit; leading positions keep
    // the '1' zero pad.
    let width = ENCODED_BLOCK_SIZES[block.len()];
    let mut buf = [b'1'; FULL_ENCODED_BLOCK_SIZE];
    let mut i = width;
    while value > 0 {
        i -= 1;
        buf[i] = ALPHABET[(value % 58) as usize];
        value /= 58;
    }
    for &digit in &buf[..width] {
        out.push(digit as char);
    }
}

/// Decode a Monero base58 string. The empty string decodes to an
/// empty vector.
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let input = encoded.as_bytes();
    let full_blocks = input.len() / FULL_ENCODED_BLOCK_SIZE;
    let tail = input.len() % FULL_ENCODED_BLOCK_SIZE;

    let tail_decoded = if tail == 0 {
        0
    } else {
        decoded_block_len(tail)?
    };

    let mut out = Vec::with_capacity(full_blocks * FULL_BLOCK_SIZE + tail_decoded);
    for chunk in input.chunks(FULL_ENCODED_BLOCK_SIZE) {
        let target = if chunk.len() == FULL_ENCODED_BLOCK_SIZE {
            FULL_BLOCK_SIZE
        } else {
            tail_decoded
        };
        decode_block(chunk, target, &mut out)?;
    }
    Ok(out)
}

/// Raw length for an encoded block length, via the size table.
fn decoded_block_len(encoded_len: usize) -> Result<usize> {
    ENCODED_BLOCK_SIZES
        .iter()
        .position(|&size| size == encoded_len)
        .ok_or_else(|| {
            Error::invalid_encoded_size(format!(
                "no block decodes to {} base58 characters",
                encoded_len
            ))
        })
}

fn decode_block(chunk: &[u8], target: usize, out: &mut Vec<u8>) -> Result<()> {
    let mut value = 0u64;
    for &c in chunk {
        let digit = digit_value(c)?;
        value = value
            .checked_mul(58)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::overflow("base58 block exceeds 8 bytes"))?;
    }

    // A block of n bytes always occupies the low n bytes of the
    // big-endian value; the high 8-n bytes must be zero.
    let full = value.to_be_bytes();
    if full[..FULL_BLOCK_SIZE - target].iter().any(|&b| b != 0) {
        return Err(Error::overflow(format!(
            "base58 block value does not fit in {} bytes",
            target
        )));
    }
    out.extend_from_slice(&full[FULL_BLOCK_SIZE - target..]);
    Ok(())
}

fn digit_value(c: u8) -> Result<u64> {
    ALPHABET
        .iter()
        .position(|&a| a == c)
        .map(|p| p as u64)
        .ok_or_else(|| {
            Error::invalid_digit(format!(
                "character {:?} is not in the base58 alphabet",
                c as char
            ))
        })
}
