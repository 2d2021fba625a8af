//! Synthetic record identifiers.
//!
//! Identifiers only need to keep rows apart inside a freshly created
//! table, so they are short, random and not cryptographically strong.

use anyhow::{ensure, Result};
use rand::seq::SliceRandom;
use rand::Rng;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Length used for every stored record's `index` attribute.
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Returns `length` distinct lowercase letters drawn from the thread RNG.
///
/// Fails when `length` exceeds the alphabet size, since letters are
/// sampled without replacement.
pub fn random_string(length: usize) -> Result<String> {
    random_string_with(&mut rand::thread_rng(), length)
}

/// Same as [`random_string`] with a caller-supplied RNG.
pub fn random_string_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
    ensure!(
        length <= ALPHABET.len(),
        "identifier length {length} exceeds alphabet size {}",
        ALPHABET.len()
    );

    Ok(ALPHABET
        .choose_multiple(rng, length)
        .map(|&b| char::from(b))
        .collect())
}
