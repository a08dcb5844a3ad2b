//! Password credential encoding for the broker's auth plugin.
//!
//! Credentials are stored in the `account.password` column as a single
//! self-describing string:
//!
//! ```text
//! PBKDF2$sha256$<iterations>$<salt>$<derived_key>
//! ```
//!
//! The broker's auth plugin splits this on `$` and re-runs the derivation at
//! connect time, so every field here is a wire contract: the salt is sixteen
//! characters from the hash64 alphabet (stored verbatim, its bytes are the
//! PBKDF2 salt input), and the derived key is standard base64 with padding.

use base64::prelude::*;
use ring::pbkdf2;
use std::num::NonZeroU32;

use crate::error::{AuthDbError, Result};

/// Salt alphabet. Order-significant, no padding symbol; this is NOT the
/// standard base64 alphabet, and the verifier depends on it byte-for-byte.
const HASH64_CHARS: &[u8; 64] =
    b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

const SALT_LENGTH: usize = 16;
const DERIVED_KEY_LENGTH: usize = 32;

const ALGORITHM: &str = "PBKDF2";
const DIGEST: &str = "sha256";

/// Iteration count embedded in newly encoded credentials. Existing rows keep
/// whatever count they were written with; verification always reads the
/// count out of the encoding rather than assuming this value.
pub const DEFAULT_ITERATIONS: u32 = 29_000;

/// Encodes a plaintext password with a fresh random salt and
/// [`DEFAULT_ITERATIONS`].
///
/// Two calls with the same plaintext produce different encodings. Empty
/// plaintext is accepted and hashed like any other string.
///
/// # Errors
///
/// Returns an error if the operating-system RNG is unavailable.
pub fn encode_password(password: &str) -> Result<String> {
    encode_password_with_iterations(password, DEFAULT_ITERATIONS)
}

/// Encodes a plaintext password with a caller-chosen iteration count.
///
/// # Errors
///
/// Returns an error if `iterations` is zero or the operating-system RNG is
/// unavailable.
pub fn encode_password_with_iterations(password: &str, iterations: u32) -> Result<String> {
    let Some(rounds) = NonZeroU32::new(iterations) else {
        return Err(AuthDbError::Credential(
            "iteration count must be non-zero".to_string(),
        ));
    };

    let salt = generate_salt()?;
    let key = derive_key(password.as_bytes(), salt.as_bytes(), rounds);

    Ok(format!(
        "{ALGORITHM}${DIGEST}${iterations}${salt}${}",
        BASE64_STANDARD.encode(key)
    ))
}

/// Checks a plaintext password against an encoded credential, re-deriving
/// the key with the salt and iteration count embedded in the encoding.
///
/// This is the same computation the broker performs at connect time.
/// Malformed encodings verify as `false`.
#[must_use]
pub fn verify_password(password: &str, encoded: &str) -> bool {
    let Some((iterations, salt, expected)) = parse_encoded(encoded) else {
        return false;
    };
    let Some(rounds) = NonZeroU32::new(iterations) else {
        return false;
    };

    pbkdf2::verify(
        pbkdf2::PBKDF2_HMAC_SHA256,
        rounds,
        salt.as_bytes(),
        password.as_bytes(),
        &expected,
    )
    .is_ok()
}

fn parse_encoded(encoded: &str) -> Option<(u32, &str, Vec<u8>)> {
    let parts: Vec<&str> = encoded.split('$').collect();
    if parts.len() != 5 || parts[0] != ALGORITHM || parts[1] != DIGEST {
        return None;
    }

    let iterations: u32 = parts[2].parse().ok()?;
    let key = BASE64_STANDARD.decode(parts[4]).ok()?;

    Some((iterations, parts[3], key))
}

/// Sixteen characters drawn uniformly from the hash64 alphabet. One random
/// byte maps to one character; 256 is a multiple of 64, so masking the low
/// six bits keeps the draw unbiased.
fn generate_salt() -> Result<String> {
    let mut bytes = [0u8; SALT_LENGTH];
    getrandom::fill(&mut bytes).map_err(|e| AuthDbError::Credential(e.to_string()))?;

    Ok(bytes
        .iter()
        .map(|b| HASH64_CHARS[(b & 0x3f) as usize] as char)
        .collect())
}

fn derive_key(password: &[u8], salt: &[u8], rounds: NonZeroU32) -> [u8; DERIVED_KEY_LENGTH] {
    let mut out = [0u8; DERIVED_KEY_LENGTH];
    pbkdf2::derive(pbkdf2::PBKDF2_HMAC_SHA256, rounds, salt, password, &mut out);
    out
}
