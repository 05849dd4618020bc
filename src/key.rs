//! AES-128 key material.
//!
//! A [`Key`] is exactly 16 opaque bytes. It is wiped from memory when
//! dropped and never printed by its `Debug` implementation; callers that
//! need to render a key (test vectors, diagnostics) use [`Key::as_bytes`].
//!
//! Byte order is the FIPS-197 one: `as_bytes()[0]` is the first key byte
//! of the standard test vectors.

use std::fmt;

use rand_core::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::KEY_BYTES;
use crate::error::{Error, Result};

/// A 128-bit secret key.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Key([u8; KEY_BYTES]);

impl Key {
    /// Wraps raw key bytes.
    pub const fn new(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh key from `rng`.
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if the source fails. No partially filled
    /// key is ever returned.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut key = Self([0u8; KEY_BYTES]);

        rng.try_fill_bytes(&mut key.0).map_err(Error::entropy)?;

        Ok(key)
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.0
    }
}

impl From<[u8; KEY_BYTES]> for Key {
    fn from(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_BYTES] = bytes.try_into().map_err(|_| Error::KeyLength {
            actual: bytes.len(),
        })?;

        Ok(Self(bytes))
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

/// Draws a fresh key from `rng`; shorthand for [`Key::generate`].
pub fn generate_key<R: RngCore + ?Sized>(rng: &mut R) -> Result<Key> {
    Key::generate(rng)
}
