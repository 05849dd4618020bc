use std::fmt;

use log::{debug, trace};

use super::backend::{Backend, Wiring};
use super::consts::{Block, ROUND_KEYS};
use super::schedule::KeySchedule;
use crate::error::{Error, Result};
use crate::key::Key;
use crate::stream::{CounterStream, fill_counters};

/// AES-128 block cipher bound to one key.
///
/// Construction expands both the forward and the equivalent-inverse key
/// schedules and pins a round engine backend; the object is immutable
/// afterwards and may be shared freely across threads.
///
/// Batch operations run four blocks through the rounds together and fall
/// back to single-block processing for the remainder. Their output is
/// identical to calling the single-block operation on each block.
///
/// # Example
/// ```
/// use clt::{Aes128, Key};
///
/// let cipher = Aes128::new(&Key::new([0u8; 16]));
/// let mut block = [0u8; 16];
///
/// cipher.encrypt_block(&mut block);
/// cipher.decrypt_block(&mut block);
///
/// assert_eq!(block, [0u8; 16]);
/// ```
#[derive(Clone)]
pub struct Aes128 {
    schedule: KeySchedule,
    backend: Backend,
}

impl Aes128 {
    /// Expands `key` and binds the fastest available backend.
    pub fn new(key: &Key) -> Self {
        Self::with_backend(key, Backend::detect())
    }

    /// Expands `key` and binds `backend`, or [`Backend::Soft`] if the CPU
    /// cannot run it.
    pub fn with_backend(key: &Key, backend: Backend) -> Self {
        let backend = backend.resolve();

        debug!("AES-128 cipher keyed, backend {backend:?}");

        Self {
            schedule: KeySchedule::new(key),
            backend,
        }
    }

    /// The backend this cipher runs on.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Encrypts one block in place.
    pub fn encrypt_block(&self, block: &mut Block) {
        self.encrypt_blocks(std::slice::from_mut(block));
    }

    /// Decrypts one block in place.
    pub fn decrypt_block(&self, block: &mut Block) {
        self.decrypt_blocks(std::slice::from_mut(block));
    }

    /// Encrypts every block of `blocks` in place.
    pub fn encrypt_blocks(&self, blocks: &mut [Block]) {
        self.backend
            .process(&self.schedule.encrypt.0, Wiring::Encrypt, blocks);
    }

    /// Decrypts every block of `blocks` in place.
    pub fn decrypt_blocks(&self, blocks: &mut [Block]) {
        self.backend
            .process(&self.schedule.decrypt.0, Wiring::Decrypt, blocks);
    }

    /// Encrypts `input` into `out`.
    ///
    /// # Errors
    /// Returns [`Error::BufferLength`] if the slices differ in length.
    pub fn encrypt_blocks_into(&self, input: &[Block], out: &mut [Block]) -> Result<()> {
        copy_checked(input, out)?;
        self.encrypt_blocks(out);
        Ok(())
    }

    /// Decrypts `input` into `out`.
    ///
    /// # Errors
    /// Returns [`Error::BufferLength`] if the slices differ in length.
    pub fn decrypt_blocks_into(&self, input: &[Block], out: &mut [Block]) -> Result<()> {
        copy_checked(input, out)?;
        self.decrypt_blocks(out);
        Ok(())
    }

    /// The forward round keys `K0..=K10`.
    pub fn round_keys(&self) -> &[Block; ROUND_KEYS] {
        &self.schedule.encrypt.0
    }

    /// The equivalent-inverse round keys used by decryption.
    pub fn inverse_round_keys(&self) -> &[Block; ROUND_KEYS] {
        &self.schedule.decrypt.0
    }
}

impl CounterStream for Aes128 {
    fn ctr_stream(&self, out: &mut [Block], start: u64) -> u64 {
        let next = fill_counters(out, start);

        self.encrypt_blocks(out);

        trace!("AES-128 counter stream: {} blocks from {}", out.len(), start);

        next
    }
}

impl fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes128")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

/// Copies `input` into `out`, checking that the lengths agree.
pub(crate) fn copy_checked(input: &[Block], out: &mut [Block]) -> Result<()> {
    if input.len() != out.len() {
        return Err(Error::BufferLength {
            expected: input.len(),
            actual: out.len(),
        });
    }

    out.copy_from_slice(input);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_round_keys() {
        let cipher = Aes128::with_backend(&Key::new([7u8; 16]), Backend::Soft);

        assert_eq!(format!("{cipher:?}"), "Aes128 { backend: Soft, .. }");
    }

    #[test]
    fn into_variants_reject_mismatched_buffers() {
        let cipher = Aes128::with_backend(&Key::default(), Backend::Soft);
        let input = [[0u8; 16]; 3];
        let mut out = [[0u8; 16]; 2];

        assert_eq!(
            cipher.encrypt_blocks_into(&input, &mut out),
            Err(Error::BufferLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let cipher = Aes128::new(&Key::default());
        let mut blocks: [Block; 0] = [];

        cipher.encrypt_blocks(&mut blocks);
        assert_eq!(cipher.ctr_stream(&mut blocks, 9), 9);
    }
}
