use std::fmt;

use log::{debug, trace};

use crate::cipher::aes128::{RoundKeys, Wiring, copy_checked};
use crate::cipher::{Backend, Block, ROUND_KEYS};
use crate::error::Result;
use crate::key::Key;
use crate::stream::{CounterStream, fill_counters};

/// Matyas–Meyer–Oseas compression over AES-128: `H(x) = E_k(x) ⊕ x`.
///
/// The key is fixed at construction and plays the role of a public
/// parameter selecting one member of the hash family; every block is
/// compressed independently, with no chaining between blocks.
#[derive(Clone)]
pub struct Mmo128 {
    keys: RoundKeys,
    backend: Backend,
}

impl Mmo128 {
    /// Keys the compression function and binds the fastest available backend.
    pub fn new(key: &Key) -> Self {
        Self::with_backend(key, Backend::detect())
    }

    /// Keys the compression function on an explicit backend.
    pub fn with_backend(key: &Key, backend: Backend) -> Self {
        let backend = backend.resolve();

        debug!("MMO-128 hash keyed, backend {backend:?}");

        Self {
            keys: RoundKeys::forward(key),
            backend,
        }
    }

    /// The backend this hash runs on.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Compresses a single block.
    pub fn hash_block(&self, input: &Block) -> Block {
        let mut out = [*input];
        self.hash_blocks(&mut out);
        out[0]
    }

    /// Compresses every block of `blocks` in place.
    pub fn hash_blocks(&self, blocks: &mut [Block]) {
        self.backend.process(&self.keys.0, Wiring::Mmo, blocks);
    }

    /// Compresses `input` into `out`.
    ///
    /// # Errors
    /// Returns [`Error::BufferLength`](crate::Error::BufferLength) if the
    /// slices differ in length.
    pub fn hash_blocks_into(&self, input: &[Block], out: &mut [Block]) -> Result<()> {
        copy_checked(input, out)?;
        self.hash_blocks(out);
        Ok(())
    }

    /// The forward round keys.
    pub fn round_keys(&self) -> &[Block; ROUND_KEYS] {
        &self.keys.0
    }
}

impl CounterStream for Mmo128 {
    fn ctr_stream(&self, out: &mut [Block], start: u64) -> u64 {
        let next = fill_counters(out, start);

        self.hash_blocks(out);

        trace!("MMO-128 counter stream: {} blocks from {}", out.len(), start);

        next
    }
}

impl fmt::Debug for Mmo128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mmo128")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}
