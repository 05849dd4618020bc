use std::fmt;

use log::{debug, trace};

use crate::cipher::aes128::{RoundKeys, Wiring, copy_checked};
use crate::cipher::{Backend, Block, ROUND_KEYS};
use crate::error::Result;
use crate::key::Key;
use crate::stream::{CounterStream, CtrRng, fill_counters};

/// AES-PRF over AES-128.
///
/// The forward cipher is run unchanged, but the state leaving round
/// [`PRF_TAP_ROUND`](crate::cipher::PRF_TAP_ROUND) is saved and XORed
/// into the final output:
///
/// ```text
/// F_k(x) = E_k(x) ⊕ R5_k(x)
/// ```
///
/// Unlike the raw cipher, `F_k` is not a permutation, which removes the
/// birthday-bound distinguisher that applies to a block cipher used as a
/// PRF. Its counter stream is the default randomness source for
/// [`Permutation`](crate::perm::Permutation) shuffles.
#[derive(Clone)]
pub struct AesPrf128 {
    keys: RoundKeys,
    backend: Backend,
}

impl AesPrf128 {
    /// Keys the PRF and binds the fastest available backend.
    pub fn new(key: &Key) -> Self {
        Self::with_backend(key, Backend::detect())
    }

    /// Keys the PRF on an explicit backend.
    pub fn with_backend(key: &Key, backend: Backend) -> Self {
        let backend = backend.resolve();

        debug!("AES-PRF keyed, backend {backend:?}");

        Self {
            keys: RoundKeys::forward(key),
            backend,
        }
    }

    /// The backend this PRF runs on.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Evaluates the PRF on one block.
    pub fn apply(&self, input: &Block) -> Block {
        let mut out = [*input];
        self.apply_blocks(&mut out);
        out[0]
    }

    /// Evaluates the PRF on every block of `blocks`, in place.
    pub fn apply_blocks(&self, blocks: &mut [Block]) {
        self.backend.process(&self.keys.0, Wiring::Prf, blocks);
    }

    /// Evaluates the PRF on `input`, writing to `out`.
    ///
    /// # Errors
    /// Returns [`Error::BufferLength`](crate::Error::BufferLength) if the
    /// slices differ in length.
    pub fn apply_blocks_into(&self, input: &[Block], out: &mut [Block]) -> Result<()> {
        copy_checked(input, out)?;
        self.apply_blocks(out);
        Ok(())
    }

    /// The forward round keys.
    pub fn round_keys(&self) -> &[Block; ROUND_KEYS] {
        &self.keys.0
    }
}

impl CounterStream for AesPrf128 {
    fn ctr_stream(&self, out: &mut [Block], start: u64) -> u64 {
        let next = fill_counters(out, start);

        self.apply_blocks(out);

        trace!("AES-PRF counter stream: {} blocks from {}", out.len(), start);

        next
    }
}

impl fmt::Debug for AesPrf128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesPrf128")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

/// Stateful AES-PRF counter generator.
///
/// Owns the PRF and the next unused counter, starting at zero. Implements
/// [`rand_core::RngCore`], so it can drive the permutation shuffles
/// directly.
///
/// # Example
/// ```
/// use clt::{AesPrf128Ctr, Key, Permutation};
///
/// let mut rng = AesPrf128Ctr::from_key(&Key::new([1u8; 16]));
/// let mut perm = Permutation::new(8);
///
/// perm.shuffle(&mut rng).unwrap();
/// assert_eq!(perm.degree(), 8);
/// ```
pub type AesPrf128Ctr = CtrRng<AesPrf128>;

impl CtrRng<AesPrf128> {
    /// Keys a fresh PRF and starts its stream at counter zero.
    pub fn from_key(key: &Key) -> Self {
        Self::new(AesPrf128::new(key))
    }
}
