//! Counter-mode keystream generation.
//!
//! Every keyed block function in the crate can be run over successive
//! counter values to obtain a deterministic pseudorandom stream. The
//! counter occupies the low 64 bits of the input block (little-endian
//! bytes `0..8`) and the high 64 bits are zero.
//!
//! The stream is used directly as a keyed PRG; it is never XORed against
//! caller data here. Callers track the next unused counter themselves:
//! every call returns it, and feeding it into the next call continues the
//! stream without overlap.

use std::fmt;

use log::trace;
use rand_core::{CryptoRng, RngCore, impls};
use zeroize::Zeroize;

use crate::cipher::{BLOCK_BYTES, Block};

/// Number of blocks generated per internal batch by [`CounterStream::byte_stream`].
const SCRATCH_BLOCKS: usize = 64;

/// Returns ⌈`num_bytes` / 16⌉, the number of blocks covering `num_bytes`.
pub fn bytes_to_blocks(num_bytes: usize) -> usize {
    num_bytes.div_ceil(BLOCK_BYTES)
}

/// Writes the counter blocks `start, start + 1, ...` into `out`.
///
/// Returns the counter following the last one written.
pub(crate) fn fill_counters(out: &mut [Block], start: u64) -> u64 {
    let mut counter = start;

    for block in out.iter_mut() {
        block[..8].copy_from_slice(&counter.to_le_bytes());
        block[8..].fill(0);
        counter = counter.wrapping_add(1);
    }

    counter
}

/// A keyed block function evaluated in counter mode.
pub trait CounterStream {
    /// Writes `F(start + i)` into `out[i]` for every block of `out`.
    ///
    /// Returns `start + out.len()` (wrapping), the next unused counter.
    fn ctr_stream(&self, out: &mut [Block], start: u64) -> u64;

    /// Byte-granular variant of [`ctr_stream`](Self::ctr_stream).
    ///
    /// Whole blocks are written as by `ctr_stream`. A trailing partial
    /// block consumes one more counter value, of which only the leading
    /// bytes are kept. The returned counter is
    /// `start + bytes_to_blocks(out.len())`, so chained calls produce the
    /// same bytes as one call over the concatenated range whenever each
    /// call but the last covers whole blocks.
    fn byte_stream(&self, out: &mut [u8], start: u64) -> u64 {
        let mut scratch = [[0u8; BLOCK_BYTES]; SCRATCH_BLOCKS];
        let mut counter = start;

        for chunk in out.chunks_mut(SCRATCH_BLOCKS * BLOCK_BYTES) {
            let blocks = &mut scratch[..bytes_to_blocks(chunk.len())];

            counter = self.ctr_stream(blocks, counter);

            for (dst, src) in chunk.chunks_mut(BLOCK_BYTES).zip(blocks.iter()) {
                dst.copy_from_slice(&src[..dst.len()]);
            }
        }

        scratch.zeroize();

        counter
    }
}

impl<F: CounterStream + ?Sized> CounterStream for &F {
    fn ctr_stream(&self, out: &mut [Block], start: u64) -> u64 {
        (**self).ctr_stream(out, start)
    }
}

/// A stateful byte generator over a [`CounterStream`].
///
/// The generator owns its counter, starting at zero, and advances it by
/// one per (possibly partial) block produced. It implements
/// [`RngCore`] so it can be handed to anything that consumes entropy,
/// in particular the shuffles in [`crate::perm`].
///
/// Every `fill` call starts on a fresh block: a request for 8 bytes
/// consumes a whole counter value.
#[derive(Clone)]
pub struct CtrRng<F> {
    function: F,
    counter: u64,
}

impl<F: CounterStream> CtrRng<F> {
    /// Wraps `function` with a counter starting at zero.
    pub fn new(function: F) -> Self {
        Self::with_counter(function, 0)
    }

    /// Wraps `function` with a counter starting at `counter`.
    pub fn with_counter(function: F, counter: u64) -> Self {
        Self { function, counter }
    }

    /// Fills `out` with the next bytes of the stream.
    pub fn fill(&mut self, out: &mut [u8]) {
        let start = self.counter;

        self.counter = self.function.byte_stream(out, start);

        trace!(
            "counter stream: {} bytes, counter {} -> {}",
            out.len(),
            start,
            self.counter
        );
    }

    /// The next unused counter value.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Repositions the stream.
    pub fn set_counter(&mut self, counter: u64) {
        self.counter = counter;
    }

    /// The underlying block function.
    pub fn function(&self) -> &F {
        &self.function
    }
}

impl<F: CounterStream> RngCore for CtrRng<F> {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill(dest);
        Ok(())
    }
}

impl<F: CounterStream> CryptoRng for CtrRng<F> {}

impl<F: fmt::Debug> fmt::Debug for CtrRng<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CtrRng")
            .field("function", &self.function)
            .field("counter", &self.counter)
            .finish()
    }
}
