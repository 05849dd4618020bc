//! Round engine backends.
//!
//! The single-round step is expressed as an abstract family of operations
//! ([`RoundOps`]): a substitution–diffusion round, its inverse, the two
//! final-round variants and a whitening XOR. Two implementations exist:
//!
//! - `soft`: portable table-based rounds, available everywhere
//! - `aesni`: x86_64 AES instructions, available when the CPU reports them
//!
//! The backend is chosen at runtime when a keyed object is constructed, so
//! one binary runs on hardware with and without AES acceleration. Both
//! backends feed the same lane-generic drivers in `lanes` and produce
//! bit-identical output.

use cfg_if::cfg_if;
use log::{debug, warn};

use crate::cipher::aes128::consts::{Block, ROUND_KEYS};

pub(crate) mod lanes;
pub(crate) mod soft;

cfg_if! {
    if #[cfg(all(target_arch = "x86_64", not(feature = "force-soft")))] {
        mod aesni;

        fn hardware_available() -> bool {
            aesni::available()
        }

        fn hardware_process(keys: &[Block; ROUND_KEYS], wiring: Wiring, blocks: &mut [Block]) {
            debug_assert!(aesni::available());
            // SAFETY: an `AesNi` value only reaches a keyed object through
            // `Backend::resolve` or `Backend::detect`, which checked CPU support.
            unsafe { aesni::process(keys, wiring, blocks) }
        }
    } else {
        fn hardware_available() -> bool {
            false
        }

        fn hardware_process(keys: &[Block; ROUND_KEYS], wiring: Wiring, blocks: &mut [Block]) {
            soft::process(keys, wiring, blocks)
        }
    }
}

/// One round-instruction family, applied to an opaque 128-bit state.
pub(crate) trait RoundOps {
    type State: Copy;

    fn load(block: &Block) -> Self::State;
    fn store(state: Self::State, block: &mut Block);
    fn xor(a: Self::State, b: Self::State) -> Self::State;
    fn enc_round(state: Self::State, key: Self::State) -> Self::State;
    fn enc_last(state: Self::State, key: Self::State) -> Self::State;
    fn dec_round(state: Self::State, key: Self::State) -> Self::State;
    fn dec_last(state: Self::State, key: Self::State) -> Self::State;
}

/// How the rounds are wired together for a given construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Wiring {
    Encrypt,
    Decrypt,
    Mmo,
    Prf,
}

/// Round engine implementation used by a keyed object.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Portable software rounds.
    Soft,
    /// x86_64 AES-NI instructions.
    AesNi,
}

impl Backend {
    /// Selects the fastest backend supported by the running CPU.
    pub fn detect() -> Self {
        let backend = if Backend::AesNi.is_available() {
            Backend::AesNi
        } else {
            Backend::Soft
        };

        debug!("detected AES round engine backend: {backend:?}");

        backend
    }

    /// Returns `true` if this backend can run on the current CPU.
    pub fn is_available(self) -> bool {
        match self {
            Backend::Soft => true,
            Backend::AesNi => hardware_available(),
        }
    }

    /// Downgrades an unavailable request to [`Backend::Soft`].
    pub(crate) fn resolve(self) -> Self {
        if self.is_available() {
            return self;
        }

        warn!("{self:?} backend requested but not supported on this CPU, using Soft");

        Backend::Soft
    }

    /// Runs `wiring` over `blocks` in place.
    ///
    /// `self` must come from [`Backend::resolve`] or [`Backend::detect`].
    pub(crate) fn process(self, keys: &[Block; ROUND_KEYS], wiring: Wiring, blocks: &mut [Block]) {
        match self {
            Backend::Soft => soft::process(keys, wiring, blocks),
            Backend::AesNi => hardware_process(keys, wiring, blocks),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::detect()
    }
}
