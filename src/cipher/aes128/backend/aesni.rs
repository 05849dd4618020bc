//! AES-NI round engine (x86_64).
//!
//! The entry point is compiled with the `aes` target feature so the
//! inlined lane drivers lower to `AESENC`/`AESDEC` sequences. It must only
//! be reached after [`available`] has returned `true`.

use core::arch::x86_64::{
    __m128i, _mm_aesdec_si128, _mm_aesdeclast_si128, _mm_aesenc_si128, _mm_aesenclast_si128,
    _mm_loadu_si128, _mm_storeu_si128, _mm_xor_si128,
};

use super::{RoundOps, Wiring, lanes};
use crate::cipher::aes128::consts::{Block, ROUND_KEYS};

cpufeatures::new!(aes_intrinsics, "aes", "sse2");

/// Returns `true` when the running CPU supports the AES instructions.
pub(super) fn available() -> bool {
    aes_intrinsics::get()
}

/// Zero-sized marker selecting the AES-NI implementation.
///
/// Private to this module: its only user is [`process`], so the round
/// operations below always run inside a function compiled with the `aes`
/// and `sse2` features, on a CPU whose support the caller has checked.
struct AesNi;

// SAFETY: every intrinsic below requires `aes` or `sse2`. These methods are
// only reached through `lanes::process::<AesNi>` monomorphised inside
// `process`, whose contract guarantees both features. Loads and stores use
// the unaligned variants on a 16-byte `Block`.
impl RoundOps for AesNi {
    type State = __m128i;

    #[inline(always)]
    fn load(block: &Block) -> __m128i {
        unsafe { _mm_loadu_si128(block.as_ptr() as *const __m128i) }
    }

    #[inline(always)]
    fn store(state: __m128i, block: &mut Block) {
        unsafe { _mm_storeu_si128(block.as_mut_ptr() as *mut __m128i, state) }
    }

    #[inline(always)]
    fn xor(a: __m128i, b: __m128i) -> __m128i {
        unsafe { _mm_xor_si128(a, b) }
    }

    #[inline(always)]
    fn enc_round(state: __m128i, key: __m128i) -> __m128i {
        unsafe { _mm_aesenc_si128(state, key) }
    }

    #[inline(always)]
    fn enc_last(state: __m128i, key: __m128i) -> __m128i {
        unsafe { _mm_aesenclast_si128(state, key) }
    }

    #[inline(always)]
    fn dec_round(state: __m128i, key: __m128i) -> __m128i {
        unsafe { _mm_aesdec_si128(state, key) }
    }

    #[inline(always)]
    fn dec_last(state: __m128i, key: __m128i) -> __m128i {
        unsafe { _mm_aesdeclast_si128(state, key) }
    }
}

/// # Safety
/// The CPU must support the `aes` and `sse2` features.
#[target_feature(enable = "aes,sse2")]
pub(super) unsafe fn process(keys: &[Block; ROUND_KEYS], wiring: Wiring, blocks: &mut [Block]) {
    lanes::process::<AesNi>(keys, wiring, blocks);
}
