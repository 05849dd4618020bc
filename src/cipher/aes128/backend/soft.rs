//! Portable round engine.
//!
//! Each function mirrors the semantics of the corresponding x86 AES
//! instruction exactly (`AESENC`, `AESENCLAST`, `AESDEC`, `AESDECLAST`,
//! `AESIMC`), so the two backends are interchangeable round for round.
//! The state uses the FIPS-197 byte order: byte `r + 4c` holds row `r`
//! of column `c`.
//!
//! Table lookups are indexed by secret data; this backend is not hardened
//! against cache-timing observers.

use super::{RoundOps, Wiring, lanes};
use crate::cipher::aes128::consts::{Block, INV_SBOX, ROUND_KEYS, SBOX};

/// Zero-sized marker selecting the portable implementation.
pub(crate) struct Soft;

/// Multiplication by `x` in GF(2⁸) modulo the AES polynomial.
#[inline(always)]
fn xtime(a: u8) -> u8 {
    (a << 1) ^ (((a >> 7) & 1) * 0x1b)
}

/// General multiplication in GF(2⁸), used by the inverse mixing step.
#[inline(always)]
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut p = 0u8;

    while b != 0 {
        if b & 1 != 0 {
            p ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }

    p
}

#[inline(always)]
fn sub_shift(state: &Block) -> Block {
    let mut out = [0u8; 16];

    for c in 0..4 {
        for r in 0..4 {
            out[r + 4 * c] = SBOX[state[r + 4 * ((c + r) % 4)] as usize];
        }
    }

    out
}

#[inline(always)]
fn inv_sub_shift(state: &Block) -> Block {
    let mut out = [0u8; 16];

    for c in 0..4 {
        for r in 0..4 {
            out[r + 4 * c] = INV_SBOX[state[r + 4 * ((c + 4 - r) % 4)] as usize];
        }
    }

    out
}

#[inline(always)]
fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        let all = a0 ^ a1 ^ a2 ^ a3;

        col[0] = a0 ^ all ^ xtime(a0 ^ a1);
        col[1] = a1 ^ all ^ xtime(a1 ^ a2);
        col[2] = a2 ^ all ^ xtime(a2 ^ a3);
        col[3] = a3 ^ all ^ xtime(a3 ^ a0);
    }
}

/// Inverse of [`mix_columns`]; also the `AESIMC` key transform.
#[inline(always)]
pub(crate) fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let a = [col[0], col[1], col[2], col[3]];

        for r in 0..4 {
            col[r] = gmul(a[r], 0x0e)
                ^ gmul(a[(r + 1) % 4], 0x0b)
                ^ gmul(a[(r + 2) % 4], 0x0d)
                ^ gmul(a[(r + 3) % 4], 0x09);
        }
    }
}

#[inline(always)]
fn xor_block(a: Block, b: Block) -> Block {
    let mut out = [0u8; 16];

    out.iter_mut()
        .zip(a.iter().zip(b.iter()))
        .for_each(|(o, (l, r))| *o = l ^ r);

    out
}

impl RoundOps for Soft {
    type State = Block;

    #[inline(always)]
    fn load(block: &Block) -> Block {
        *block
    }

    #[inline(always)]
    fn store(state: Block, block: &mut Block) {
        *block = state;
    }

    #[inline(always)]
    fn xor(a: Block, b: Block) -> Block {
        xor_block(a, b)
    }

    #[inline(always)]
    fn enc_round(state: Block, key: Block) -> Block {
        let mut s = sub_shift(&state);
        mix_columns(&mut s);
        xor_block(s, key)
    }

    #[inline(always)]
    fn enc_last(state: Block, key: Block) -> Block {
        xor_block(sub_shift(&state), key)
    }

    #[inline(always)]
    fn dec_round(state: Block, key: Block) -> Block {
        let mut s = inv_sub_shift(&state);
        inv_mix_columns(&mut s);
        xor_block(s, key)
    }

    #[inline(always)]
    fn dec_last(state: Block, key: Block) -> Block {
        xor_block(inv_sub_shift(&state), key)
    }
}

pub(super) fn process(keys: &[Block; ROUND_KEYS], wiring: Wiring, blocks: &mut [Block]) {
    lanes::process::<Soft>(keys, wiring, blocks);
}
