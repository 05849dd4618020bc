//! AES-128 key schedule.
//!
//! The forward schedule follows the standard key-expansion recurrence:
//! round key `r` is derived from round key `r - 1` through the
//! key-schedule assist step (rotate the last word, substitute it through
//! the S-box and add the round constant) followed by a shift/XOR
//! diffusion across the four words.
//!
//! The decryption schedule is the *equivalent inverse* schedule: forward
//! keys 1..=9 pass through the inverse mixing transform and are stored in
//! reverse order, while keys 0 and 10 are kept as-is with their positions
//! exchanged. This lets decryption use the same round-instruction family
//! as encryption.
//!
//! Expansion is always done in software. It runs once per key and is a
//! pure function of the key bytes, so every backend consumes identical
//! schedules.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::backend::soft::inv_mix_columns;
use super::consts::{Block, NUM_ROUNDS, RCON, ROUND_KEYS, SBOX};
use crate::key::Key;

/// An expanded sequence of 11 round keys, wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct RoundKeys(pub(crate) [Block; ROUND_KEYS]);

impl RoundKeys {
    /// Expands `key` into the forward (encryption) schedule.
    pub(crate) fn forward(key: &Key) -> Self {
        let mut keys = [[0u8; 16]; ROUND_KEYS];
        keys[0] = *key.as_bytes();

        for r in 1..ROUND_KEYS {
            keys[r] = next_round_key(&keys[r - 1], RCON[r - 1]);
        }

        Self(keys)
    }

    /// Derives the equivalent inverse schedule from a forward schedule.
    pub(crate) fn inverse(forward: &RoundKeys) -> Self {
        let mut keys = [[0u8; 16]; ROUND_KEYS];

        keys[0] = forward.0[NUM_ROUNDS];

        for (r, key) in keys.iter_mut().enumerate().take(NUM_ROUNDS).skip(1) {
            *key = forward.0[NUM_ROUNDS - r];
            inv_mix_columns(key);
        }

        keys[NUM_ROUNDS] = forward.0[0];

        Self(keys)
    }
}

/// Key-schedule assist on the last word of `prev`: RotWord, SubWord, Rcon.
#[inline(always)]
fn assist(prev: &Block, rcon: u8) -> [u8; 4] {
    [
        SBOX[prev[13] as usize] ^ rcon,
        SBOX[prev[14] as usize],
        SBOX[prev[15] as usize],
        SBOX[prev[12] as usize],
    ]
}

#[inline(always)]
fn next_round_key(prev: &Block, rcon: u8) -> Block {
    let t = assist(prev, rcon);
    let mut next = [0u8; 16];

    for i in 0..4 {
        next[i] = prev[i] ^ t[i];
    }

    for i in 4..16 {
        next[i] = prev[i] ^ next[i - 4];
    }

    next
}

/// Forward and equivalent-inverse schedules for one key.
#[derive(Clone)]
pub(crate) struct KeySchedule {
    pub(crate) encrypt: RoundKeys,
    pub(crate) decrypt: RoundKeys,
}

impl KeySchedule {
    pub(crate) fn new(key: &Key) -> Self {
        let encrypt = RoundKeys::forward(key);
        let decrypt = RoundKeys::inverse(&encrypt);

        Self { encrypt, decrypt }
    }
}
