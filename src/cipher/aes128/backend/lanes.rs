//! Lane-width generic round drivers.
//!
//! Every construction in the crate is expressed here once, over an array
//! of `W` independent lanes. All lanes are advanced through round `r`
//! before any lane enters round `r + 1`, which lets a pipelined round
//! instruction retire one lane while the others are already in flight.
//! The drivers are `#[inline(always)]` so that they are monomorphised into
//! the backend entry points (including `#[target_feature]` ones).

use super::{RoundOps, Wiring};
use crate::cipher::aes128::consts::{Block, NUM_ROUNDS, PIPELINE_WIDTH, PRF_TAP_ROUND, ROUND_KEYS};

#[inline(always)]
fn whiten<O: RoundOps, const W: usize>(lanes: &mut [O::State; W], key: O::State) {
    for lane in lanes.iter_mut() {
        *lane = O::xor(*lane, key);
    }
}

#[inline(always)]
fn enc_rounds<O: RoundOps, const W: usize>(lanes: &mut [O::State; W], keys: &[O::State]) {
    for &key in keys {
        for lane in lanes.iter_mut() {
            *lane = O::enc_round(*lane, key);
        }
    }
}

#[inline(always)]
fn enc_last<O: RoundOps, const W: usize>(lanes: &mut [O::State; W], key: O::State) {
    for lane in lanes.iter_mut() {
        *lane = O::enc_last(*lane, key);
    }
}

/// Forward cipher: whitening, nine full rounds, final round.
#[inline(always)]
pub(crate) fn encrypt<O: RoundOps, const W: usize>(
    keys: &[O::State; ROUND_KEYS],
    lanes: &mut [O::State; W],
) {
    whiten::<O, W>(lanes, keys[0]);
    enc_rounds::<O, W>(lanes, &keys[1..NUM_ROUNDS]);
    enc_last::<O, W>(lanes, keys[NUM_ROUNDS]);
}

/// Equivalent inverse cipher over the inverse schedule.
#[inline(always)]
pub(crate) fn decrypt<O: RoundOps, const W: usize>(
    keys: &[O::State; ROUND_KEYS],
    lanes: &mut [O::State; W],
) {
    whiten::<O, W>(lanes, keys[0]);

    for &key in &keys[1..NUM_ROUNDS] {
        for lane in lanes.iter_mut() {
            *lane = O::dec_round(*lane, key);
        }
    }

    for lane in lanes.iter_mut() {
        *lane = O::dec_last(*lane, keys[NUM_ROUNDS]);
    }
}

/// Matyas–Meyer–Oseas: `E(x) ^ x`.
#[inline(always)]
pub(crate) fn mmo<O: RoundOps, const W: usize>(
    keys: &[O::State; ROUND_KEYS],
    lanes: &mut [O::State; W],
) {
    let input = *lanes;

    encrypt::<O, W>(keys, lanes);

    for (lane, x) in lanes.iter_mut().zip(input) {
        *lane = O::xor(*lane, x);
    }
}

/// AES-PRF: the state leaving round 5 is fed forward into the output.
#[inline(always)]
pub(crate) fn prf<O: RoundOps, const W: usize>(
    keys: &[O::State; ROUND_KEYS],
    lanes: &mut [O::State; W],
) {
    whiten::<O, W>(lanes, keys[0]);
    enc_rounds::<O, W>(lanes, &keys[1..=PRF_TAP_ROUND]);

    let tap = *lanes;

    enc_rounds::<O, W>(lanes, &keys[PRF_TAP_ROUND + 1..NUM_ROUNDS]);
    enc_last::<O, W>(lanes, keys[NUM_ROUNDS]);

    for (lane, t) in lanes.iter_mut().zip(tap) {
        *lane = O::xor(*lane, t);
    }
}

#[inline(always)]
fn apply<O: RoundOps, const W: usize>(
    wiring: Wiring,
    keys: &[O::State; ROUND_KEYS],
    lanes: &mut [O::State; W],
) {
    match wiring {
        Wiring::Encrypt => encrypt::<O, W>(keys, lanes),
        Wiring::Decrypt => decrypt::<O, W>(keys, lanes),
        Wiring::Mmo => mmo::<O, W>(keys, lanes),
        Wiring::Prf => prf::<O, W>(keys, lanes),
    }
}

/// Transforms `blocks` in place, `PIPELINE_WIDTH` at a time, with the
/// remainder going through the single-lane path.
#[inline(always)]
pub(crate) fn process<O: RoundOps>(keys: &[Block; ROUND_KEYS], wiring: Wiring, blocks: &mut [Block]) {
    let keys: [O::State; ROUND_KEYS] = core::array::from_fn(|i| O::load(&keys[i]));

    let mut groups = blocks.chunks_exact_mut(PIPELINE_WIDTH);

    for group in &mut groups {
        let mut lanes: [O::State; PIPELINE_WIDTH] = core::array::from_fn(|i| O::load(&group[i]));

        apply::<O, PIPELINE_WIDTH>(wiring, &keys, &mut lanes);

        for (block, lane) in group.iter_mut().zip(lanes) {
            O::store(lane, block);
        }
    }

    for block in groups.into_remainder() {
        let mut lane = [O::load(block)];

        apply::<O, 1>(wiring, &keys, &mut lane);

        O::store(lane[0], block);
    }
}
