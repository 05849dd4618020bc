//! AES-128 round engine
//!
//! This module implements the AES-128 block cipher over a pluggable round
//! engine:
//!
//! - `consts`: block geometry, round counts and the S-box tables
//! - `schedule`: forward and equivalent-inverse key expansion
//! - `backend`: the single-round step, portable or hardware-accelerated,
//!   and the lane-generic drivers shared by every construction
//! - `core`: the keyed [`Aes128`] object
//!
//! The same engine also drives the MMO hash ([`crate::hash`]) and the
//! AES-PRF ([`crate::prf`]), which differ from the cipher only in how the
//! rounds are wired.

mod backend;
mod consts;
mod core;
mod schedule;

pub use backend::Backend;
pub use consts::{BLOCK_BYTES, Block, KEY_BYTES, NUM_ROUNDS, PIPELINE_WIDTH, PRF_TAP_ROUND, ROUND_KEYS};
pub use self::core::Aes128;

pub(crate) use backend::Wiring;
pub(crate) use self::core::copy_checked;
pub(crate) use schedule::RoundKeys;
