//! Block ciphers.

pub mod aes128;

pub use aes128::{
    Aes128, BLOCK_BYTES, Backend, Block, KEY_BYTES, NUM_ROUNDS, PIPELINE_WIDTH, PRF_TAP_ROUND,
    ROUND_KEYS,
};
