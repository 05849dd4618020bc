//! Pseudorandom functions built on the AES-128 round engine.
//!
//! [`AesPrf128`] is the AES-PRF construction: ordinary AES-128 with an
//! extra feed-forward of the mid-cipher state. [`AesPrf128Ctr`] wraps it in
//! a counter-mode generator that serves as the crate's keyed PRG.

pub mod aesprf;

pub use aesprf::{AesPrf128, AesPrf128Ctr};
