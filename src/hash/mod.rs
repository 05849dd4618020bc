//! Hash constructions built on the AES-128 round engine.
//!
//! Currently includes the Matyas–Meyer–Oseas compression function
//! ([`Mmo128`]), which turns the block cipher into a one-way function on
//! 128-bit blocks by feeding the input forward into the ciphertext.

pub mod mmo;

pub use mmo::Mmo128;
