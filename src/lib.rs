//! AES-based cryptographic building blocks
//!
//! This crate provides a hardware-accelerated AES-128 round engine, two
//! constructions derived from it, a counter-mode keystream generator and a
//! permutation engine that draws its randomness from the derived PRF.
//!
//! The focus is on **bit-exact, predictable behavior** and on throughput:
//! the round engine processes independent blocks four at a time so that
//! pipelined AES instructions stay busy, while producing output identical
//! to the one-block-at-a-time path.
//!
//! # Module overview
//!
//! - `cipher`
//!   The AES-128 block cipher ([`Aes128`]): key schedule, the
//!   equivalent-inverse decryption schedule, and single or multi-block
//!   encryption and decryption.
//!
//!   The round step has two interchangeable backends, a portable software
//!   one and an x86_64 AES-NI one. The fastest available backend is
//!   detected at runtime ([`Backend::detect`]); the `force-soft` Cargo
//!   feature compiles the hardware path out entirely.
//!
//! - `hash`
//!   The Matyas–Meyer–Oseas compression function ([`Mmo128`]),
//!   `E_k(x) ⊕ x`, applied block by block without chaining.
//!
//! - `prf`
//!   The AES-PRF construction ([`AesPrf128`]): AES-128 with the state after
//!   round 5 fed forward into the output. [`AesPrf128Ctr`] runs it in
//!   counter mode as a keyed pseudorandom generator.
//!
//! - `stream`
//!   The counter-mode contract shared by every keyed block function
//!   ([`CounterStream`]) and the stateful generator [`CtrRng`], which
//!   implements [`rand_core::RngCore`].
//!
//! - `perm`
//!   Permutations of `0..n` ([`Permutation`]): composition, inversion,
//!   Fisher–Yates and recursive-splitting shuffles, and rank/unrank
//!   through the factorial number system using exact big integers.
//!
//! - `os`
//!   [`OsEntropy`], an adapter exposing the operating system random number
//!   generator as a [`rand_core::RngCore`]. The library never reads
//!   entropy on its own; callers pass a source wherever one is needed.
//!
//! # Byte order
//!
//! Keys and blocks are plain byte arrays in FIPS-197 order, so the
//! standard test vectors apply directly. Counter blocks carry the counter
//! in little-endian bytes `0..8` and zero in bytes `8..16`.
//!
//! # Example
//! ```
//! use clt::{Aes128, Key};
//!
//! let key = Key::new([
//!     0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6,
//!     0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
//! ]);
//! let mut block = [
//!     0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96,
//!     0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
//! ];
//!
//! Aes128::new(&key).encrypt_block(&mut block);
//!
//! assert_eq!(block[..4], [0x3a, 0xd7, 0x7b, 0xb4]);
//! ```
//!
//! # Logging
//!
//! Backend selection and stream or shuffle activity are reported through
//! the [`log`] facade at `debug` and `trace` level. The crate never
//! installs a logger and never logs key material or generated output.

pub mod cipher;
pub mod error;
pub mod hash;
pub mod key;
pub mod os;
pub mod perm;
pub mod prf;
pub mod stream;

pub use cipher::{Aes128, Backend, Block};
pub use error::{Error, Result};
pub use hash::Mmo128;
pub use key::{Key, generate_key};
pub use os::OsEntropy;
pub use perm::Permutation;
pub use prf::{AesPrf128, AesPrf128Ctr};
pub use stream::{CounterStream, CtrRng, bytes_to_blocks};
