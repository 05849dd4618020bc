//! Permutation engine
//!
//! This module provides uniformly random permutations and an exact
//! bijection between permutations and integers.
//!
//! - `permutation`: the [`Permutation`] value type, with composition,
//!   inversion, pivoting and application to arbitrary sequences
//! - `shuffle`: Fisher–Yates and recursive-splitting shuffles over any
//!   slice, driven by an injected [`rand_core::RngCore`]
//! - `rank`: rank and unrank through the factorial number system, on
//!   arbitrary-precision integers
//!
//! Shuffles take their randomness from the caller. The intended source is
//! the AES-PRF counter generator ([`crate::AesPrf128Ctr`]), which makes
//! every shuffle reproducible from a key and a counter; the operating
//! system source ([`crate::os::OsEntropy`]) works as well.
//!
//! Ranking is independent of the cipher and exists mainly to verify shuffle
//! uniformity: shuffling the identity many times and binning the ranks
//! must give a flat histogram over `[0, n!)`.
//!
//! # Example
//! ```
//! use clt::{AesPrf128Ctr, Key, Permutation};
//!
//! let mut rng = AesPrf128Ctr::from_key(&Key::new([9u8; 16]));
//!
//! let mut p = Permutation::new(6);
//! p.shuffle(&mut rng).unwrap();
//!
//! let r = p.rank();
//! assert_eq!(Permutation::unrank(&r, 6).unwrap(), p);
//! ```

pub mod permutation;
pub mod rank;
pub mod shuffle;

pub use permutation::{Permutation, apply_permutation, inverse_permutation};
pub use rank::{factorial, rank, unrank};
pub use shuffle::{fisher_yates, recursive_split};
