//! Operating system entropy
//!
//! This module provides [`OsEntropy`], a thin adapter that exposes the
//! operating system random number generator through
//! [`rand_core::RngCore`].
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same `sys_random`
//! function:
//!
//! - Linux: the `getrandom(2)` system call
//! - macOS: `arc4random_buf(3)`
//! - Windows: `BCryptGenRandom` with the system-preferred RNG
//!
//! Other targets compile, but every request fails with
//! [`std::io::ErrorKind::Unsupported`].
//!
//! `OsEntropy` is a plain value owned by the caller. The library never
//! creates one on its own and keeps no process-wide entropy state.

use rand_core::{CryptoRng, RngCore, impls};

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
pub(crate) fn sys_random(_buf: &mut [u8]) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "no operating system entropy source on this target",
    ))
}

/// Handle to the operating system random number generator.
///
/// # Panics
/// The infallible [`RngCore`] methods panic if the operating system
/// reports a failure, which is treated as unrecoverable in a
/// cryptographic context. Use [`RngCore::try_fill_bytes`] to observe the
/// error instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl OsEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl RngCore for OsEntropy {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = sys_random(dest) {
            panic!("operating system entropy source failed: {err}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        sys_random(dest).map_err(rand_core::Error::new)
    }
}

impl CryptoRng for OsEntropy {}
