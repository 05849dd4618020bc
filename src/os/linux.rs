//! Linux entropy via the `getrandom` system call.
//!
//! `getrandom` reads from the kernel entropy pool and blocks only until
//! the pool has been initialized once after boot.

use std::io;

use libc::{c_void, getrandom};

/// Fills `buf` with random bytes from the kernel.
///
/// Partial reads and `EINTR` are retried until the buffer is full.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();

            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }

            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
