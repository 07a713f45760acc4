//! Linux entropy source
//!
//! Reads from the kernel entropy pool through the `getrandom(2)` system
//! call. Without flags the call blocks until the pool has been initialized
//! once, after which it never blocks and never returns weak output.

use std::io;

use libc::{EINTR, c_void, getrandom};

use crate::error::Error;

/// Fills a buffer with cryptographically secure random bytes from the kernel.
///
/// `getrandom` may return fewer bytes than requested or be interrupted by a
/// signal; both cases are retried until the buffer is full. Any other
/// failure is returned as [`Error::RandomnessUnavailable`].
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
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
            if err.raw_os_error() == Some(EINTR) {
                continue;
            }
            return Err(Error::RandomnessUnavailable(err));
        }

        filled += ret as usize;
    }

    Ok(())
}
