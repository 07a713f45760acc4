use std::io;

use windows_sys::Win32::Security::Cryptography::{
    BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
};

use crate::error::Error;

pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
    // BCryptGenRandom takes a u32 length, so large buffers go in chunks.
    for chunk in buf.chunks_mut(u32::MAX as usize) {
        let status = unsafe {
            BCryptGenRandom(
                std::ptr::null_mut(),
                chunk.as_mut_ptr(),
                chunk.len() as u32,
                BCRYPT_USE_SYSTEM_PREFERRED_RNG,
            )
        };

        if status != 0 {
            return Err(Error::RandomnessUnavailable(io::Error::other(format!(
                "BCryptGenRandom failed with status {status:#x}"
            ))));
        }
    }

    Ok(())
}
