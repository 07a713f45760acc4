use libc::arc4random_buf;

use crate::error::Error;

// arc4random_buf cannot fail; it aborts the process itself if the kernel
// source is gone.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }

    Ok(())
}
