// Allocator heap statistics (jemalloc `stats.*`)

#[cfg(not(target_env = "msvc"))]
use std::ffi::CStr;
#[cfg(not(target_env = "msvc"))]
use std::ptr;

/// (allocated, resident) bytes as last published by jemalloc.
#[cfg(not(target_env = "msvc"))]
pub(super) fn heap_stats() -> Option<(u64, u64)> {
    // Stats are cached per epoch; bump it so the reads below are current.
    let mut epoch: u64 = 1;
    // SAFETY: "epoch" takes a u64 write; no old value is requested.
    unsafe {
        tikv_jemalloc_sys::mallctl(
            c"epoch".as_ptr().cast(),
            ptr::null_mut(),
            ptr::null_mut(),
            (&mut epoch as *mut u64).cast(),
            std::mem::size_of::<u64>(),
        );
    }
    let allocated = read_size(c"stats.allocated")?;
    let resident = read_size(c"stats.resident")?;
    Some((allocated, resident))
}

#[cfg(not(target_env = "msvc"))]
fn read_size(name: &CStr) -> Option<u64> {
    let mut value: usize = 0;
    let mut len = std::mem::size_of::<usize>();
    // SAFETY: stats.allocated / stats.resident are size_t reads into a matching buffer.
    let rc = unsafe {
        tikv_jemalloc_sys::mallctl(
            name.as_ptr(),
            (&mut value as *mut usize).cast(),
            &mut len,
            ptr::null_mut(),
            0,
        )
    };
    (rc == 0).then_some(value as u64)
}

#[cfg(target_env = "msvc")]
pub(super) fn heap_stats() -> Option<(u64, u64)> {
    None
}
