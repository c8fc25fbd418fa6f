// Process CPU time via getrusage(RUSAGE_SELF)

/// Cumulative (user, system) CPU time of this process in microseconds.
#[cfg(unix)]
pub(super) fn process_cpu_micros() -> anyhow::Result<(u64, u64)> {
    let mut usage = std::mem::MaybeUninit::<libc::rusage>::zeroed();
    // SAFETY: getrusage fills the whole struct on success; zeroed storage is a valid rusage.
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, usage.as_mut_ptr()) };
    if rc != 0 {
        anyhow::bail!("getrusage: {}", std::io::Error::last_os_error());
    }
    // SAFETY: initialized above (zeroed, then written by the kernel).
    let usage = unsafe { usage.assume_init() };
    Ok((timeval_micros(usage.ru_utime), timeval_micros(usage.ru_stime)))
}

#[cfg(not(unix))]
pub(super) fn process_cpu_micros() -> anyhow::Result<(u64, u64)> {
    anyhow::bail!("process CPU time is not available on {}", std::env::consts::OS)
}

#[cfg(unix)]
fn timeval_micros(tv: libc::timeval) -> u64 {
    let secs = u64::try_from(tv.tv_sec).unwrap_or(0);
    let micros = u64::try_from(tv.tv_usec).unwrap_or(0);
    secs * 1_000_000 + micros
}
