use tracing::subscriber::DefaultGuard;

/// Installs a fmt subscriber for the current test thread.
///
/// The subscriber is thread-scoped, so tests using `#[traced_test]` can still
/// claim the global dispatcher. Keep the guard alive for the whole test.
pub fn setup_test_logging() -> DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Returns true when the current process runs as root (UID 0).
/// Permission-sensitive tests are skipped in that case.
#[inline]
pub fn running_as_root() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid has no side effects.
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(not(unix))]
    {
        false
    }
}
