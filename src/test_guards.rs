//! RAII guard for environment variables in tests.
//!
//! Config tests read `FEEDBACK_*` variables from the process environment.
//! The guard snapshots a variable when created and puts it back on drop, even
//! if the test panics. Tests using it must be `#[serial]`: the environment is
//! process-global.

use std::env;
use std::ffi::{OsStr, OsString};

/// Restores one environment variable to its snapshotted value on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<OsString>,
}

impl EnvGuard {
    fn snapshot(key: &'static str) -> Self {
        Self {
            key,
            original: env::var_os(key),
        }
    }

    /// Snapshot `key`, then set it to `value`.
    ///
    /// # Safety
    /// Calls `std::env::set_var`; the caller must be `#[serial]`.
    pub unsafe fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let guard = Self::snapshot(key);
        unsafe { env::set_var(key, value) };
        guard
    }

    /// Snapshot `key`, then unset it.
    ///
    /// # Safety
    /// Calls `std::env::remove_var`; the caller must be `#[serial]`.
    pub unsafe fn remove(key: &'static str) -> Self {
        let guard = Self::snapshot(key);
        unsafe { env::remove_var(key) };
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: only used from #[serial] tests.
        unsafe {
            match self.original.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEY: &str = "FEEDBACK_TEST_GUARD";

    #[test]
    #[serial]
    fn test_restores_previous_value() {
        unsafe { env::set_var(KEY, "before") };
        {
            let _guard = unsafe { EnvGuard::set(KEY, "during") };
            assert_eq!(env::var(KEY).unwrap(), "during");
        }
        assert_eq!(env::var(KEY).unwrap(), "before");
        unsafe { env::remove_var(KEY) };
    }

    #[test]
    #[serial]
    fn test_restores_absence() {
        unsafe { env::remove_var(KEY) };
        {
            let _guard = unsafe { EnvGuard::set(KEY, "during") };
        }
        assert!(env::var_os(KEY).is_none());
    }

    #[test]
    #[serial]
    fn test_remove_then_restore() {
        unsafe { env::set_var(KEY, "kept") };
        {
            let _guard = unsafe { EnvGuard::remove(KEY) };
            assert!(env::var_os(KEY).is_none());
        }
        assert_eq!(env::var(KEY).unwrap(), "kept");
        unsafe { env::remove_var(KEY) };
    }
}
