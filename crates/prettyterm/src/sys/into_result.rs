use std::io::Result;

/// Trait to convert a C status code into a Rust result.
///
/// On Unix, system calls signal errors by returning -1. On Windows, console
/// functions signal errors by returning `FALSE`, i.e., zero. Either way, the
/// details are in the thread's last OS error.
pub(crate) trait IntoResult {
    /// Convert this status code into a Rust result.
    fn into_result(self) -> Result<()>;
}

impl IntoResult for i32 {
    #[inline]
    fn into_result(self) -> Result<()> {
        #[cfg(target_family = "unix")]
        let failed = self == -1;
        #[cfg(target_family = "windows")]
        let failed = self == 0;

        if failed {
            Err(std::io::Error::last_os_error())
        } else {
            Ok(())
        }
    }
}
