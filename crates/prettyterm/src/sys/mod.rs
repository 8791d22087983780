#[cfg(target_family = "unix")]
pub(crate) type RawHandle = std::os::fd::RawFd;
#[cfg(target_family = "windows")]
pub(crate) type RawHandle = std::os::windows::io::RawHandle;

#[cfg(any(target_family = "unix", target_family = "windows"))]
mod into_result;
#[cfg(target_family = "unix")]
mod unix;
#[cfg(target_family = "windows")]
mod windows;
#[cfg(not(any(target_family = "unix", target_family = "windows")))]
mod other;

#[cfg(target_family = "unix")]
pub(crate) use self::unix::{window_size, EchoGuard};
#[cfg(target_family = "windows")]
pub(crate) use self::windows::{window_size, EchoGuard};
#[cfg(not(any(target_family = "unix", target_family = "windows")))]
pub(crate) use self::other::{window_size, EchoGuard};

use crate::size::WindowSize;

/// Get the window size on platforms without a window size query.
#[cfg_attr(target_family = "unix", allow(dead_code))]
#[inline]
pub(crate) fn fallback_window_size() -> std::io::Result<WindowSize> {
    Ok(WindowSize::FALLBACK)
}
