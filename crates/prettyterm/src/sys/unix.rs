use core::ptr::{from_mut, from_ref};
use std::io::{stdin, Result};
use std::os::fd::AsRawFd;

use super::{into_result::IntoResult, RawHandle};
use crate::size::WindowSize;

// ----------------------------------------------------------------------------------------------------------

/// Standard input's file descriptor.
#[inline]
fn stdin_handle() -> RawHandle {
    stdin().as_raw_fd()
}

/// Read the terminal configuration.
fn read_config(handle: RawHandle) -> Result<libc::termios> {
    let mut state = core::mem::MaybeUninit::uninit();
    // SAFETY: tcgetattr only writes through the pointer, which is valid for a
    // termios record.
    unsafe { libc::tcgetattr(handle, state.as_mut_ptr()) }.into_result()?;
    // SAFETY: tcgetattr succeeded and hence initialized the record.
    Ok(unsafe { state.assume_init() })
}

/// Write the terminal configuration, effective immediately.
fn write_config(handle: RawHandle, state: &libc::termios) -> Result<()> {
    // SAFETY: The pointer is derived from a reference and hence valid.
    unsafe { libc::tcsetattr(handle, libc::TCSANOW, from_ref(state)) }.into_result()
}

/// A guard that suppresses echo on standard input until dropped.
///
/// Line editing and signals stay enabled, so that the user can correct typos
/// and abort with control-c.
pub(crate) struct EchoGuard {
    handle: RawHandle,
    saved: libc::termios,
}

impl EchoGuard {
    /// Turn off echo on standard input.
    pub fn new() -> Result<Self> {
        Self::with_handle(stdin_handle())
    }

    /// Turn off echo on the terminal with the given file descriptor.
    pub fn with_handle(handle: RawHandle) -> Result<Self> {
        let saved = read_config(handle)?;

        let mut state = saved;
        state.c_lflag &= !libc::ECHO;
        state.c_lflag |= libc::ICANON | libc::ISIG;
        state.c_iflag |= libc::ICRNL;
        write_config(handle, &state)?;

        Ok(Self { handle, saved })
    }

    /// Restore the configuration saved upon creation.
    pub fn restore(&self) -> Result<()> {
        write_config(self.handle, &self.saved)
    }
}

impl Drop for EchoGuard {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            tracing::warn!(%error, "unable to restore terminal echo");
        }
    }
}

impl core::fmt::Debug for EchoGuard {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut flags = Vec::new();
        for (name, value) in [
            ("ECHO", libc::ECHO),
            ("ECHONL", libc::ECHONL),
            ("ICANON", libc::ICANON),
            ("ISIG", libc::ISIG),
        ] {
            if self.saved.c_lflag & value != 0 {
                flags.push(name);
            }
        }

        f.debug_struct("EchoGuard")
            .field("handle", &self.handle)
            .field("saved_flags", &flags)
            .finish()
    }
}

// ----------------------------------------------------------------------------------------------------------

/// Query the window size of the terminal connected to standard input.
pub(crate) fn window_size() -> Result<WindowSize> {
    let mut size = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCGWINSZ writes a winsize record through the pointer, which
    // is derived from a mutable reference to such a record.
    unsafe { libc::ioctl(stdin_handle(), libc::TIOCGWINSZ, from_mut(&mut size)) }.into_result()?;

    Ok(WindowSize::new(
        size.ws_row,
        size.ws_col,
        size.ws_xpixel,
        size.ws_ypixel,
    ))
}
