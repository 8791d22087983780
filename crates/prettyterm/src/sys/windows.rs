use core::ptr::from_mut;
use std::io::{stdin, Result};
use std::os::windows::io::AsRawHandle;

use windows_sys::Win32::System::Console::{self, CONSOLE_MODE as ConsoleMode};

use super::{into_result::IntoResult, RawHandle};

// ----------------------------------------------------------------------------------------------------------

/// Standard input's handle.
#[inline]
fn stdin_handle() -> RawHandle {
    stdin().as_raw_handle()
}

fn read_mode(handle: RawHandle) -> Result<ConsoleMode> {
    let mut mode = 0;
    // SAFETY: The pointer is derived from a mutable reference and hence valid.
    unsafe { Console::GetConsoleMode(handle, from_mut(&mut mode)) }.into_result()?;
    Ok(mode)
}

fn write_mode(handle: RawHandle, mode: ConsoleMode) -> Result<()> {
    // SAFETY: SetConsoleMode validates the handle.
    unsafe { Console::SetConsoleMode(handle, mode) }.into_result()
}

/// A guard that suppresses echo on the console input until dropped.
#[derive(Debug)]
pub(crate) struct EchoGuard {
    handle: RawHandle,
    saved: ConsoleMode,
}

impl EchoGuard {
    /// Turn off echo.
    pub fn new() -> Result<Self> {
        let handle = stdin_handle();
        let saved = read_mode(handle)?;

        let mode = (saved & !Console::ENABLE_ECHO_INPUT)
            | Console::ENABLE_LINE_INPUT
            | Console::ENABLE_PROCESSED_INPUT;
        write_mode(handle, mode)?;

        Ok(Self { handle, saved })
    }

    /// Restore the console mode saved upon creation.
    pub fn restore(&self) -> Result<()> {
        write_mode(self.handle, self.saved)
    }
}

impl Drop for EchoGuard {
    fn drop(&mut self) {
        if let Err(error) = self.restore() {
            tracing::warn!(%error, "unable to restore console echo");
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

pub(crate) use super::fallback_window_size as window_size;
