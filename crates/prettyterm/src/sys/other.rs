use std::io::{ErrorKind, Result};

/// A placeholder for platforms without terminal modes.
#[derive(Debug)]
pub(crate) struct EchoGuard;

impl EchoGuard {
    /// Fail to turn off echo.
    pub fn new() -> Result<Self> {
        Err(ErrorKind::Unsupported.into())
    }
}

pub(crate) use super::fallback_window_size as window_size;
