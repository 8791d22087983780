//! Helper module with this crate's error type.
//!
//! Most operations in this crate are best-effort and never fail. The
//! exception is reading hidden input, which must not fall back to echoing
//! secrets when the terminal cannot be reconfigured. Terminal errors convert
//! to I/O errors.

use std::io::{stderr, IsTerminal, Write};

use crate::esc;

/// The enumeration of error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The terminal mode could not be read or changed, e.g., because input
    /// is not a terminal.
    TerminalMode,
}

impl ErrorKind {
    /// Turn the error kind to an error message.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TerminalMode => "unable to change terminal mode",
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind, source: None }
    }
}

impl From<ErrorKind> for std::io::Error {
    fn from(value: ErrorKind) -> Self {
        Error::from(value).into()
    }
}

/// A terminal error.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<std::io::Error>,
}

impl Error {
    /// Create a new terminal mode error.
    pub fn terminal_mode(source: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::TerminalMode,
            source: Some(source),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.kind.as_str())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|error| error as &(dyn std::error::Error + 'static))
    }
}

impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error {
                source: Some(error),
                ..
            } => error,
            Error { source: None, .. } => Self::new(std::io::ErrorKind::Unsupported, value),
        }
    }
}

/// Report the error, including any sources, on standard error.
///
/// The headline is styled only if standard error is a terminal. Since there
/// is nowhere left to report to, errors writing the report are ignored.
pub fn report<E: std::error::Error>(error: &E) {
    let mut out = stderr().lock();
    let (on, off) = if out.is_terminal() {
        (esc::BH_RED, esc::RESET)
    } else {
        ("", "")
    };

    let _ = writeln!(out, "{}ERROR: {}{}", on, error, off);
    let mut error: &dyn std::error::Error = error;
    while let Some(inner) = error.source() {
        let _ = writeln!(out, "    {}", inner);
        error = inner;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_terminal_mode() {
        let error = Error::terminal_mode(std::io::Error::from_raw_os_error(25));
        assert_eq!(error.kind(), ErrorKind::TerminalMode);
        assert_eq!(format!("{}", error), "unable to change terminal mode");
        assert!(error.source().is_some());

        let io: std::io::Error = error.into();
        assert_eq!(io.raw_os_error(), Some(25));
    }

    #[test]
    fn test_conversion() {
        let io: std::io::Error = ErrorKind::TerminalMode.into();
        assert_eq!(io.kind(), std::io::ErrorKind::Unsupported);

        let error = Error::from(ErrorKind::TerminalMode);
        assert!(error.source().is_none());
        let io: std::io::Error = error.into();
        assert_eq!(io.kind(), std::io::ErrorKind::Unsupported);
        assert_eq!(format!("{}", io), "unable to change terminal mode");

        let error = Error::terminal_mode(std::io::ErrorKind::NotFound.into());
        let io: std::io::Error = error.into();
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn test_report() {
        // Writes to standard error and returns even if writing fails.
        report(&Error::terminal_mode(std::io::Error::from_raw_os_error(25)));
        report(&Error::from(ErrorKind::TerminalMode));
    }
}
