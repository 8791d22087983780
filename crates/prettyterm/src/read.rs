//! Helper module for reading lines of input.
//!
//! Reading is deliberately forgiving: [`read_line`] never fails and treats
//! read errors like the end of input. In contrast, [`read_hidden`] fails if
//! it cannot suppress echo, since the alternative would be showing a secret.

use std::io::{self, stdin, BufRead};

use crate::err::Error;
use crate::sys::EchoGuard;

/// Read one line from standard input.
///
/// See [`read_line_from`] for details.
pub fn read_line() -> String {
    read_line_from(&mut stdin().lock())
}

/// Read one line from the given input.
///
/// This function reads up to and including the next newline, removes the
/// newline and then a trailing carriage return, and returns the rest. At the end
/// of input, the result is whatever was read, which may be the empty string.
/// Read errors end the line early. Malformed UTF-8 is replaced with U+FFFD.
///
/// # Example
///
/// ```
/// # use prettyterm::read_line_from;
/// let mut input = "hello\r\nworld".as_bytes();
/// assert_eq!(read_line_from(&mut input), "hello");
/// assert_eq!(read_line_from(&mut input), "world");
/// assert_eq!(read_line_from(&mut input), "");
/// ```
pub fn read_line_from<R: BufRead + ?Sized>(input: &mut R) -> String {
    let mut buffer = Vec::new();
    if let Err(error) = input.read_until(b'\n', &mut buffer) {
        tracing::debug!(%error, bytes = buffer.len(), "reading line failed");
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
    }
    if buffer.last() == Some(&b'\r') {
        buffer.pop();
    }

    String::from_utf8_lossy(&buffer).into_owned()
}

/// Read one line from standard input without echoing it.
///
/// This function turns off echo for the duration of the read and trims
/// leading and trailing whitespace from the result. Since the newline isn't
/// echoed either, callers may want to write one after this function returns.
///
/// # Errors
///
/// If standard input is not a terminal or its mode cannot be changed, this
/// function returns an error of kind
/// [`ErrorKind::TerminalMode`](crate::err::ErrorKind::TerminalMode) without
/// reading anything.
pub fn read_hidden() -> Result<String, Error> {
    read_hidden_from(EchoGuard::new(), &mut stdin().lock())
}

/// Read a line while the guard suppresses echo.
///
/// If the guard could not be created, nothing is read.
fn read_hidden_from<R: BufRead + ?Sized>(
    guard: io::Result<EchoGuard>,
    input: &mut R,
) -> Result<String, Error> {
    let guard = guard.map_err(Error::terminal_mode)?;
    tracing::debug!("suppressed echo");

    let line = read_trimmed_from(input);
    drop(guard);
    tracing::debug!("restored echo");

    Ok(line)
}

/// Read one line and trim leading and trailing whitespace.
fn read_trimmed_from<R: BufRead + ?Sized>(input: &mut R) -> String {
    read_line_from(input).trim().to_owned()
}
