//! Helper module with the terminal's window size.

use crate::sys;

/// A terminal's window size.
///
/// The layout matches the `winsize` record filled in by the `TIOCGWINSZ`
/// ioctl. The default value is all zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
    pub x_pixels: u16,
    pub y_pixels: u16,
}

impl WindowSize {
    /// The size used on platforms without a window size query.
    pub const FALLBACK: WindowSize = WindowSize::new(80, 24, 100, 100);

    /// Create a new window size.
    pub const fn new(rows: u16, cols: u16, x_pixels: u16, y_pixels: u16) -> Self {
        Self {
            rows,
            cols,
            x_pixels,
            y_pixels,
        }
    }

    /// Determine whether all fields are zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Update this window size from the terminal connected to standard input.
    ///
    /// On Unix, this method queries the terminal. If that fails, the size
    /// keeps its current value. On other platforms, this method always sets
    /// the size to [`WindowSize::FALLBACK`].
    pub fn update(&mut self) {
        self.apply(sys::window_size());
    }

    fn apply(&mut self, result: std::io::Result<WindowSize>) {
        match result {
            Ok(size) => {
                tracing::debug!(
                    rows = size.rows,
                    cols = size.cols,
                    "updated window size"
                );
                *self = size;
            }
            Err(error) => {
                tracing::debug!(%error, "unable to query window size");
            }
        }
    }
}
