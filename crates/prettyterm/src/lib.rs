//! # Pretty 🌸 Term
//!
//! \[  [**Docs.rs**](https://docs.rs/prettyterm/latest/prettyterm/)
//! | [**Rust Crate**](https://crates.io/crates/prettyterm)
//! | [**Repository**](https://github.com/apparebit/prettypretty)
//! \]
//!
//! This crate provides **terminal-aware styles and simple prompts** for
//! command line tools. Its only dependencies are the low-level crates enabling
//! system calls, i.e., [`libc`](https://crates.io/crates/libc) on Unix and
//! [`windows-sys`](https://crates.io/crates/windows-sys) on Windows, the
//! [`tracing`](https://crates.io/crates/tracing) facade for diagnostics, and
//! [`unicode-general-category`](https://crates.io/crates/unicode-general-category)
//! for classifying characters.
//!
//! Using it is easy:
//!
//!   * Set up a [`Terminal`] at startup. It detects whether standard output
//!     is a terminal and derives a [`StyleSet`] accordingly.
//!   * Format output with the styles, e.g., `term[Style::Red]`. When output
//!     is piped or redirected, all styles are empty strings and the output is
//!     plain text.
//!   * Ask for input with [`Terminal::prompt`] or, for secrets,
//!     [`Terminal::prompt_hidden`]. Prompts are shown only when interactive.
//!
//! The [`esc`] module holds the read-only table of escape sequences, which
//! is not affected by turning styles off. [`util::strip_non_print`] removes
//! control characters from text meant for terminals. [`WindowSize`] tracks
//! the terminal's dimensions, which are queried on demand only.
//!
//!
//! # Example
//!
//! ```
//! # use prettyterm::{opt::Options, Style, Terminal};
//! let mut term = Terminal::with_options(Options::non_interactive());
//! let styles = term.styles();
//! assert_eq!(format!("{}warning{}", &styles[Style::BYellow], &styles[Style::X]),
//!     "warning");
//!
//! term.set_interactive(true);
//! let styles = term.styles();
//! assert_eq!(format!("{}warning{}", &styles[Style::BYellow], &styles[Style::X]),
//!     "\x1b[1;33mwarning\x1b[0m");
//! ```
//!
//!
//! # Diagnostics
//!
//! The crate emits `tracing` events for interactivity changes, emphasis
//! overrides, window size queries, and echo suppression. It never installs a
//! subscriber; that is up to the application.

pub mod err;
pub mod esc;
pub mod opt;
mod read;
mod size;
mod style;
mod sys;
mod term;
pub mod util;

pub use esc::Style;
pub use read::{read_hidden, read_line, read_line_from};
pub use size::WindowSize;
pub use style::{derive_styles, StyleSet, EMPHASIS_VARIABLES};
pub use term::{detect_interactive, Terminal};
