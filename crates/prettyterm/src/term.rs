use std::io::{stdin, stdout, BufRead, IsTerminal, Write};

use crate::err::Error;
use crate::esc::Style;
use crate::opt::Options;
use crate::read::{read_hidden, read_line_from};
use crate::size::WindowSize;
use crate::style::{derive_styles, StyleSet};

/// Determine whether standard output is an interactive terminal.
///
/// This function returns `false` if output is redirected to a file or pipe
/// and also if the platform cannot tell.
pub fn detect_interactive() -> bool {
    stdout().is_terminal()
}

/// A handle on the terminal's interactivity, styles, and window size.
///
/// An application creates one terminal handle at startup and passes it, or
/// just its [`StyleSet`], to code that formats output or prompts the user.
/// Whenever the interactivity changes, the handle re-derives its styles, so
/// that interactive output has escape sequences and non-interactive output
/// has none.
///
/// # Example
///
/// ```
/// # use prettyterm::{opt::Options, Style, Terminal};
/// let mut term = Terminal::with_options(Options::non_interactive());
/// assert_eq!(format!("{}hi{}", &term[Style::Bold], &term[Style::Reset]), "hi");
///
/// term.set_interactive(true);
/// assert_eq!(format!("{}hi{}", &term[Style::Bold], &term[Style::Reset]),
///     "\x1b[1mhi\x1b[0m");
/// ```
#[derive(Clone, Debug)]
pub struct Terminal {
    options: Options,
    interactive: bool,
    styles: StyleSet,
    window_size: WindowSize,
}

impl Terminal {
    /// Set up a terminal handle with the default options.
    pub fn open() -> Self {
        Self::with_options(Options::default())
    }

    /// Set up a terminal handle with the given options.
    pub fn with_options(options: Options) -> Self {
        let interactive = match options.interactive() {
            Some(interactive) => interactive,
            None => {
                let interactive = detect_interactive();
                tracing::debug!(interactive, "detected interactivity");
                interactive
            }
        };

        let mut this = Self {
            options,
            interactive,
            styles: derive_styles(interactive),
            window_size: WindowSize::default(),
        };

        if this.options.emphasis_from_env() {
            this.apply_emphasis_from_environment();
        }
        if this.options.query_window_size() {
            this.update_window_size();
        }

        this
    }

    /// Get the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    // ------------------------------------------------------------------------------------------

    /// Determine whether the terminal is considered interactive.
    #[inline]
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Override the interactivity.
    ///
    /// This method turns styles on for interactive and off for
    /// non-interactive terminals.
    pub fn set_interactive(&mut self, interactive: bool) {
        tracing::debug!(interactive, "setting interactivity");
        self.interactive = interactive;
        if interactive {
            self.style_on();
        } else {
            self.style_off();
        }
    }

    /// Use escape sequences for all styles.
    pub fn style_on(&mut self) {
        self.styles = derive_styles(true);
    }

    /// Use empty strings for all styles.
    pub fn style_off(&mut self) {
        self.styles = derive_styles(false);
    }

    /// Determine whether styles are on.
    #[inline]
    pub fn attrs_enabled(&self) -> bool {
        self.styles.is_enabled()
    }

    /// Get the current styles.
    #[inline]
    pub fn styles(&self) -> &StyleSet {
        &self.styles
    }

    /// Override emphasis styles from `LESS_TERMCAP_*` environment variables.
    ///
    /// This method does nothing if styles are off. See
    /// [`StyleSet::with_emphasis`] for details.
    pub fn apply_emphasis_from_environment(&mut self) {
        self.styles = core::mem::take(&mut self.styles).with_emphasis_from_env();
    }

    // ------------------------------------------------------------------------------------------

    /// Get the window size.
    ///
    /// The size is all zeros until the first call to
    /// [`Terminal::update_window_size`].
    #[inline]
    pub fn window_size(&self) -> WindowSize {
        self.window_size
    }

    /// Update the window size. See [`WindowSize::update`].
    pub fn update_window_size(&mut self) {
        self.window_size.update();
    }

    // ------------------------------------------------------------------------------------------

    /// Prompt the user for a line of input.
    ///
    /// If the terminal is interactive, this method writes the message to
    /// standard output without a trailing newline. Either way, it then reads
    /// a line with [`read_line`](crate::read_line). Use
    /// [`format_args!`] to format the message.
    pub fn prompt<M: core::fmt::Display>(&self, message: M) -> String {
        self.prompt_with(&mut stdin().lock(), &mut stdout().lock(), message)
    }

    /// Prompt the user for a line of input, using the given streams.
    ///
    /// # Example
    ///
    /// ```
    /// # use prettyterm::{opt::Options, Terminal};
    /// let term = Terminal::with_options(Options::non_interactive());
    /// let mut input = "Alice\n".as_bytes();
    /// let mut output = Vec::new();
    ///
    /// let name = term.prompt_with(&mut input, &mut output, "Name: ");
    /// assert_eq!(name, "Alice");
    /// assert!(output.is_empty());
    /// ```
    pub fn prompt_with<R, W, M>(&self, input: &mut R, output: &mut W, message: M) -> String
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
        M: core::fmt::Display,
    {
        self.show_prompt(output, message);
        read_line_from(input)
    }

    /// Prompt the user for a line of input without echoing it.
    ///
    /// This method writes the message just like [`Terminal::prompt`] but
    /// then reads a line with [`read_hidden`](crate::read_hidden).
    ///
    /// # Errors
    ///
    /// This method fails if it cannot suppress echo.
    pub fn prompt_hidden<M: core::fmt::Display>(&self, message: M) -> Result<String, Error> {
        self.show_prompt(&mut stdout().lock(), message);
        read_hidden()
    }

    fn show_prompt<W, M>(&self, output: &mut W, message: M)
    where
        W: Write + ?Sized,
        M: core::fmt::Display,
    {
        if !self.interactive {
            return;
        }

        let result = write!(output, "{}", message).and_then(|()| output.flush());
        if let Err(error) = result {
            tracing::debug!(%error, "writing prompt failed");
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::open()
    }
}

impl core::ops::Index<Style> for Terminal {
    type Output = str;

    fn index(&self, style: Style) -> &Self::Output {
        self.styles.get(style)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn quiet() -> Terminal {
        Terminal::with_options(Options::non_interactive())
    }

    #[test]
    fn test_toggle() {
        let mut term = quiet();
        assert!(!term.is_interactive());
        assert!(!term.attrs_enabled());
        assert_eq!(term.styles(), &StyleSet::off());

        term.set_interactive(true);
        assert!(term.is_interactive());
        assert!(term.attrs_enabled());
        for style in Style::ALL {
            assert_eq!(&term[style], style.escape());
        }

        term.set_interactive(false);
        assert!(!term.attrs_enabled());
        for style in Style::ALL {
            assert_eq!(&term[style], "");
        }
    }

    #[test]
    fn test_style_independent_of_interactivity() {
        let mut term = quiet();
        term.style_on();
        assert!(!term.is_interactive());
        assert!(term.attrs_enabled());
        assert_eq!(&term[Style::Red], "\x1b[31m");

        term.style_off();
        term.style_on();
        assert_eq!(term.styles(), &StyleSet::on());

        // The raw table is unaffected by toggling.
        term.style_off();
        assert_eq!(Style::Red.escape(), "\x1b[31m");
        assert_eq!(crate::esc::RED, "\x1b[31m");
    }

    #[test]
    fn test_emphasis_when_off() {
        let mut term = quiet();
        term.apply_emphasis_from_environment();
        assert_eq!(term.styles(), &StyleSet::off());
    }

    #[test]
    fn test_window_size_starts_at_zero() {
        assert!(quiet().window_size().is_zero());
    }

    #[test]
    fn test_prompt() {
        let mut term = quiet();
        let mut input = "first\nsecond\n".as_bytes();
        let mut output = Vec::new();

        let line = term.prompt_with(&mut input, &mut output, format_args!("{}: ", "Enter"));
        assert_eq!(line, "first");
        assert!(output.is_empty());

        term.set_interactive(true);
        let line = term.prompt_with(&mut input, &mut output, format_args!("{}: ", "Again"));
        assert_eq!(line, "second");
        assert_eq!(output, b"Again: ");

        let line = term.prompt_with(&mut input, &mut output, "More: ");
        assert_eq!(line, "");
        assert_eq!(output, b"Again: More: ");
    }
}
