//! Helper module with the options for setting up a terminal handle.
//!
//! This module provides the options for a [`Terminal`](crate::Terminal) and
//! the corresponding builder. By default, a terminal detects interactivity
//! and leaves everything else alone.
//!
//!
//! # Example
//!
//! ```
//! # use prettyterm::opt::Options;
//! let options = Options::builder()
//!     .interactive(false)
//!     .emphasis_from_env(true)
//!     .build();
//!
//! assert_eq!(options.interactive(), Some(false));
//! assert!(options.emphasis_from_env());
//! assert!(!options.query_window_size());
//! ```

#[derive(Clone, Debug, PartialEq, Eq)]
struct OptionData {
    interactive: Option<bool>,
    emphasis_from_env: bool,
    query_window_size: bool,
}

impl OptionData {
    pub const fn new() -> Self {
        Self {
            interactive: None,
            emphasis_from_env: false,
            query_window_size: false,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Force interactivity instead of detecting it.
    pub fn interactive(&mut self, interactive: bool) -> &mut Self {
        self.0.interactive = Some(interactive);
        self
    }

    /// Detect interactivity, which is the default.
    pub fn detect_interactive(&mut self) -> &mut Self {
        self.0.interactive = None;
        self
    }

    /// Override emphasis styles from `LESS_TERMCAP_*` environment variables
    /// during setup.
    pub fn emphasis_from_env(&mut self, enable: bool) -> &mut Self {
        self.0.emphasis_from_env = enable;
        self
    }

    /// Query the window size during setup.
    pub fn query_window_size(&mut self, enable: bool) -> &mut Self {
        self.0.query_window_size = enable;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with interactivity forced off.
    ///
    /// This is useful for tests and for `--no-color` style flags.
    pub fn non_interactive() -> Options {
        Self::builder().interactive(false).build()
    }

    /// Get the forced interactivity, if any.
    pub fn interactive(&self) -> Option<bool> {
        self.0.interactive
    }

    /// Determine whether to apply emphasis overrides during setup.
    pub fn emphasis_from_env(&self) -> bool {
        self.0.emphasis_from_env
    }

    /// Determine whether to query the window size during setup.
    pub fn query_window_size(&self) -> bool {
        self.0.query_window_size
    }
}

#[cfg(test)]
mod test {
    use super::Options;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.interactive(), None);
        assert!(!options.emphasis_from_env());
        assert!(!options.query_window_size());
        assert_eq!(options, Options::builder().build());
    }

    #[test]
    fn test_builder() {
        let options = Options::builder()
            .interactive(true)
            .query_window_size(true)
            .detect_interactive()
            .build();
        assert_eq!(options.interactive(), None);
        assert!(options.query_window_size());

        assert_eq!(Options::non_interactive().interactive(), Some(false));
    }
}
