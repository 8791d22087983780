//! Sets of styles that are either all on or all off.
//!
//! A [`StyleSet`] maps every [`Style`] to the string an application should
//! write for it. [`derive_styles`] creates the set from the escape table when
//! styles are enabled and fills it with empty strings when they are disabled.
//! Since the set is an ordinary value, there is no hidden global state: an
//! application derives a set once, usually through
//! [`Terminal`](crate::Terminal), and passes it to wherever output is
//! formatted.
//!
//! # Example
//!
//! ```
//! # use prettyterm::{derive_styles, Style};
//! let on = derive_styles(true);
//! let off = derive_styles(false);
//!
//! assert_eq!(format!("{}red{}", &on[Style::Red], &on[Style::Reset]),
//!     "\x1b[31mred\x1b[0m");
//! assert_eq!(format!("{}red{}", &off[Style::Red], &off[Style::Reset]), "red");
//! ```

use core::ops::Index;
use std::borrow::Cow;

use crate::esc::Style;

/// The environment variables consulted for emphasis overrides.
///
/// They are the variables that color man pages through `less`. Note that
/// `LESS_TERMCAP_us` (start underline) sets *both* italic and underline,
/// since `less` has no variable for italic.
pub const EMPHASIS_VARIABLES: [(Style, &str); 4] = [
    (Style::Italic, "LESS_TERMCAP_us"),
    (Style::Bold, "LESS_TERMCAP_md"),
    (Style::BoldItalic, "LESS_TERMCAP_mb"),
    (Style::Under, "LESS_TERMCAP_us"),
];

/// Derive the style set, with real escape sequences if `enabled` and empty
/// strings otherwise.
#[inline]
pub fn derive_styles(enabled: bool) -> StyleSet {
    StyleSet::new(enabled)
}

/// A complete set of styles.
///
/// All entries are derived together, so a set never mixes escape sequences
/// and empty strings. The only exception are the emphasis overrides from
/// [`StyleSet::with_emphasis`], which apply to enabled sets only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleSet {
    enabled: bool,
    values: [Cow<'static, str>; Style::COUNT],
}

impl StyleSet {
    fn new(enabled: bool) -> Self {
        let values = Style::ALL.map(|style| {
            if enabled {
                Cow::Borrowed(style.escape())
            } else {
                Cow::Borrowed("")
            }
        });

        tracing::debug!(enabled, "derived style set");
        Self { enabled, values }
    }

    /// Create a style set with escape sequences.
    pub fn on() -> Self {
        Self::new(true)
    }

    /// Create a style set with empty strings only.
    pub fn off() -> Self {
        Self::new(false)
    }

    /// Determine whether this set was derived with styles enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the string for the style.
    #[inline]
    pub fn get(&self, style: Style) -> &str {
        &self.values[style.index()]
    }

    /// Iterate over all styles and their strings.
    pub fn iter(&self) -> impl Iterator<Item = (Style, &str)> {
        Style::ALL
            .iter()
            .zip(self.values.iter())
            .map(|(style, value)| (*style, value.as_ref()))
    }

    /// Wrap the text in the style, followed by this set's reset.
    ///
    /// For a disabled set, the result is just the text.
    pub fn paint<T: core::fmt::Display>(&self, style: Style, text: T) -> String {
        format!("{}{}{}", self.get(style), text, self.get(Style::Reset))
    }

    /// Override emphasis styles from the `LESS_TERMCAP_*` environment
    /// variables.
    ///
    /// See [`StyleSet::with_emphasis`] for details.
    #[must_use = "method returns a new style set and does not mutate the original"]
    pub fn with_emphasis_from_env(self) -> Self {
        self.with_emphasis(|name| std::env::var(name).ok())
    }

    /// Override emphasis styles with the values looked up for
    /// [`EMPHASIS_VARIABLES`].
    ///
    /// If this set is disabled, it is returned unchanged. Otherwise, each
    /// variable with a non-empty value replaces the corresponding style's
    /// string with that raw value. The shorthand styles keep their escape
    /// sequences.
    #[must_use = "method returns a new style set and does not mutate the original"]
    pub fn with_emphasis<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if !self.enabled {
            return self;
        }

        for (style, variable) in EMPHASIS_VARIABLES {
            match lookup(variable) {
                Some(value) if !value.is_empty() => {
                    tracing::debug!(style = style.name(), variable, "overriding emphasis");
                    self.values[style.index()] = Cow::Owned(value);
                }
                _ => (),
            }
        }

        self
    }
}

impl Default for StyleSet {
    /// Create a disabled style set.
    fn default() -> Self {
        Self::off()
    }
}

impl Index<Style> for StyleSet {
    type Output = str;

    fn index(&self, style: Style) -> &Self::Output {
        self.get(style)
    }
}
