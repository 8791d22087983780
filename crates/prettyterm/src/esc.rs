//! The read-only table of ANSI escape sequences.
//!
//! The constants in this module always hold the real VT100/ANSI control
//! sequences, no matter whether output goes to a terminal. They are the
//! source for [`StyleSet`](crate::StyleSet), which blanks them out when
//! styles are disabled. Code that formats a constant or a [`Style`] directly
//! hence always emits escape sequences.
//!
//! # Example
//!
//! ```
//! # use prettyterm::esc::{self, Style};
//! assert_eq!(esc::RED, "\x1b[31m");
//! assert_eq!(Style::Red.escape(), esc::RED);
//! assert_eq!(format!("{}on{}", Style::B, Style::X), "\x1b[1mon\x1b[0m");
//! ```

pub const RESET: &str = "\x1b[0m";
pub const BRIGHT: &str = "\x1b[1m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDER: &str = "\x1b[4m";
pub const BLINK: &str = "\x1b[5m";
/// Rapid blinking, which few terminals support.
pub const BLINK_F: &str = "\x1b[6m";
pub const REVERSE: &str = "\x1b[7m";
pub const HIDDEN: &str = "\x1b[8m";
pub const STRIKE: &str = "\x1b[9m";
pub const BOLD_ITALIC: &str = "\x1b[1m\x1b[3m";

pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

pub const B_BLACK: &str = "\x1b[1;30m";
pub const B_RED: &str = "\x1b[1;31m";
pub const B_GREEN: &str = "\x1b[1;32m";
pub const B_YELLOW: &str = "\x1b[1;33m";
pub const B_BLUE: &str = "\x1b[1;34m";
pub const B_MAGENTA: &str = "\x1b[1;35m";
pub const B_CYAN: &str = "\x1b[1;36m";
pub const B_WHITE: &str = "\x1b[1;37m";

pub const H_BLACK: &str = "\x1b[90m";
pub const H_RED: &str = "\x1b[91m";
pub const H_GREEN: &str = "\x1b[92m";
pub const H_YELLOW: &str = "\x1b[93m";
pub const H_BLUE: &str = "\x1b[94m";
pub const H_MAGENTA: &str = "\x1b[95m";
pub const H_CYAN: &str = "\x1b[96m";
pub const H_WHITE: &str = "\x1b[97m";

pub const BH_BLACK: &str = "\x1b[1;90m";
pub const BH_RED: &str = "\x1b[1;91m";
pub const BH_GREEN: &str = "\x1b[1;92m";
pub const BH_YELLOW: &str = "\x1b[1;93m";
pub const BH_BLUE: &str = "\x1b[1;94m";
pub const BH_MAGENTA: &str = "\x1b[1;95m";
pub const BH_CYAN: &str = "\x1b[1;96m";
pub const BH_WHITE: &str = "\x1b[1;97m";

macro_rules! define_styles {
    ($($name:ident => $escape:expr),+ $(,)?) => {
        /// The names of all styles.
        ///
        /// Besides the attributes and the 32 colors, the enumeration includes
        /// the shorthands `X`, `B`, `I`, `U`, and `BI` for reset, bold, italic,
        /// underline, and bold italic, which make for compact format strings.
        /// Variants are numbered in declaration order, starting at zero.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Style {
            $(
                #[doc = concat!("The `", stringify!($name), "` style.")]
                $name,
            )+
        }

        impl Style {
            /// All styles in declaration order.
            pub const ALL: [Style; Style::COUNT] = [$(Style::$name),+];

            /// Get the style's escape sequence from the read-only table.
            pub const fn escape(self) -> &'static str {
                match self {
                    $(Style::$name => $escape,)+
                }
            }

            /// Get the style's name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Style::$name => stringify!($name),)+
                }
            }
        }
    };
}

define_styles! {
    Reset => RESET,
    Bright => BRIGHT,
    Bold => BOLD,
    Dim => DIM,
    Italic => ITALIC,
    Under => UNDER,
    Blink => BLINK,
    BlinkF => BLINK_F,
    Reverse => REVERSE,
    Hidden => HIDDEN,
    Strike => STRIKE,
    BoldItalic => BOLD_ITALIC,
    Black => BLACK,
    Red => RED,
    Green => GREEN,
    Yellow => YELLOW,
    Blue => BLUE,
    Magenta => MAGENTA,
    Cyan => CYAN,
    White => WHITE,
    BBlack => B_BLACK,
    BRed => B_RED,
    BGreen => B_GREEN,
    BYellow => B_YELLOW,
    BBlue => B_BLUE,
    BMagenta => B_MAGENTA,
    BCyan => B_CYAN,
    BWhite => B_WHITE,
    HBlack => H_BLACK,
    HRed => H_RED,
    HGreen => H_GREEN,
    HYellow => H_YELLOW,
    HBlue => H_BLUE,
    HMagenta => H_MAGENTA,
    HCyan => H_CYAN,
    HWhite => H_WHITE,
    BHBlack => BH_BLACK,
    BHRed => BH_RED,
    BHGreen => BH_GREEN,
    BHYellow => BH_YELLOW,
    BHBlue => BH_BLUE,
    BHMagenta => BH_MAGENTA,
    BHCyan => BH_CYAN,
    BHWhite => BH_WHITE,
    X => RESET,
    B => BOLD,
    I => ITALIC,
    U => UNDER,
    BI => BOLD_ITALIC,
}

impl Style {
    /// The number of styles.
    pub const COUNT: usize = 49;

    /// Get the style's position in [`Style::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl core::fmt::Display for Style {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.escape())
    }
}
