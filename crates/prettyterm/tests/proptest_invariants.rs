//! Property-based invariant tests for styles and text filtering.
//!
//! 1. Stripping non-printable characters is idempotent.
//! 2. Stripping never lengthens its input.
//! 3. Stripping preserves the order of the remaining characters.
//! 4. Strings of printable characters are unchanged.
//! 5. Every style set is all escape sequences or all empty strings.
//! 6. Toggling interactivity off and on restores the original styles.
//! 7. Emphasis overrides never touch a disabled style set.

use prettyterm::opt::Options;
use prettyterm::util::{is_printable, strip_non_print};
use prettyterm::{derive_styles, Style, StyleSet, Terminal};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn printable_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>().prop_filter("printable", |c| is_printable(*c)), 0..64)
        .prop_map(|chars| chars.into_iter().collect())
}

fn terminal_text_strategy() -> impl Strategy<Value = String> {
    // Mix escape sequences, controls, and ordinary text.
    prop::collection::vec(
        prop_oneof![
            Just("\x1b[1m".to_owned()),
            Just("\x1b[0m".to_owned()),
            Just("\r\n".to_owned()),
            Just("\t".to_owned()),
            "[a-zA-Z0-9 ]{0,8}",
            any::<char>().prop_map(String::from),
        ],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

// ── Filtering ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn strip_is_idempotent(s in terminal_text_strategy()) {
        let once = strip_non_print(&s);
        prop_assert_eq!(strip_non_print(&once), once);
    }

    #[test]
    fn strip_never_lengthens(s in any::<String>()) {
        let stripped = strip_non_print(&s);
        prop_assert!(stripped.len() <= s.len());
        prop_assert!(stripped.chars().count() <= s.chars().count());
    }

    #[test]
    fn strip_keeps_order(s in terminal_text_strategy()) {
        let expected: String = s.chars().filter(|c| is_printable(*c)).collect();
        prop_assert_eq!(strip_non_print(&s), expected);
    }

    #[test]
    fn strip_leaves_printable_alone(s in printable_strategy()) {
        prop_assert_eq!(strip_non_print(&s), s);
    }
}

// ── Styles ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn style_sets_are_uniform(enabled in any::<bool>()) {
        let styles = derive_styles(enabled);
        prop_assert_eq!(styles.is_enabled(), enabled);
        for style in Style::ALL {
            let expected = if enabled { style.escape() } else { "" };
            prop_assert_eq!(&styles[style], expected);
        }
    }

    #[test]
    fn toggling_restores_styles(toggles in prop::collection::vec(any::<bool>(), 0..8)) {
        let mut term = Terminal::with_options(Options::builder().interactive(true).build());
        for interactive in toggles {
            term.set_interactive(interactive);
            prop_assert_eq!(term.attrs_enabled(), interactive);
        }

        term.set_interactive(false);
        term.set_interactive(true);
        prop_assert_eq!(term.styles(), &StyleSet::on());
    }

    #[test]
    fn emphasis_ignores_disabled_sets(
        us in ".{0,8}",
        md in ".{0,8}",
        mb in ".{0,8}",
    ) {
        let lookup = |name: &str| match name {
            "LESS_TERMCAP_us" => Some(us.clone()),
            "LESS_TERMCAP_md" => Some(md.clone()),
            "LESS_TERMCAP_mb" => Some(mb.clone()),
            _ => None,
        };

        prop_assert_eq!(derive_styles(false).with_emphasis(lookup), StyleSet::off());
    }
}
