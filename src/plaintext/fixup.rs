// Corrections applied after wrapping.
//
// The wrapper only sees spaces, so a rendered link `text ( href )` can end up
// with a line break just inside either parenthesis. These passes glue the
// parenthesized target back together.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// `(` + space or newline + a single token + space or newline + `)`, plus any
/// spaces that follow.
static WRAPPED_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([ \n])([^()\s]+)([ \n])\)( *)")
        .expect("WRAPPED_LINK: hardcoded regex is valid")
});

/// Re-join link targets that wrapping split across lines.
///
/// A newline that sat just after `(` moves in front of it, so the target
/// starts its own line. A newline just before `)` moves after it.
pub(crate) fn fix_wrapped_links(text: &str) -> String {
    WRAPPED_LINK
        .replace_all(text, |caps: &Captures| {
            let mut glued = String::new();
            if &caps[1] == "\n" {
                glued.push('\n');
            }
            glued.push_str("( ");
            glued.push_str(&caps[2]);
            glued.push_str(" )");
            if &caps[3] == "\n" {
                glued.push('\n');
            } else {
                glued.push_str(&caps[4]);
            }
            glued
        })
        .into_owned()
}
