// engine.rs - Compilation onto the regex crate.
//
// The only place that knows how a FlagSet maps onto engine options. The
// regex crate already treats `^`/`$` as whole-subject anchors and keeps `.`
// off newlines, so BOUNDARY is informational and maps to no option.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::flags::{FlagBits, FlagSet};

/// Compile `pattern` with the engine options selected by `flags`.
///
/// Passthrough flag characters are prepended as an inline flag group, e.g.
/// `U` becomes `(?U)`. Characters the engine does not know make compilation
/// fail with the engine's own error.
pub fn compile(pattern: &str, flags: &FlagSet) -> Result<Regex> {
    let source = with_inline_flags(pattern, flags.passthrough());
    let regex = RegexBuilder::new(&source)
        .case_insensitive(flags.contains(FlagBits::CASE_INSENSITIVE))
        .dot_matches_new_line(flags.contains(FlagBits::DOT_MATCHES_NEWLINE))
        .multi_line(flags.contains(FlagBits::MULTI_LINE))
        .ignore_whitespace(flags.contains(FlagBits::EXTENDED))
        .build()?;
    Ok(regex)
}

fn with_inline_flags<'p>(pattern: &'p str, passthrough: &[char]) -> Cow<'p, str> {
    if passthrough.is_empty() {
        return Cow::Borrowed(pattern);
    }
    let mut source = String::with_capacity(pattern.len() + passthrough.len() + 3);
    source.push_str("(?");
    source.extend(passthrough.iter());
    source.push(')');
    source.push_str(pattern);
    Cow::Owned(source)
}
