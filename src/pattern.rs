// pattern.rs - Subexpression selection.
//
// Oracle numbers subexpressions from 1 and uses 0 for "the whole match". The
// pattern is wrapped in one synthetic capturing group for 0 so the rest of
// the pipeline always selects a real group. In extended mode the closing
// parenthesis goes on its own line so a trailing `#` comment cannot swallow it.

use std::borrow::Cow;

use crate::error::{RegexpError, Result};

/// A pattern ready for compilation plus the group to select from each match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped<'p> {
    pattern: Cow<'p, str>,
    group: usize,
}

impl<'p> Wrapped<'p> {
    /// The pattern to hand to the engine.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The effective capture group index (always >= 1).
    pub fn group(&self) -> usize {
        self.group
    }

    /// Whether a synthetic group was added around the caller's pattern.
    pub fn is_synthetic(&self) -> bool {
        matches!(self.pattern, Cow::Owned(_))
    }
}

/// Decide the effective pattern and group for a requested subexpression.
///
/// A requested group of 0 wraps the pattern and selects group 1. Any positive
/// group leaves the pattern untouched; whether the pattern actually has that
/// many groups is only discovered when matching and surfaces as "not found".
///
/// Pass `extended` when the pattern will be compiled with the `x` flag.
///
/// # Errors
///
/// [`RegexpError::InvalidSubexpression`] if `group` is negative.
///
/// # Examples
///
/// ```
/// use oraregex::pattern::wrap;
///
/// let w = wrap(r"\d+", 0, false).unwrap();
/// assert_eq!(w.pattern(), r"(\d+)");
/// assert_eq!(w.group(), 1);
///
/// let w = wrap("a # comment", 0, true).unwrap();
/// assert_eq!(w.pattern(), "(a # comment\n)");
///
/// let w = wrap(r"(\d+)-(\d+)", 2, false).unwrap();
/// assert_eq!(w.pattern(), r"(\d+)-(\d+)");
/// assert_eq!(w.group(), 2);
/// ```
pub fn wrap(pattern: &str, group: i64, extended: bool) -> Result<Wrapped<'_>> {
    match group {
        g if g < 0 => Err(RegexpError::InvalidSubexpression(g)),
        0 => {
            let mut wrapped = String::with_capacity(pattern.len() + 3);
            wrapped.push('(');
            wrapped.push_str(pattern);
            if extended {
                wrapped.push('\n');
            }
            wrapped.push(')');
            Ok(Wrapped {
                pattern: Cow::Owned(wrapped),
                group: 1,
            })
        }
        g => Ok(Wrapped {
            pattern: Cow::Borrowed(pattern),
            group: usize::try_from(g).map_err(|_| RegexpError::InvalidSubexpression(g))?,
        }),
    }
}

/// Cheap check for an opening parenthesis anywhere in the pattern.
///
/// A `false` answer proves the pattern has no capturing group. A `true`
/// answer may still be an escaped or non-capturing parenthesis.
pub fn has_capture_group(pattern: &str) -> bool {
    memchr::memchr(b'(', pattern.as_bytes()).is_some()
}
