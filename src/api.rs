// api.rs - REGEXP_LIKE, REGEXP_COUNT, REGEXP_INSTR, REGEXP_SUBSTR and
// REGEXP_REPLACE with Oracle argument semantics.
//
// Each function takes an options struct whose defaults match the shortest
// Oracle call form. Numeric arguments are validated before the pattern is
// compiled; a search that finds nothing is reported with a sentinel value.

use std::borrow::Cow;

use log::debug;

use crate::engine;
use crate::error::{RegexpError, Result};
use crate::flags::{translate, FlagBits};
use crate::locate::{locate, Occurrences};
use crate::offset;
use crate::pattern::{has_capture_group, wrap};

// === Options ===

/// Options for [`is_match`] (`REGEXP_LIKE(subject, pattern[, flags])`).
#[derive(Debug, Clone, Default)]
pub struct LikeOptions<'a> {
    flags: Option<&'a str>,
}

impl<'a> LikeOptions<'a> {
    /// Defaults: no match parameter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Oracle match parameter (`i`, `c`, `n`, `m`, `x`).
    pub fn flags(mut self, flags: &'a str) -> Self {
        self.flags = Some(flags);
        self
    }
}

/// Options for [`count`] (`REGEXP_COUNT(subject, pattern[, position[, flags]])`).
#[derive(Debug, Clone)]
pub struct CountOptions<'a> {
    position: i64,
    flags: Option<&'a str>,
}

impl Default for CountOptions<'_> {
    fn default() -> Self {
        CountOptions {
            position: 1,
            flags: None,
        }
    }
}

impl<'a> CountOptions<'a> {
    /// Defaults: position 1, no match parameter.
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based character position where the search starts.
    pub fn position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Set the Oracle match parameter.
    pub fn flags(mut self, flags: &'a str) -> Self {
        self.flags = Some(flags);
        self
    }
}

/// Options for [`find_position`]
/// (`REGEXP_INSTR(subject, pattern[, position[, occurrence[, return_opt[, flags[, subexpr]]]]])`).
#[derive(Debug, Clone)]
pub struct InstrOptions<'a> {
    position: i64,
    occurrence: i64,
    return_option: i64,
    flags: Option<&'a str>,
    subexpression: i64,
}

impl Default for InstrOptions<'_> {
    fn default() -> Self {
        InstrOptions {
            position: 1,
            occurrence: 1,
            return_option: 0,
            flags: None,
            subexpression: 0,
        }
    }
}

impl<'a> InstrOptions<'a> {
    /// Defaults: position 1, occurrence 1, return option 0, subexpression 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based character position where the search starts.
    pub fn position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Which match to report, counting from 1.
    pub fn occurrence(mut self, occurrence: i64) -> Self {
        self.occurrence = occurrence;
        self
    }

    /// 0 reports the first matched character, 1 the character after the match.
    pub fn return_option(mut self, return_option: i64) -> Self {
        self.return_option = return_option;
        self
    }

    /// Set the Oracle match parameter.
    pub fn flags(mut self, flags: &'a str) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Capture group to report; 0 is the whole match.
    pub fn subexpression(mut self, subexpression: i64) -> Self {
        self.subexpression = subexpression;
        self
    }
}

/// Options for [`extract_substring`]
/// (`REGEXP_SUBSTR(subject, pattern[, position[, occurrence[, flags[, subexpr]]]])`).
#[derive(Debug, Clone)]
pub struct SubstrOptions<'a> {
    position: i64,
    occurrence: i64,
    flags: Option<&'a str>,
    subexpression: i64,
}

impl Default for SubstrOptions<'_> {
    fn default() -> Self {
        SubstrOptions {
            position: 1,
            occurrence: 1,
            flags: None,
            subexpression: 0,
        }
    }
}

impl<'a> SubstrOptions<'a> {
    /// Defaults: position 1, occurrence 1, subexpression 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based character position where the search starts.
    pub fn position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Which match to extract, counting from 1.
    pub fn occurrence(mut self, occurrence: i64) -> Self {
        self.occurrence = occurrence;
        self
    }

    /// Set the Oracle match parameter.
    pub fn flags(mut self, flags: &'a str) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Capture group to extract; 0 is the whole match.
    pub fn subexpression(mut self, subexpression: i64) -> Self {
        self.subexpression = subexpression;
        self
    }
}

/// Options for [`replace`]
/// (`REGEXP_REPLACE(subject, pattern[, replacement[, position[, occurrence[, flags]]]])`).
#[derive(Debug, Clone)]
pub struct ReplaceOptions<'a> {
    position: i64,
    occurrence: i64,
    flags: Option<&'a str>,
}

impl Default for ReplaceOptions<'_> {
    fn default() -> Self {
        ReplaceOptions {
            position: 1,
            occurrence: 0,
            flags: None,
        }
    }
}

impl<'a> ReplaceOptions<'a> {
    /// Defaults: position 1, every occurrence.
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based character position where the search starts.
    pub fn position(mut self, position: i64) -> Self {
        self.position = position;
        self
    }

    /// Which match to replace, counting from 1; 0 replaces every match.
    pub fn occurrence(mut self, occurrence: i64) -> Self {
        self.occurrence = occurrence;
        self
    }

    /// Set the Oracle match parameter.
    pub fn flags(mut self, flags: &'a str) -> Self {
        self.flags = Some(flags);
        self
    }
}

// === Validation ===

fn check_position(position: i64) -> Result<usize> {
    if position < 1 {
        return Err(RegexpError::InvalidPosition(position));
    }
    Ok(usize::try_from(position).unwrap_or(usize::MAX))
}

fn check_occurrence(occurrence: i64) -> Result<usize> {
    if occurrence < 1 {
        return Err(RegexpError::InvalidOccurrence(occurrence));
    }
    Ok(usize::try_from(occurrence).unwrap_or(usize::MAX))
}

/// Returns `true` when the end of the match was requested.
fn check_return_option(return_option: i64) -> Result<bool> {
    match return_option {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RegexpError::InvalidReturnOption(other)),
    }
}

fn check_subexpression(subexpression: i64) -> Result<()> {
    if subexpression < 0 {
        return Err(RegexpError::InvalidSubexpression(subexpression));
    }
    Ok(())
}

// === Operations ===

/// `REGEXP_LIKE`: does `pattern` match anywhere in `subject`?
///
/// # Examples
///
/// ```
/// use oraregex::api::{is_match, LikeOptions};
///
/// assert!(is_match("hello world", "wor.d", &LikeOptions::new()).unwrap());
/// assert!(is_match("Hello", "^h", &LikeOptions::new().flags("i")).unwrap());
/// ```
pub fn is_match(subject: &str, pattern: &str, options: &LikeOptions<'_>) -> Result<bool> {
    let flags = translate(options.flags, false);
    debug!("is_match: pattern={:?} flags={:?}", pattern, flags);

    let regex = engine::compile(pattern, &flags)?;
    Ok(Occurrences::new(&regex, subject, 0, flags.is_global())
        .next()
        .is_some())
}

/// `REGEXP_COUNT`: number of non-overlapping matches at or after `position`.
///
/// # Examples
///
/// ```
/// use oraregex::api::{count, CountOptions};
///
/// assert_eq!(count("ababab", "ab", &CountOptions::new()).unwrap(), 3);
/// assert_eq!(count("ababab", "ab", &CountOptions::new().position(2)).unwrap(), 2);
/// ```
pub fn count(subject: &str, pattern: &str, options: &CountOptions<'_>) -> Result<usize> {
    let position = check_position(options.position)?;
    let flags = translate(options.flags, true);
    debug!(
        "count: pattern={:?} position={} flags={:?}",
        pattern, position, flags
    );

    let regex = engine::compile(pattern, &flags)?;
    let Some(start) = offset::byte_index(subject, position) else {
        return Ok(0);
    };
    Ok(Occurrences::new(&regex, subject, start, flags.is_global()).count())
}

/// `REGEXP_INSTR`: 1-based position of the selected occurrence and group.
///
/// Returns the first matched character for return option 0 and the character
/// after the match for return option 1, or 0 if there is no such match.
///
/// # Examples
///
/// ```
/// use oraregex::api::{find_position, InstrOptions};
///
/// let opts = InstrOptions::new().occurrence(2);
/// assert_eq!(find_position("ababab", "ab", &opts).unwrap(), 3);
/// assert_eq!(find_position("ababab", "ab", &opts.return_option(1)).unwrap(), 5);
/// ```
pub fn find_position(subject: &str, pattern: &str, options: &InstrOptions<'_>) -> Result<usize> {
    let position = check_position(options.position)?;
    let occurrence = check_occurrence(options.occurrence)?;
    let want_end = check_return_option(options.return_option)?;
    check_subexpression(options.subexpression)?;

    let flags = translate(options.flags, true);
    let wrapped = wrap(
        pattern,
        options.subexpression,
        flags.contains(FlagBits::EXTENDED),
    )?;
    debug!(
        "find_position: pattern={:?} group={} position={} occurrence={} flags={:?}",
        wrapped.pattern(),
        wrapped.group(),
        position,
        occurrence,
        flags
    );

    let regex = engine::compile(wrapped.pattern(), &flags)?;
    let found = locate(&regex, subject, wrapped.group(), position, occurrence);
    Ok(match found {
        Some(hit) if want_end => hit.span().end(),
        Some(hit) => hit.span().start(),
        None => 0,
    })
}

/// `REGEXP_SUBSTR`: text of the selected occurrence and group, borrowed from
/// `subject`, or `None` if there is no such match.
///
/// Asking for subexpression 1 of a pattern without any parenthesis returns
/// `None` without compiling the pattern.
///
/// # Examples
///
/// ```
/// use oraregex::api::{extract_substring, SubstrOptions};
///
/// let opts = SubstrOptions::new().subexpression(2);
/// let got = extract_substring("2024-01-02", r"(\d+)-(\d+)-(\d+)", &opts).unwrap();
/// assert_eq!(got, Some("01"));
/// ```
pub fn extract_substring<'s>(
    subject: &'s str,
    pattern: &str,
    options: &SubstrOptions<'_>,
) -> Result<Option<&'s str>> {
    let position = check_position(options.position)?;
    let occurrence = check_occurrence(options.occurrence)?;
    check_subexpression(options.subexpression)?;

    if options.subexpression == 1 && !has_capture_group(pattern) {
        debug!("extract_substring: pattern {:?} has no groups", pattern);
        return Ok(None);
    }

    let flags = translate(options.flags, true);
    let wrapped = wrap(
        pattern,
        options.subexpression,
        flags.contains(FlagBits::EXTENDED),
    )?;
    debug!(
        "extract_substring: pattern={:?} group={} position={} occurrence={} flags={:?}",
        wrapped.pattern(),
        wrapped.group(),
        position,
        occurrence,
        flags
    );

    let regex = engine::compile(wrapped.pattern(), &flags)?;
    Ok(locate(&regex, subject, wrapped.group(), position, occurrence).map(|hit| hit.as_str()))
}

/// `REGEXP_REPLACE`: replace one or every match at or after `position`.
///
/// In `replacement`, `\1` through `\9` insert capture groups and `\\` inserts
/// a backslash; everything else is literal. When nothing is replaced the
/// subject is returned borrowed.
///
/// # Examples
///
/// ```
/// use oraregex::api::{replace, ReplaceOptions};
///
/// let out = replace("2024-01-02", r"(\d+)-(\d+)-(\d+)", r"\3.\2.\1", &ReplaceOptions::new()).unwrap();
/// assert_eq!(out, "02.01.2024");
///
/// let out = replace("a.b.c", r"\.", "-", &ReplaceOptions::new().occurrence(2)).unwrap();
/// assert_eq!(out, "a.b-c");
/// ```
pub fn replace<'s>(
    subject: &'s str,
    pattern: &str,
    replacement: &str,
    options: &ReplaceOptions<'_>,
) -> Result<Cow<'s, str>> {
    let position = check_position(options.position)?;
    if options.occurrence < 0 {
        return Err(RegexpError::InvalidOccurrence(options.occurrence));
    }
    let occurrence = usize::try_from(options.occurrence).unwrap_or(usize::MAX);

    let flags = translate(options.flags, true);
    debug!(
        "replace: pattern={:?} position={} occurrence={} flags={:?}",
        pattern, position, occurrence, flags
    );

    let regex = engine::compile(pattern, &flags)?;
    let Some(start) = offset::byte_index(subject, position) else {
        return Ok(Cow::Borrowed(subject));
    };

    let template = engine_template(replacement);
    let mut out = String::new();
    let mut last = 0;
    let mut replaced = false;

    for (n, occ) in Occurrences::new(&regex, subject, start, flags.is_global()).enumerate() {
        if occurrence != 0 && n + 1 < occurrence {
            continue;
        }
        let Some(caps) = occ.captures(&regex, subject) else {
            break;
        };
        let range = occ.range();
        out.push_str(&subject[last..range.start]);
        caps.expand(&template, &mut out);
        last = range.end;
        replaced = true;
        if occurrence != 0 {
            break;
        }
    }

    if !replaced {
        return Ok(Cow::Borrowed(subject));
    }
    out.push_str(&subject[last..]);
    Ok(Cow::Owned(out))
}

/// Rewrite an Oracle replacement string into the engine's `$` syntax.
fn engine_template(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '$' => out.push_str("$$"),
            '\\' => match chars.peek().copied() {
                Some(d @ '1'..='9') => {
                    chars.next();
                    out.push_str("${");
                    out.push(d);
                    out.push('}');
                }
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                _ => out.push('\\'),
            },
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_bad_arguments() {
        assert_eq!(check_position(0), Err(RegexpError::InvalidPosition(0)));
        assert_eq!(check_occurrence(-1), Err(RegexpError::InvalidOccurrence(-1)));
        assert_eq!(check_return_option(2), Err(RegexpError::InvalidReturnOption(2)));
        assert_eq!(check_subexpression(-4), Err(RegexpError::InvalidSubexpression(-4)));
        assert_eq!(check_position(7), Ok(7));
        assert_eq!(check_return_option(1), Ok(true));
    }

    #[test]
    fn validation_happens_before_compilation() {
        let err = find_position("abc", "(", &InstrOptions::new().position(0)).unwrap_err();
        assert_eq!(err, RegexpError::InvalidPosition(0));
        let err = extract_substring("abc", "(", &SubstrOptions::new().subexpression(-1)).unwrap_err();
        assert_eq!(err, RegexpError::InvalidSubexpression(-1));
    }

    #[test]
    fn template_translation() {
        assert_eq!(engine_template(r"\1-\2"), "${1}-${2}");
        assert_eq!(engine_template("$5"), "$$5");
        assert_eq!(engine_template(r"a\\1"), r"a\1");
        assert_eq!(engine_template(r"\x\"), r"\x\");
        assert_eq!(engine_template(r"\0"), r"\0");
    }

    #[test]
    fn substring_early_exit_skips_compilation() {
        let got = extract_substring("abc", "[", &SubstrOptions::new().subexpression(1)).unwrap();
        assert_eq!(got, None);
    }

    #[test]
    fn count_past_end_is_zero() {
        assert_eq!(count("abc", "x*", &CountOptions::new().position(10)).unwrap(), 0);
    }

    #[test]
    fn replace_without_match_borrows() {
        let out = replace("abc", "x", "y", &ReplaceOptions::new()).unwrap();
        assert!(matches!(out, Cow::Borrowed("abc")));
    }

    #[test]
    fn replace_keeps_text_before_position() {
        let out = replace("aaaa", "a", "b", &ReplaceOptions::new().position(3)).unwrap();
        assert_eq!(out, "aabb");
    }
}
