// locate.rs - Nth-occurrence scanning.
//
// The engine only answers "first match at or after this offset". Occurrences
// are found by repeated searches over one buffer, moving a cursor past each
// whole match. The buffer is the subject from the start position onwards, so
// `^` binds there, while later searches see the text before the cursor and
// anchors and word boundaries behave as in a single left-to-right scan.

use std::ops::Range;

use log::trace;
use regex::{Captures, Regex};

use crate::offset;

/// One matched span in 1-based character coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    start: usize,
    len: usize,
}

impl MatchSpan {
    /// Create a span starting at the 1-based character `start`.
    pub fn new(start: usize, len: usize) -> Self {
        debug_assert!(start >= 1);
        MatchSpan { start, len }
    }

    /// 1-based character position of the first matched character.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Position one past the last matched character.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns `true` for a zero-length match.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A whole-pattern match found by [`Occurrences`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    base: usize,
    at: usize,
    range: Range<usize>,
}

impl Occurrence {
    /// Absolute byte index where the search that found this match began.
    pub fn search_start(&self) -> usize {
        self.at
    }

    /// Absolute byte range of the whole match.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// Re-run `regex` with capture groups for this occurrence.
    ///
    /// The search is repeated exactly as the scan made it, so the engine
    /// reports the same match. Group offsets in the result are relative to
    /// the scanned buffer; use [`Occurrence::group_range`] for absolute ones.
    pub fn captures<'s>(&self, regex: &Regex, subject: &'s str) -> Option<Captures<'s>> {
        regex.captures_at(&subject[self.base..], self.at - self.base)
    }

    /// Absolute byte range of capture group `group`, if it took part.
    pub fn group_range(&self, regex: &Regex, subject: &str, group: usize) -> Option<Range<usize>> {
        let caps = self.captures(regex, subject)?;
        let m = caps.get(group)?;
        Some(self.base + m.start()..self.base + m.end())
    }
}

/// Iterator over successive whole-pattern matches, left to right.
///
/// After a zero-length match the cursor moves one character forward; a
/// zero-length match at the end of the subject ends the scan. Without
/// `global`, at most one occurrence is produced.
pub struct Occurrences<'r, 's> {
    regex: &'r Regex,
    subject: &'s str,
    base: usize,
    cursor: usize,
    global: bool,
    done: bool,
    seen: usize,
}

impl<'r, 's> Occurrences<'r, 's> {
    /// Start scanning `subject` at byte index `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not on a character boundary.
    pub fn new(regex: &'r Regex, subject: &'s str, start: usize, global: bool) -> Self {
        assert!(subject.is_char_boundary(start), "scan must start on a char boundary");
        Occurrences {
            regex,
            subject,
            base: start,
            cursor: start,
            global,
            done: false,
            seen: 0,
        }
    }
}

impl Iterator for Occurrences<'_, '_> {
    type Item = Occurrence;

    fn next(&mut self) -> Option<Occurrence> {
        if self.done {
            return None;
        }

        let at = self.cursor;
        let haystack = &self.subject[self.base..];
        let Some(m) = self.regex.find_at(haystack, at - self.base) else {
            self.done = true;
            return None;
        };

        let start = self.base + m.start();
        let end = self.base + m.end();
        self.seen += 1;
        trace!(
            "occurrence {} at bytes {}..{} (searched from {})",
            self.seen,
            start,
            end,
            at
        );

        if !self.global {
            self.done = true;
        } else if start == end {
            let width = offset::char_width_at(self.subject, end);
            if width == 0 {
                self.done = true;
            } else {
                self.cursor = end + width;
            }
        } else {
            self.cursor = end;
        }

        Some(Occurrence {
            base: self.base,
            at,
            range: start..end,
        })
    }
}

/// The selected group of a located occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located<'s> {
    span: MatchSpan,
    text: &'s str,
}

impl<'s> Located<'s> {
    /// Character coordinates of the group.
    pub fn span(&self) -> MatchSpan {
        self.span
    }

    /// The group's text, borrowed from the subject.
    pub fn as_str(&self) -> &'s str {
        self.text
    }
}

/// Find group `group` of the `occurrence`-th match at or after the 1-based
/// character `position`.
///
/// `regex` must already be in its final form (see [`crate::pattern::wrap`]):
/// the scan advances over whole matches (engine group 0) and `group` is only
/// consulted for the target occurrence. Returns `None` when there are fewer
/// occurrences, when the pattern has no such group, or when the group did
/// not take part in the match.
pub fn locate<'s>(
    regex: &Regex,
    subject: &'s str,
    group: usize,
    position: usize,
    occurrence: usize,
) -> Option<Located<'s>> {
    debug_assert!(position >= 1 && occurrence >= 1);

    if group >= regex.captures_len() {
        trace!("group {} out of range for {} groups", group, regex.captures_len() - 1);
        return None;
    }

    let start = offset::byte_index(subject, position)?;
    let target = Occurrences::new(regex, subject, start, true).nth(occurrence - 1)?;
    let range = target.group_range(regex, subject, group)?;

    let span = MatchSpan::new(
        offset::char_position(subject, range.start),
        offset::char_len(&subject[range.clone()]),
    );
    Some(Located {
        span,
        text: &subject[range],
    })
}
