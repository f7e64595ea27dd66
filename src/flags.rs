// flags.rs - Translation of Oracle match parameters into engine flags.
//
// Oracle's defaults differ from most POSIX/PCRE engines: `.` never matches a
// newline and `^`/`$` bind to the whole subject unless `m` is given. The
// translated FlagSet spells those defaults out so the engine seam does not
// have to know about the source dialect.

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Engine capabilities selected by a match parameter string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FlagBits: u8 {
        /// `i`: case-insensitive matching.
        const CASE_INSENSITIVE = 1 << 0;
        /// `n`: `.` matches `\n` (the engine's single-line mode).
        const DOT_MATCHES_NEWLINE = 1 << 1;
        /// `m`: `^`/`$` match at every line boundary.
        const MULTI_LINE = 1 << 2;
        /// `x`: whitespace in the pattern is ignored, `#` starts a comment.
        const EXTENDED = 1 << 3;
        /// Scan for every non-overlapping match instead of stopping at the first.
        const GLOBAL = 1 << 4;
        /// `^`/`$` bind to the whole subject regardless of embedded newlines.
        const BOUNDARY = 1 << 5;
    }
}

impl Default for FlagBits {
    fn default() -> Self {
        FlagBits::empty()
    }
}

/// A parsed match parameter.
///
/// Characters Oracle does not define are kept in `passthrough` and handed to
/// the engine as inline flags, so an engine that understands them can use
/// them and one that does not reports its own error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlagSet {
    bits: FlagBits,
    passthrough: SmallVec<[char; 4]>,
}

impl FlagSet {
    /// The recognised flags.
    pub fn bits(&self) -> FlagBits {
        self.bits
    }

    /// Check whether every flag in `other` is set.
    pub fn contains(&self, other: FlagBits) -> bool {
        self.bits.contains(other)
    }

    /// Whether the scan should continue past the first match.
    pub fn is_global(&self) -> bool {
        self.bits.contains(FlagBits::GLOBAL)
    }

    /// Unrecognised flag characters, de-duplicated, in input order.
    pub fn passthrough(&self) -> &[char] {
        &self.passthrough
    }
}

/// Translate an Oracle match parameter into a [`FlagSet`].
///
/// `None` and `Some("")` both mean "library defaults". For the conflicting
/// pair `i`/`c` the last one wins.
///
/// # Examples
///
/// ```
/// use oraregex::flags::{translate, FlagBits};
///
/// let set = translate(Some("in"), false);
/// assert!(set.contains(FlagBits::CASE_INSENSITIVE | FlagBits::DOT_MATCHES_NEWLINE));
/// assert!(set.contains(FlagBits::BOUNDARY));
///
/// let set = translate(Some("m"), true);
/// assert!(set.contains(FlagBits::MULTI_LINE | FlagBits::GLOBAL));
/// assert!(!set.contains(FlagBits::BOUNDARY));
/// ```
pub fn translate(flags: Option<&str>, global: bool) -> FlagSet {
    let mut bits = FlagBits::empty();
    let mut passthrough: SmallVec<[char; 4]> = SmallVec::new();

    for ch in flags.unwrap_or_default().chars() {
        match ch {
            'i' => bits.insert(FlagBits::CASE_INSENSITIVE),
            'c' => bits.remove(FlagBits::CASE_INSENSITIVE),
            'n' => bits.insert(FlagBits::DOT_MATCHES_NEWLINE),
            'm' => bits.insert(FlagBits::MULTI_LINE),
            'x' => bits.insert(FlagBits::EXTENDED),
            other => {
                if !passthrough.contains(&other) {
                    passthrough.push(other);
                }
            }
        }
    }

    if !bits.contains(FlagBits::MULTI_LINE) {
        bits.insert(FlagBits::BOUNDARY);
    }
    bits.set(FlagBits::GLOBAL, global);

    FlagSet { bits, passthrough }
}
