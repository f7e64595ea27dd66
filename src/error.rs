// error.rs - Error types for the REGEXP_* functions.
//
// Caller contract violations are reported with the offending value; pattern
// errors are the regex engine's own error, carried through unchanged.

use std::fmt;

/// Error type for the REGEXP_* operations.
///
/// A search that finds nothing is not an error. Each operation reports that
/// with its own sentinel (`false`, `0`, `None`).
#[derive(Debug, Clone, PartialEq)]
pub enum RegexpError {
    /// The start position was zero or negative.
    InvalidPosition(i64),
    /// The occurrence was zero or negative.
    InvalidOccurrence(i64),
    /// The return option was neither 0 nor 1.
    InvalidReturnOption(i64),
    /// The subexpression index was negative.
    InvalidSubexpression(i64),
    /// The pattern (or a passthrough flag) was rejected by the regex engine.
    Pattern(regex::Error),
}

impl fmt::Display for RegexpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegexpError::InvalidPosition(v) => {
                write!(f, "invalid value for parameter position: {}; position must be a number greater than 0", v)
            }
            RegexpError::InvalidOccurrence(v) => {
                write!(f, "invalid value for parameter occurrence: {}; occurrence must be a number greater than 0", v)
            }
            RegexpError::InvalidReturnOption(v) => {
                write!(f, "invalid value for parameter return_opt: {}; should be 0 or 1", v)
            }
            RegexpError::InvalidSubexpression(v) => {
                write!(f, "invalid value for parameter group: {}; must be a positive number", v)
            }
            RegexpError::Pattern(err) => write!(f, "invalid regular expression: {}", err),
        }
    }
}

impl std::error::Error for RegexpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegexpError::Pattern(err) => Some(err),
            _ => None,
        }
    }
}

impl From<regex::Error> for RegexpError {
    fn from(err: regex::Error) -> Self {
        RegexpError::Pattern(err)
    }
}

impl RegexpError {
    /// Returns `true` for caller contract violations (bad numeric arguments).
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, RegexpError::Pattern(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RegexpError>;
