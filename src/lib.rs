//! # Oraregex
//!
//! Oracle's `REGEXP_LIKE`, `REGEXP_COUNT`, `REGEXP_INSTR`, `REGEXP_SUBSTR` and
//! `REGEXP_REPLACE` on top of the [`regex`](https://crates.io/crates/regex)
//! crate.
//!
//! Positions are 1-based character offsets, occurrences count from 1,
//! subexpression 0 is the whole match, and the match parameter uses Oracle's
//! letters: `i` / `c` for case, `n` for `.` across newlines, `m` for per-line
//! anchors and `x` for extended syntax. Without `m`, `^` and `$` bind to the
//! whole subject.
//!
//! ## Quick Start
//!
//! ```rust
//! use oraregex::prelude::*;
//!
//! assert!(is_match("hello world", "wor.d", &LikeOptions::new()).unwrap());
//! assert_eq!(count("ababab", "ab", &CountOptions::new()).unwrap(), 3);
//!
//! let second = InstrOptions::new().occurrence(2);
//! assert_eq!(find_position("ababab", "ab", &second).unwrap(), 3);
//!
//! let month = SubstrOptions::new().subexpression(2);
//! assert_eq!(
//!     extract_substring("2024-01-02", r"(\d+)-(\d+)-(\d+)", &month).unwrap(),
//!     Some("01"),
//! );
//! ```
//!
//! A search that finds nothing is not an error: it yields `false`, `0` or
//! `None`. Errors are reserved for invalid arguments and patterns the engine
//! rejects:
//!
//! ```rust
//! use oraregex::prelude::*;
//!
//! let err = count("abc", "b", &CountOptions::new().position(0)).unwrap_err();
//! assert!(err.is_invalid_argument());
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`api`] | The REGEXP_* operations and their options |
//! | [`flags`] | Match parameter translation |
//! | [`pattern`] | Subexpression wrapping |
//! | [`locate`] | Nth-occurrence scanning |
//! | [`engine`] | Compilation onto the regex crate |
//! | [`offset`] | 1-based character positions |
//! | [`error`] | Error type |

pub mod api;
pub mod engine;
pub mod error;
pub mod flags;
pub mod locate;
pub mod offset;
pub mod pattern;
pub mod prelude;
