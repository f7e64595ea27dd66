// prelude.rs - Convenient re-exports for the REGEXP_* functions.
//
//! # Prelude
//!
//! ```
//! use oraregex::prelude::*;
//!
//! let pos = find_position("a1b22", r"\d+", &InstrOptions::new().occurrence(2)).unwrap();
//! assert_eq!(pos, 4);
//! ```

pub use crate::api::{
    count, extract_substring, find_position, is_match, replace, CountOptions, InstrOptions,
    LikeOptions, ReplaceOptions, SubstrOptions,
};
pub use crate::error::RegexpError;
pub use crate::flags::{FlagBits, FlagSet};
pub use crate::locate::MatchSpan;
