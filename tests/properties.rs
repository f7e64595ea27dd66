// properties.rs - Cross-operation invariants over a fixed corpus.

use oraregex::prelude::*;

const SUBJECTS: &[&str] = &[
    "",
    "ababab",
    "aaaa",
    "hello world\nsecond line",
    "2024-01-02, 1999-12-31",
    "naïve café, crème brûlée",
    "a1b22c333",
];

const PATTERNS: &[&str] = &[
    "ab", "a+", r"\d+", r"\w+", "x*", "^", "$", ".", "é", r"(\d+)-(\d+)", "zzz",
];

fn instr(subject: &str, pattern: &str, occurrence: i64, return_option: i64) -> usize {
    let opts = InstrOptions::new()
        .occurrence(occurrence)
        .return_option(return_option);
    find_position(subject, pattern, &opts).unwrap()
}

fn substr<'s>(subject: &'s str, pattern: &str, occurrence: i64) -> Option<&'s str> {
    let opts = SubstrOptions::new().occurrence(occurrence);
    extract_substring(subject, pattern, &opts).unwrap()
}

#[test]
fn no_match_sentinels() {
    for subject in SUBJECTS {
        assert!(!is_match(subject, "zzz", &LikeOptions::new()).unwrap());
        assert_eq!(count(subject, "zzz", &CountOptions::new()).unwrap(), 0);
        assert_eq!(instr(subject, "zzz", 1, 0), 0);
        assert_eq!(substr(subject, "zzz", 1), None);
    }
}

#[test]
fn end_minus_start_is_substring_length() {
    for subject in SUBJECTS {
        for pattern in PATTERNS {
            for occurrence in 1..=4 {
                let start = instr(subject, pattern, occurrence, 0);
                let end = instr(subject, pattern, occurrence, 1);
                match substr(subject, pattern, occurrence) {
                    Some(text) => {
                        assert!(start >= 1, "{:?} in {:?}", pattern, subject);
                        assert_eq!(end - start, text.chars().count(), "{:?} in {:?}", pattern, subject);
                    }
                    None => assert_eq!((start, end), (0, 0), "{:?} in {:?}", pattern, subject),
                }
            }
        }
    }
}

#[test]
fn occurrences_are_strictly_increasing() {
    for subject in SUBJECTS {
        for pattern in PATTERNS {
            let mut previous = 0;
            for occurrence in 1..=16 {
                let pos = instr(subject, pattern, occurrence, 0);
                if pos == 0 {
                    break;
                }
                assert!(pos > previous, "{:?} in {:?} at occurrence {}", pattern, subject, occurrence);
                previous = pos;
            }
        }
    }
}

#[test]
fn count_agrees_with_instr() {
    for subject in SUBJECTS {
        for pattern in PATTERNS {
            let total = count(subject, pattern, &CountOptions::new()).unwrap();
            let last = i64::try_from(total).unwrap();
            if total > 0 {
                assert_ne!(instr(subject, pattern, last, 0), 0, "{:?} in {:?}", pattern, subject);
            }
            assert_eq!(instr(subject, pattern, last + 1, 0), 0, "{:?} in {:?}", pattern, subject);
        }
    }
}

#[test]
fn like_agrees_with_count() {
    for subject in SUBJECTS {
        for pattern in PATTERNS {
            let matched = is_match(subject, pattern, &LikeOptions::new()).unwrap();
            let total = count(subject, pattern, &CountOptions::new()).unwrap();
            assert_eq!(matched, total > 0, "{:?} in {:?}", pattern, subject);
        }
    }
}

#[test]
fn invalid_arguments_regardless_of_input() {
    for subject in SUBJECTS {
        for pattern in PATTERNS {
            for bad in [0, -1, i64::MIN] {
                let err = count(subject, pattern, &CountOptions::new().position(bad)).unwrap_err();
                assert!(err.is_invalid_argument());
                let err = find_position(subject, pattern, &InstrOptions::new().occurrence(bad)).unwrap_err();
                assert!(err.is_invalid_argument());
                let err = extract_substring(subject, pattern, &SubstrOptions::new().position(bad)).unwrap_err();
                assert!(err.is_invalid_argument());
            }
            for bad in [-1, 2, 7] {
                let err = find_position(subject, pattern, &InstrOptions::new().return_option(bad)).unwrap_err();
                assert_eq!(err, RegexpError::InvalidReturnOption(bad));
            }
            let err = find_position(subject, pattern, &InstrOptions::new().subexpression(-1)).unwrap_err();
            assert_eq!(err, RegexpError::InvalidSubexpression(-1));
        }
    }
}
