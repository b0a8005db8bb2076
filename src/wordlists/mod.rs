//! Word lists for rack solving
//!
//! Provides a small embedded dictionary plus loading of word list files.

mod embedded;
pub mod loader;

pub use embedded::{BUILTIN, BUILTIN_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_count_matches_const() {
        assert_eq!(BUILTIN.len(), BUILTIN_COUNT);
    }

    #[test]
    fn builtin_words_are_normalized() {
        for &word in BUILTIN {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn builtin_has_common_words() {
        for word in ["cat", "act", "at", "ta", "quiz", "zax"] {
            assert!(BUILTIN.contains(&word), "Expected '{word}' in built-in list");
        }
    }
}
