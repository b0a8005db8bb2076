//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file or from the embedded list.

use crate::solver::Dictionary;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load a dictionary from a file with one word per line
///
/// Each line is trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scrabbler::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("sowpods.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary: Dictionary = content.lines().collect();

    debug!(path = %path.display(), words = dictionary.len(), "loaded word list");
    Ok(dictionary)
}

/// Build a dictionary from an embedded string slice
///
/// # Examples
/// ```
/// use scrabbler::wordlists::loader::dictionary_from_slice;
/// use scrabbler::wordlists::BUILTIN;
///
/// let dictionary = dictionary_from_slice(BUILTIN);
/// assert_eq!(dictionary.len(), BUILTIN.len());
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_from_file_normalizes_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Cat").unwrap();
        writeln!(file, "  act  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "AT\r").unwrap();

        let dictionary = load_from_file(file.path()).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("act"));
        assert!(dictionary.contains("at"));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn dictionary_from_slice_dedups() {
        let dictionary = dictionary_from_slice(&["cat", "CAT", "dog"]);
        assert_eq!(dictionary.len(), 2);
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(dictionary_from_slice(input).is_empty());
    }
}
