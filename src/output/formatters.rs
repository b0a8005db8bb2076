//! Formatting utilities for terminal output

use crate::solver::ScoredWord;

/// Format a result line as `<score> <word>`
#[must_use]
pub fn format_entry(entry: &ScoredWord) -> String {
    entry.to_string()
}

/// Render a word as spaced uppercase tiles, e.g. `[C][A][T]`
#[must_use]
pub fn tile_row(word: &str) -> String {
    word.chars()
        .map(|c| format!("[{}]", c.to_ascii_uppercase()))
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_format() {
        assert_eq!(format_entry(&ScoredWord::new("cat", 5)), "5 cat");
    }

    #[test]
    fn tile_row_uppercases() {
        assert_eq!(tile_row("cat"), "[C][A][T]");
        assert_eq!(tile_row("c_t"), "[C][_][T]");
        assert_eq!(tile_row(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
