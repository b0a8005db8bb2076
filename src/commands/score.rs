//! Word scoring command
//!
//! Breaks a word down into its letter values.

use crate::core::LetterScores;
use crate::error::SolveResult;

/// Result of scoring a word
pub struct ScoreBreakdown {
    pub word: String,
    pub letters: Vec<(char, u32)>,
    pub total: u32,
}

/// Score a word letter by letter
///
/// Letters are lowercased; `_` counts as a blank worth zero.
///
/// # Errors
///
/// Returns an error if the word contains a character with no letter value.
pub fn score_breakdown(word: &str, scores: &LetterScores) -> SolveResult<ScoreBreakdown> {
    let word = word.trim().to_lowercase();
    let letters = word
        .chars()
        .map(|c| scores.value(c).map(|value| (c, value)))
        .collect::<Result<Vec<_>, _>>()?;
    let total = letters.iter().map(|&(_, value)| value).sum();

    Ok(ScoreBreakdown {
        word,
        letters,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScoreError;
    use crate::error::SolveError;

    #[test]
    fn breakdown_lists_each_letter() {
        let result = score_breakdown("Quiz", &LetterScores::STANDARD).unwrap();
        assert_eq!(result.word, "quiz");
        assert_eq!(
            result.letters,
            vec![('q', 10), ('u', 1), ('i', 1), ('z', 10)]
        );
        assert_eq!(result.total, 22);
    }

    #[test]
    fn breakdown_total_matches_score_word() {
        let scores = LetterScores::STANDARD;
        for word in ["cat", "jukebox", "a"] {
            let result = score_breakdown(word, &scores).unwrap();
            assert_eq!(Ok(result.total), scores.score_word(word));
        }
    }

    #[test]
    fn breakdown_blank_is_zero() {
        let result = score_breakdown("c_t", &LetterScores::STANDARD).unwrap();
        assert_eq!(result.letters[1], ('_', 0));
        assert_eq!(result.total, 4);
    }

    #[test]
    fn breakdown_unknown_letter() {
        let result = score_breakdown("ca$h", &LetterScores::STANDARD);
        assert!(matches!(
            result,
            Err(SolveError::Score(ScoreError::UnknownLetter('$')))
        ));
    }
}
