use log::trace;

use crate::model::{Answer, Puzzle, Submission, Symbol};

/// Separator accepted when a memory sequence arrives as a single line of text.
const SEQUENCE_SEPARATOR: char = ',';

/// Check a submission against the puzzle's canonical answer.
///
/// A missing, empty, or wrongly shaped submission is simply incorrect. This never
/// panics.
pub fn validate(puzzle: &Puzzle, submission: Option<&Submission>) -> bool {
    let Some(submission) = submission else {
        return false;
    };
    if submission.is_empty() {
        return false;
    }

    let correct = match (&puzzle.answer, submission) {
        (Answer::FreeText(expected), Submission::Text(text)) => {
            normalize_text(expected) == normalize_text(text)
        }
        (Answer::SingleChoice(expected), Submission::Choice(choice)) => choice == expected,
        // Text-only front ends type the symbol in
        (Answer::SingleChoice(expected), Submission::Text(text)) => text.trim() == expected.as_str(),
        (Answer::OrderedSequence(expected), Submission::Sequence(symbols)) => {
            sequences_match(expected, symbols)
        }
        (Answer::OrderedSequence(expected), Submission::Text(text)) => {
            sequences_match(expected, &split_sequence(text))
        }
        _ => false,
    };
    trace!(
        target: "validator",
        "{:?} submission for {:?} puzzle: {}",
        submission,
        puzzle.kind(),
        if correct { "correct" } else { "incorrect" }
    );
    correct
}

fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

fn sequences_match(expected: &[Symbol], submitted: &[Symbol]) -> bool {
    expected.len() == submitted.len()
        && expected
            .iter()
            .zip(submitted)
            .all(|(expected, submitted)| expected == submitted)
}

fn split_sequence(text: &str) -> Vec<Symbol> {
    text.split(SEQUENCE_SEPARATOR)
        .map(str::trim)
        .filter(|glyph| !glyph.is_empty())
        .map(Symbol::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn symbols(glyphs: &[&str]) -> Vec<Symbol> {
        glyphs.iter().map(|&glyph| Symbol::from(glyph)).collect()
    }

    fn yes_puzzle() -> Puzzle {
        Puzzle::free_text(Category::Logic, "Are all roses plants?", "yes", "Think")
    }

    fn memory_puzzle() -> Puzzle {
        Puzzle::ordered_sequence("Memorize", symbols(&["A", "B", "C"]), "Take your time")
    }

    fn pattern_puzzle() -> Puzzle {
        Puzzle::single_choice("Next?", &["⭐", "?"], "🌙", "Moons", &["⭐", "🌙"])
    }

    #[test]
    fn test_free_text_ignores_case_and_whitespace() {
        let puzzle = yes_puzzle();
        let plain = validate(&puzzle, Some(&Submission::from("yes")));

        assert!(plain);
        assert_eq!(validate(&puzzle, Some(&Submission::from(" Yes "))), plain);
        assert!(validate(&puzzle, Some(&Submission::from("YES\n"))));
        assert!(!validate(&puzzle, Some(&Submission::from("no"))));
        assert!(!validate(&puzzle, Some(&Submission::from("y es"))));
    }

    #[test]
    fn test_free_text_canonical_answer_is_normalized_too() {
        let puzzle = Puzzle::free_text(Category::Word, "Unscramble", "PYTHON", "Snake");
        assert!(validate(&puzzle, Some(&Submission::from("python"))));
    }

    #[test]
    fn test_single_choice_is_exact() {
        let puzzle = pattern_puzzle();

        assert!(validate(&puzzle, Some(&Submission::Choice(Symbol::from("🌙")))));
        assert!(validate(&puzzle, Some(&Submission::from(" 🌙 "))));
        assert!(!validate(&puzzle, Some(&Submission::Choice(Symbol::from(" 🌙 ")))));
        assert!(!validate(&puzzle, Some(&Submission::Choice(Symbol::from("⭐")))));

        let puzzle = Puzzle::single_choice("Next?", &["a", "?"], "a", "Case", &["a", "A"]);
        assert!(!validate(&puzzle, Some(&Submission::Choice(Symbol::from("A")))));
    }

    #[test]
    fn test_sequence_order_and_length() {
        let puzzle = memory_puzzle();

        assert!(validate(&puzzle, Some(&Submission::from(symbols(&["A", "B", "C"])))));
        assert!(!validate(&puzzle, Some(&Submission::from(symbols(&["A", "C", "B"])))));
        assert!(!validate(&puzzle, Some(&Submission::from(symbols(&["A", "B"])))));
        assert!(!validate(
            &puzzle,
            Some(&Submission::from(symbols(&["A", "B", "C", "C"])))
        ));
    }

    #[test]
    fn test_sequence_as_text() {
        let puzzle = memory_puzzle();

        assert!(validate(&puzzle, Some(&Submission::from("A, B,C"))));
        assert!(!validate(&puzzle, Some(&Submission::from("A,B"))));
        assert!(!validate(&puzzle, Some(&Submission::from("a,b,c"))));
    }

    #[test]
    fn test_missing_or_empty_submission() {
        for puzzle in [yes_puzzle(), memory_puzzle(), pattern_puzzle()] {
            assert!(!validate(&puzzle, None));
            assert!(!validate(&puzzle, Some(&Submission::from("   "))));
            assert!(!validate(&puzzle, Some(&Submission::Sequence(vec![]))));
            assert!(!validate(&puzzle, Some(&Submission::Choice(Symbol::from("")))));
        }
    }

    #[test]
    fn test_wrong_shape_is_incorrect() {
        assert!(!validate(
            &yes_puzzle(),
            Some(&Submission::Sequence(symbols(&["yes"])))
        ));
        assert!(!validate(
            &memory_puzzle(),
            Some(&Submission::Choice(Symbol::from("A")))
        ));
    }
}
