use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{Category, Symbol};

/// How a puzzle is answered, which decides both the shape of a valid submission and the
/// comparison the validator applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleKind {
    FreeText,
    SingleChoice,
    OrderedSequence,
}

/// The canonical answer, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    FreeText(String),
    SingleChoice(Symbol),
    OrderedSequence(Vec<Symbol>),
}

impl Answer {
    pub fn kind(&self) -> PuzzleKind {
        match self {
            Answer::FreeText(_) => PuzzleKind::FreeText,
            Answer::SingleChoice(_) => PuzzleKind::SingleChoice,
            Answer::OrderedSequence(_) => PuzzleKind::OrderedSequence,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Answer::FreeText(text) => text.trim().is_empty(),
            Answer::SingleChoice(symbol) => symbol.as_str().is_empty(),
            Answer::OrderedSequence(symbols) => symbols.is_empty(),
        }
    }
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub category: Category,
    pub prompt: String,
    pub answer: Answer,
    pub hint: String,
    /// Grid or sequence shown to the player. For pattern puzzles it contains the
    /// placeholder cell; it is never used for validation.
    pub display_sequence: Vec<Symbol>,
    /// Symbols the player picks from.
    pub options: Vec<Symbol>,
}

impl Puzzle {
    pub fn free_text(category: Category, prompt: &str, answer: &str, hint: &str) -> Self {
        Self {
            category,
            prompt: prompt.to_string(),
            answer: Answer::FreeText(answer.to_string()),
            hint: hint.to_string(),
            display_sequence: vec![],
            options: vec![],
        }
    }

    pub fn single_choice(
        prompt: &str,
        grid: &[&str],
        answer: &str,
        hint: &str,
        options: &[&str],
    ) -> Self {
        Self {
            category: Category::Pattern,
            prompt: prompt.to_string(),
            answer: Answer::SingleChoice(Symbol::from(answer)),
            hint: hint.to_string(),
            display_sequence: grid.iter().map(|&glyph| Symbol::from(glyph)).collect(),
            options: options.iter().map(|&glyph| Symbol::from(glyph)).collect(),
        }
    }

    /// The player is shown `sequence` and must reproduce it. The offered options are the
    /// distinct symbols of the sequence, in order of first appearance.
    pub fn ordered_sequence(prompt: &str, sequence: Vec<Symbol>, hint: &str) -> Self {
        let options = sequence.iter().unique().cloned().collect();
        Self {
            category: Category::Memory,
            prompt: prompt.to_string(),
            answer: Answer::OrderedSequence(sequence.clone()),
            hint: hint.to_string(),
            display_sequence: sequence,
            options,
        }
    }

    pub fn kind(&self) -> PuzzleKind {
        self.answer.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_options_are_unique_in_first_seen_order() {
        let sequence: Vec<Symbol> = ["🔴", "🔵", "🔴", "🟢", "🔵"]
            .iter()
            .map(|&glyph| Symbol::from(glyph))
            .collect();
        let puzzle = Puzzle::ordered_sequence("Memorize", sequence.clone(), "Take your time");

        assert_eq!(puzzle.kind(), PuzzleKind::OrderedSequence);
        assert_eq!(puzzle.display_sequence, sequence);
        assert_eq!(
            puzzle.options,
            vec![Symbol::from("🔴"), Symbol::from("🔵"), Symbol::from("🟢")]
        );
    }

    #[test]
    fn test_empty_answers() {
        assert!(Answer::FreeText("  ".to_string()).is_empty());
        assert!(Answer::OrderedSequence(vec![]).is_empty());
        assert!(!Answer::SingleChoice(Symbol::from("🌙")).is_empty());
    }
}
