use chrono::NaiveDate;
use log::{debug, trace};

use super::catalog::{
    LOGIC_PUZZLES, MEMORY_HINT, MEMORY_MAX_LENGTH, MEMORY_MIN_LENGTH, MEMORY_PROMPT,
    MEMORY_SYMBOLS, PATTERN_OPTIONS, PATTERN_PROMPT, PATTERN_PUZZLES, WORD_PUZZLES,
};
use super::random_source::{RandomSource, SeededRandom};
use crate::model::{Category, Puzzle, Symbol};

/// Draw a puzzle. Without a category, one is picked uniformly from all four.
pub fn generate(category: Option<Category>, random: &mut dyn RandomSource) -> Puzzle {
    let category = match category {
        Some(category) => category,
        None => pick_category(&Category::all(), random),
    };
    generate_for_category(category, random)
}

/// The puzzle of the day. The same date always gives the same category and instance.
pub fn generate_daily(date: NaiveDate) -> Puzzle {
    let mut random = SeededRandom::for_date(date);
    let category = pick_category(&Category::daily(), &mut random);
    debug!(target: "generator", "Daily puzzle for {}: {}", date, category);
    generate_for_category(category, &mut random)
}

fn pick_category(categories: &[Category], random: &mut dyn RandomSource) -> Category {
    categories[random.pick_index(categories.len())]
}

pub fn generate_for_category(category: Category, random: &mut dyn RandomSource) -> Puzzle {
    let puzzle = match category {
        Category::Logic => {
            let template = &LOGIC_PUZZLES[random.pick_index(LOGIC_PUZZLES.len())];
            Puzzle::free_text(
                Category::Logic,
                template.prompt,
                template.answer,
                template.hint,
            )
        }
        Category::Pattern => {
            let template = &PATTERN_PUZZLES[random.pick_index(PATTERN_PUZZLES.len())];
            Puzzle::single_choice(
                PATTERN_PROMPT,
                &template.grid,
                template.answer,
                template.hint,
                PATTERN_OPTIONS,
            )
        }
        Category::Word => {
            let template = &WORD_PUZZLES[random.pick_index(WORD_PUZZLES.len())];
            Puzzle::free_text(
                Category::Word,
                &format!("Unscramble this word: {}", template.scrambled),
                &template.answer.to_lowercase(),
                template.hint,
            )
        }
        Category::Memory => generate_memory(random),
    };
    trace!(target: "generator", "Generated puzzle: {:?}", puzzle);
    puzzle
}

fn generate_memory(random: &mut dyn RandomSource) -> Puzzle {
    let span = MEMORY_MAX_LENGTH - MEMORY_MIN_LENGTH + 1;
    let length = MEMORY_MIN_LENGTH + random.pick_index(span);
    let sequence: Vec<Symbol> = (0..length)
        .map(|_| Symbol::from(MEMORY_SYMBOLS[random.pick_index(MEMORY_SYMBOLS.len())]))
        .collect();
    Puzzle::ordered_sequence(MEMORY_PROMPT, sequence, MEMORY_HINT)
}
