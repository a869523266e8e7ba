//! Fixed puzzle pools, one per category.
//!
//! Pool order is part of the daily puzzle contract: the seeded generator indexes into
//! these slices, so reordering or inserting entries changes which puzzle a given date
//! produces. Append new entries at the end.

pub struct TextTemplate {
    pub prompt: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
}

pub struct PatternTemplate {
    pub grid: [&'static str; 9],
    pub answer: &'static str,
    pub hint: &'static str,
}

pub struct WordTemplate {
    pub scrambled: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
}

pub const LOGIC_PUZZLES: &[TextTemplate] = &[
    TextTemplate {
        prompt: "If 2 + 2 = 4, and 3 + 3 = 6, what is 4 + 4?",
        answer: "8",
        hint: "Follow the simple addition pattern",
    },
    TextTemplate {
        prompt: "What comes next in the sequence: 1, 4, 9, 16, ?",
        answer: "25",
        hint: "These are perfect squares: 1², 2², 3², 4²...",
    },
    TextTemplate {
        prompt: "If all roses are flowers, and all flowers are plants, are all roses plants?",
        answer: "yes",
        hint: "Think about logical relationships",
    },
    TextTemplate {
        prompt: "A farmer has 17 sheep. All but 9 die. How many sheep are left?",
        answer: "9",
        hint: "'All but 9' means 9 remain alive",
    },
];

pub const PATTERN_PROMPT: &str = "What symbol comes next in this pattern?";

pub const PATTERN_PUZZLES: &[PatternTemplate] = &[
    PatternTemplate {
        grid: ["🔴", "🔵", "🔴", "🔵", "🔴", "🔵", "🔴", "🔵", "?"],
        answer: "🔴",
        hint: "Look for the alternating color pattern",
    },
    PatternTemplate {
        grid: ["⭐", "⭐", "🌙", "⭐", "⭐", "🌙", "⭐", "⭐", "?"],
        answer: "🌙",
        hint: "Count the stars between moons",
    },
    PatternTemplate {
        grid: ["🔺", "🔺", "🔻", "🔺", "🔺", "🔻", "🔺", "🔺", "?"],
        answer: "🔻",
        hint: "Two up triangles, then one down triangle",
    },
];

/// Every pattern puzzle offers the same choices.
pub const PATTERN_OPTIONS: &[&str] = &["🔴", "🔵", "🟡", "🟢", "🟣", "🟠", "⭐", "🌙", "🔺", "🔻"];

pub const WORD_PUZZLES: &[WordTemplate] = &[
    WordTemplate {
        scrambled: "TPYHNO",
        answer: "PYTHON",
        hint: "A popular programming language (and also a snake!)",
    },
    WordTemplate {
        scrambled: "ZELZUP",
        answer: "PUZZLE",
        hint: "What you're solving right now!",
    },
    WordTemplate {
        scrambled: "RBINA",
        answer: "BRAIN",
        hint: "The organ you're using to solve this",
    },
    WordTemplate {
        scrambled: "RODW",
        answer: "WORD",
        hint: "What you need to unscramble",
    },
];

pub const MEMORY_PROMPT: &str = "Memorize this sequence, then input it in order:";
pub const MEMORY_HINT: &str = "Take your time to memorize before it disappears";
pub const MEMORY_SYMBOLS: [&str; 6] = ["🔴", "🔵", "🟡", "🟢", "🟣", "🟠"];
pub const MEMORY_MIN_LENGTH: usize = 4;
pub const MEMORY_MAX_LENGTH: usize = 6;
