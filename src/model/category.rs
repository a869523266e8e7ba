use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Logic,
    Pattern,
    Word,
    Memory,
}

impl Category {
    pub fn all() -> Vec<Category> {
        vec![
            Category::Logic,
            Category::Pattern,
            Category::Word,
            Category::Memory,
        ]
    }

    /// Categories eligible for the daily puzzle. Memory is left out because its
    /// answer is generated rather than drawn from a pool.
    pub fn daily() -> Vec<Category> {
        vec![Category::Logic, Category::Pattern, Category::Word]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Logic => "Logic Puzzle",
            Category::Pattern => "Pattern Puzzle",
            Category::Word => "Word Puzzle",
            Category::Memory => "Memory Puzzle",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
