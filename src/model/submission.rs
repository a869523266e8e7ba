use super::Symbol;

/// Raw input relayed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Text(String),
    Choice(Symbol),
    Sequence(Vec<Symbol>),
}

impl Submission {
    pub fn is_empty(&self) -> bool {
        match self {
            Submission::Text(text) => text.trim().is_empty(),
            Submission::Choice(symbol) => symbol.as_str().trim().is_empty(),
            Submission::Sequence(symbols) => symbols.is_empty(),
        }
    }
}

impl From<&str> for Submission {
    fn from(text: &str) -> Self {
        Submission::Text(text.to_string())
    }
}

impl From<Vec<Symbol>> for Submission {
    fn from(symbols: Vec<Symbol>) -> Self {
        Submission::Sequence(symbols)
    }
}
