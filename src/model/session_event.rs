use super::{Category, PuzzleSource};

/// Notifications sent from the puzzle session to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    StreakReset {
        previous: u32,
    },
    PuzzleStarted {
        source: PuzzleSource,
        category: Category,
    },
    AnswerRejected,
    PuzzleSolved {
        duration_ms: u64,
        current_streak: u32,
        total_solved: u32,
    },
    PuzzleSkipped,
    HintShown,
}
