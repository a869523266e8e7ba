mod achievement;
mod category;
mod pack;
mod progress;
mod puzzle;
mod session_event;
mod submission;
mod symbol;
mod timer_state;

pub use achievement::{Achievement, SPEED_DEMON_MS};
pub use category::Category;
pub use pack::{PackId, PuzzleSource, EXPERT_UNLOCK_AT, INTERMEDIATE_UNLOCK_AT};
pub use progress::{PackProgress, ProgressState};
pub use puzzle::{Answer, Puzzle, PuzzleKind};
pub use session_event::SessionEvent;
pub use submission::Submission;
pub use symbol::{Symbol, PLACEHOLDER};
pub use timer_state::TimerState;
