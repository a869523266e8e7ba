mod catalog;
pub mod generator;
pub mod progress_store;
pub mod random_source;
pub mod session;
pub mod settings;
pub mod streak;
pub mod ticker;
pub mod validator;

pub use generator::{generate, generate_daily};
pub use progress_store::ProgressStore;
pub use random_source::{RandomSource, SeededRandom, SystemRandom};
pub use session::{Outcome, PuzzleSession};
pub use settings::Settings;
pub use validator::validate;
