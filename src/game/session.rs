use chrono::{DateTime, Local, NaiveDate};
use log::{error, info};
use std::time::{Duration, SystemTime};

use super::generator::{generate, generate_daily};
use super::progress_store::ProgressStore;
use super::random_source::RandomSource;
use super::ticker::{Ticker, TICK_INTERVAL};
use super::validator::validate;
use crate::error::SessionError;
use crate::events::EventEmitter;
use crate::model::{
    Achievement, PackId, ProgressState, Puzzle, PuzzleSource, SessionEvent, Submission,
    TimerState,
};

/// Result of checking an answer against the active puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Incorrect,
    Solved { duration_ms: u64 },
}

#[derive(Debug)]
struct ActivePuzzle {
    puzzle: Puzzle,
    source: PuzzleSource,
    timer_state: TimerState,
}

/// Everything the presentation layer needs to run a game.
///
/// The front end owns exactly one session and routes every user action through it.
/// Actions that need an active puzzle quietly do nothing when there is none.
pub struct PuzzleSession {
    store: ProgressStore,
    current: Option<ActivePuzzle>,
    ticker: Option<Ticker>,
    tick_interval: Duration,
    event_emitter: EventEmitter<SessionEvent>,
}

impl PuzzleSession {
    /// Open a session. This is the session-start streak check, so it runs once per
    /// launch with the current date.
    pub fn new(
        store: ProgressStore,
        event_emitter: EventEmitter<SessionEvent>,
        today: NaiveDate,
    ) -> Self {
        let mut session = Self {
            store,
            current: None,
            ticker: None,
            tick_interval: TICK_INTERVAL,
            event_emitter,
        };
        session.reconcile(today);
        session
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    fn reconcile(&mut self, today: NaiveDate) {
        let previous = self.store.state().current_streak;
        match self.store.reconcile(today) {
            Ok(true) => self
                .event_emitter
                .emit(&SessionEvent::StreakReset { previous }),
            Ok(false) => (),
            // The reset is kept in memory and written with the next save
            Err(err) => {
                error!(target: "session", "Failed to save streak reset: {}", err);
                self.event_emitter
                    .emit(&SessionEvent::StreakReset { previous });
            }
        }
    }

    /// Start a random puzzle from `pack`. Locked packs cannot be played.
    pub fn start_pack(
        &mut self,
        pack: PackId,
        random: &mut dyn RandomSource,
        now: DateTime<Local>,
    ) -> Result<&Puzzle, SessionError> {
        if !self.store.state().is_unlocked(pack) {
            return Err(SessionError::PackLocked(pack));
        }
        let puzzle = generate(None, random);
        Ok(self.begin(puzzle, PuzzleSource::Pack(pack), now))
    }

    pub fn start_daily(&mut self, now: DateTime<Local>) -> &Puzzle {
        let puzzle = generate_daily(now.date_naive());
        self.begin(puzzle, PuzzleSource::Daily, now)
    }

    /// Replace the active puzzle with a fresh random one from the same source. The
    /// skipped puzzle is not counted anywhere.
    pub fn skip(
        &mut self,
        random: &mut dyn RandomSource,
        now: DateTime<Local>,
    ) -> Option<&Puzzle> {
        let source = self.current.as_ref()?.source;
        self.stop_timer();
        self.event_emitter.emit(&SessionEvent::PuzzleSkipped);
        let puzzle = generate(None, random);
        Some(self.begin(puzzle, source, now))
    }

    fn begin(&mut self, puzzle: Puzzle, source: PuzzleSource, now: DateTime<Local>) -> &Puzzle {
        // Only one timer may tick at a time
        self.stop_timer();

        let started = SystemTime::from(now);
        self.ticker = Some(Ticker::start(started, self.tick_interval));
        info!(target: "session", "Starting {} from {}", puzzle.category, source);
        self.event_emitter.emit(&SessionEvent::PuzzleStarted {
            source,
            category: puzzle.category,
        });

        let active = self.current.insert(ActivePuzzle {
            puzzle,
            source,
            timer_state: TimerState::started_at(started),
        });
        &active.puzzle
    }

    /// Check an answer. Returns `None` when no puzzle is active.
    ///
    /// On success the solve duration is measured from the puzzle start to `now`, the
    /// statistics and streak are updated together in one save, and the puzzle is closed.
    /// A wrong answer leaves the puzzle open and the timer running.
    pub fn submit(
        &mut self,
        submission: Option<&Submission>,
        now: DateTime<Local>,
    ) -> Option<Outcome> {
        let active = self.current.as_ref()?;
        if !validate(&active.puzzle, submission) {
            self.event_emitter.emit(&SessionEvent::AnswerRejected);
            return Some(Outcome::Incorrect);
        }

        let submitted = SystemTime::from(now);
        let duration_ms = active.timer_state.ended(submitted).elapsed_ms(submitted);
        let source = active.source;
        self.stop_timer();
        self.current = None;

        if let Err(err) = self
            .store
            .record_solve_on(source, duration_ms, now.date_naive())
        {
            error!(target: "session", "Failed to save progress: {}", err);
        }
        let state = self.store.state();
        info!(
            target: "session",
            "Solved in {}ms, streak {}, total {}",
            duration_ms,
            state.current_streak,
            state.total_solved
        );
        self.event_emitter.emit(&SessionEvent::PuzzleSolved {
            duration_ms,
            current_streak: state.current_streak,
            total_solved: state.total_solved,
        });
        Some(Outcome::Solved { duration_ms })
    }

    pub fn hint(&self) -> Option<&str> {
        let active = self.current.as_ref()?;
        self.event_emitter.emit(&SessionEvent::HintShown);
        Some(active.puzzle.hint.as_str())
    }

    /// Leave the active puzzle without solving it.
    pub fn abandon(&mut self) {
        self.stop_timer();
        self.current = None;
    }

    fn stop_timer(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.current.as_ref().map(|active| &active.puzzle)
    }

    pub fn current_source(&self) -> Option<PuzzleSource> {
        self.current.as_ref().map(|active| active.source)
    }

    pub fn elapsed(&self, now: DateTime<Local>) -> Option<Duration> {
        self.current
            .as_ref()
            .map(|active| active.timer_state.elapsed_at(SystemTime::from(now)))
    }

    pub fn ticker(&self) -> Option<&Ticker> {
        self.ticker.as_ref()
    }

    pub fn progress(&self) -> &ProgressState {
        self.store.state()
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        Achievement::unlocked(self.store.state())
    }
}
