use super::ProgressState;

/// Solving faster than this earns [`Achievement::SpeedDemon`].
pub const SPEED_DEMON_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    FirstSteps,
    GettingHot,
    OnFire,
    SpeedDemon,
    PuzzleMaster,
    Perfectionist,
}

impl Achievement {
    pub fn all() -> Vec<Achievement> {
        vec![
            Achievement::FirstSteps,
            Achievement::GettingHot,
            Achievement::OnFire,
            Achievement::SpeedDemon,
            Achievement::PuzzleMaster,
            Achievement::Perfectionist,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstSteps => "First Steps",
            Achievement::GettingHot => "Getting Hot",
            Achievement::OnFire => "On Fire!",
            Achievement::SpeedDemon => "Speed Demon",
            Achievement::PuzzleMaster => "Puzzle Master",
            Achievement::Perfectionist => "Perfectionist",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Achievement::FirstSteps => "Solve your first puzzle",
            Achievement::GettingHot => "Maintain a 3-day streak",
            Achievement::OnFire => "Maintain a 7-day streak",
            Achievement::SpeedDemon => "Solve a puzzle in under 30 seconds",
            Achievement::PuzzleMaster => "Solve 50 puzzles",
            Achievement::Perfectionist => "Solve 10 puzzles without hints",
        }
    }

    /// Achievements are never stored; they are recomputed from progress on every read.
    pub fn is_unlocked(&self, state: &ProgressState) -> bool {
        match self {
            Achievement::FirstSteps => state.total_solved >= 1,
            Achievement::GettingHot => state.best_streak >= 3,
            Achievement::OnFire => state.best_streak >= 7,
            Achievement::SpeedDemon => state
                .fastest_solve_ms
                .is_some_and(|fastest| fastest < SPEED_DEMON_MS),
            Achievement::PuzzleMaster => state.total_solved >= 50,
            // Hint usage is not recorded, so there is nothing to check against.
            Achievement::Perfectionist => false,
        }
    }

    pub fn unlocked(state: &ProgressState) -> Vec<Achievement> {
        Self::all()
            .into_iter()
            .filter(|achievement| achievement.is_unlocked(state))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_has_no_achievements() {
        assert!(Achievement::unlocked(&ProgressState::default()).is_empty());
    }

    #[test]
    fn test_thresholds() {
        let state = ProgressState {
            total_solved: 50,
            best_streak: 3,
            fastest_solve_ms: Some(29_999),
            ..Default::default()
        };
        assert_eq!(
            Achievement::unlocked(&state),
            vec![
                Achievement::FirstSteps,
                Achievement::GettingHot,
                Achievement::SpeedDemon,
                Achievement::PuzzleMaster,
            ]
        );

        let state = ProgressState {
            best_streak: 7,
            fastest_solve_ms: Some(SPEED_DEMON_MS),
            ..Default::default()
        };
        assert!(Achievement::OnFire.is_unlocked(&state));
        assert!(!Achievement::SpeedDemon.is_unlocked(&state));
    }

    #[test]
    fn test_perfectionist_is_never_unlocked() {
        let state = ProgressState {
            total_solved: 1_000,
            best_streak: 100,
            fastest_solve_ms: Some(1),
            ..Default::default()
        };
        assert!(!Achievement::Perfectionist.is_unlocked(&state));
    }
}
