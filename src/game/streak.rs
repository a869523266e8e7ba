//! Daily streak rules.
//!
//! The streak is evaluated at two points. At session start, [`reconcile`] can only reset
//! it, and only when at least one whole calendar day was missed. After a solve,
//! [`on_solve`] can only extend it by exactly one, and only once per calendar day. A gap
//! always costs the whole streak; there is no partial credit for missed days.
//!
//! Both functions return the new state when something changed, which tells the caller
//! that the record must be persisted.

use chrono::NaiveDate;
use log::{debug, info};

use crate::model::ProgressState;

pub fn reconcile(state: &ProgressState, today: NaiveDate) -> Option<ProgressState> {
    let last_play_date = state.last_play_date?;
    let yesterday = today.pred_opt();

    // A date after today means the clock moved back; treat it as played today.
    if last_play_date >= today || Some(last_play_date) == yesterday {
        return None;
    }
    if state.current_streak == 0 {
        return None;
    }

    info!(
        target: "streak",
        "Missed a day since {}, resetting streak of {}",
        last_play_date,
        state.current_streak
    );
    let mut new_state = state.clone();
    new_state.current_streak = 0;
    Some(new_state)
}

pub fn on_solve(state: &ProgressState, today: NaiveDate) -> Option<ProgressState> {
    if state.last_play_date == Some(today) {
        return None;
    }

    let mut new_state = state.clone();
    new_state.current_streak = new_state.current_streak.saturating_add(1);
    new_state.last_play_date = Some(today);
    new_state.best_streak = new_state.best_streak.max(new_state.current_streak);
    debug!(
        target: "streak",
        "Streak is now {} (best {})",
        new_state.current_streak,
        new_state.best_streak
    );
    Some(new_state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn played(last_day: u32, streak: u32) -> ProgressState {
        ProgressState {
            current_streak: streak,
            best_streak: streak,
            last_play_date: Some(date(last_day)),
            ..Default::default()
        }
    }

    #[test]
    fn test_scenario_with_missed_day() {
        let state = ProgressState::default();
        assert_eq!(reconcile(&state, date(1)), None);

        let state = on_solve(&state, date(1)).unwrap();
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.best_streak, 1);
        assert_eq!(state.last_play_date, Some(date(1)));

        let state = reconcile(&state, date(3)).unwrap();
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.best_streak, 1);

        let state = on_solve(&state, date(3)).unwrap();
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.last_play_date, Some(date(3)));
    }

    #[test]
    fn test_on_solve_saturates_streak() {
        let state = on_solve(&played(4, u32::MAX), date(5)).unwrap();
        assert_eq!(state.current_streak, u32::MAX);
        assert_eq!(state.best_streak, u32::MAX);
    }

    #[test]
    fn test_reconcile_keeps_today_and_yesterday() {
        assert_eq!(reconcile(&played(5, 3), date(5)), None);
        assert_eq!(reconcile(&played(4, 3), date(5)), None);
    }

    #[test]
    fn test_reconcile_future_date_is_untouched() {
        assert_eq!(reconcile(&played(9, 3), date(5)), None);
    }

    #[test]
    fn test_reconcile_across_month_boundary() {
        let state = ProgressState {
            current_streak: 2,
            best_streak: 2,
            last_play_date: NaiveDate::from_ymd_opt(2023, 12, 31),
            ..Default::default()
        };
        assert_eq!(reconcile(&state, date(1)), None);
        assert_eq!(reconcile(&state, date(2)).unwrap().current_streak, 0);
    }

    #[test]
    fn test_same_day_solves_count_once() {
        let state = on_solve(&played(4, 2), date(5)).unwrap();
        assert_eq!(state.current_streak, 3);
        assert_eq!(on_solve(&state, date(5)), None);
    }

    #[test]
    fn test_gap_extends_by_one_only() {
        // Without a reconcile in between, a long gap still only adds one day.
        let state = on_solve(&played(1, 4), date(20)).unwrap();
        assert_eq!(state.current_streak, 5);
        assert_eq!(state.best_streak, 5);
    }

    #[test]
    fn test_best_streak_is_kept_after_reset() {
        let state = ProgressState {
            current_streak: 2,
            best_streak: 6,
            last_play_date: Some(date(1)),
            ..Default::default()
        };
        let state = reconcile(&state, date(10)).unwrap();
        let state = on_solve(&state, date(10)).unwrap();
        assert_eq!(state.current_streak, 1);
        assert_eq!(state.best_streak, 6);
    }
}
