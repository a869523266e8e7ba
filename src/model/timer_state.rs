use std::time::{Duration, SystemTime};

/// Start and end instants of the active puzzle.
///
/// The solve duration is always derived from these two instants, never from the number
/// of display ticks that happened in between.
#[derive(Clone, Debug, PartialEq)]
pub struct TimerState {
    pub started_timestamp: SystemTime,
    pub ended_timestamp: Option<SystemTime>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::started_at(SystemTime::now())
    }
}

impl TimerState {
    pub fn started_at(now: SystemTime) -> Self {
        Self {
            started_timestamp: now,
            ended_timestamp: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.ended_timestamp.is_none()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed_at(SystemTime::now())
    }

    /// Time between the start and `now`, or the end if the timer has stopped. A clock
    /// that went backwards gives zero.
    pub fn elapsed_at(&self, now: SystemTime) -> Duration {
        let until_time = self.ended_timestamp.unwrap_or(now);
        until_time
            .duration_since(self.started_timestamp)
            .unwrap_or(Duration::default())
    }

    pub fn elapsed_ms(&self, now: SystemTime) -> u64 {
        u64::try_from(self.elapsed_at(now).as_millis()).unwrap_or(u64::MAX)
    }

    pub fn ended(&self, now: SystemTime) -> TimerState {
        let mut new_state = self.clone();
        if new_state.ended_timestamp.is_none() {
            new_state.ended_timestamp = Some(now);
        }
        new_state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_with_end() {
        let now = SystemTime::now();
        let timer = TimerState::started_at(now).ended(now + Duration::from_secs(10));

        assert!(!timer.is_running());
        assert_eq!(
            timer.elapsed_at(now + Duration::from_secs(60)),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn test_ending_twice_keeps_first_end() {
        let now = SystemTime::now();
        let timer = TimerState::started_at(now)
            .ended(now + Duration::from_millis(1_500))
            .ended(now + Duration::from_secs(9));

        assert_eq!(timer.elapsed_ms(now), 1_500);
    }

    #[test]
    fn test_elapsed_running() {
        let now = SystemTime::now();
        let timer = TimerState::started_at(now - Duration::from_secs(5));

        assert!(timer.is_running());
        assert!(timer.elapsed() >= Duration::from_secs(5));
    }

    #[test]
    fn test_clock_going_backwards() {
        let now = SystemTime::now();
        let timer = TimerState::started_at(now);

        assert_eq!(timer.elapsed_at(now - Duration::from_secs(3)), Duration::ZERO);
    }
}
