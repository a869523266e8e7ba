use chrono::NaiveDate;
use log::trace;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

use super::pack::{EXPERT_UNLOCK_AT, INTERMEDIATE_UNLOCK_AT};
use super::{PackId, PuzzleSource};

/// Completed puzzle count per pack.
#[serde_as]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackProgress {
    #[serde_as(as = "DefaultOnNull")]
    pub starter: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub intermediate: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub expert: u32,
}

impl PackProgress {
    pub fn get(&self, pack: PackId) -> u32 {
        match pack {
            PackId::Starter => self.starter,
            PackId::Intermediate => self.intermediate,
            PackId::Expert => self.expert,
        }
    }

    fn get_mut(&mut self, pack: PackId) -> &mut u32 {
        match pack {
            PackId::Starter => &mut self.starter,
            PackId::Intermediate => &mut self.intermediate,
            PackId::Expert => &mut self.expert,
        }
    }

    /// Count one completion, never going past the pack size.
    pub fn increment(&mut self, pack: PackId) {
        let count = self.get_mut(pack);
        *count = count.saturating_add(1).min(pack.size());
    }
}

/// The single persisted progress record.
///
/// Every field falls back to its default when missing or null so that files written by
/// older versions keep loading.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressState {
    #[serde(rename = "streak")]
    #[serde_as(as = "DefaultOnNull")]
    pub current_streak: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub best_streak: u32,
    #[serde_as(as = "DefaultOnNull")]
    pub total_solved: u32,
    #[serde(rename = "fastestTime")]
    pub fastest_solve_ms: Option<u64>,
    #[serde(rename = "averageTime")]
    pub average_solve_ms: Option<f64>,
    #[serde(with = "play_date")]
    pub last_play_date: Option<NaiveDate>,
    #[serde_as(as = "DefaultOnNull")]
    pub pack_progress: PackProgress,
    #[serde(rename = "solveTimes")]
    #[serde_as(as = "DefaultOnNull")]
    pub solve_durations: Vec<u64>,
}

impl ProgressState {
    /// Bring a loaded record back within bounds: pack counts at most the pack size and
    /// the best streak at least the current one.
    pub fn normalized(&self) -> ProgressState {
        let mut new_state = self.clone();
        for pack in PackId::all() {
            let count = new_state.pack_progress.get_mut(pack);
            *count = (*count).min(pack.size());
        }
        new_state.best_streak = new_state.best_streak.max(new_state.current_streak);
        new_state
    }

    /// Return the state after one more successful solve.
    ///
    /// The average is recomputed from the whole duration history rather than updated
    /// incrementally, so it is always the exact mean of `solve_durations`.
    pub fn recorded_solve(&self, source: PuzzleSource, duration_ms: u64) -> ProgressState {
        let duration_ms = duration_ms.max(1);
        let mut new_state = self.clone();

        new_state.total_solved = new_state.total_solved.saturating_add(1);
        new_state.solve_durations.push(duration_ms);
        new_state.fastest_solve_ms = Some(
            new_state
                .fastest_solve_ms
                .map_or(duration_ms, |fastest| fastest.min(duration_ms)),
        );
        let total: u64 = new_state.solve_durations.iter().sum();
        new_state.average_solve_ms = Some(total as f64 / new_state.solve_durations.len() as f64);

        if let PuzzleSource::Pack(pack) = source {
            new_state.pack_progress.increment(pack);
        }
        trace!(
            target: "progress",
            "Recorded solve from {} in {}ms (total {})",
            source,
            duration_ms,
            new_state.total_solved
        );
        new_state
    }

    pub fn is_unlocked(&self, pack: PackId) -> bool {
        match pack {
            PackId::Starter => true,
            PackId::Intermediate => self.pack_progress.starter >= INTERMEDIATE_UNLOCK_AT,
            PackId::Expert => self.pack_progress.intermediate >= EXPERT_UNLOCK_AT,
        }
    }

    pub fn unlocked_packs(&self) -> Vec<PackId> {
        PackId::all()
            .into_iter()
            .filter(|pack| self.is_unlocked(*pack))
            .collect()
    }
}

/// Dates are stored as `YYYY-MM-DD`. Older saves used the browser's `toDateString`
/// format; those are still understood, and anything else loads as no date.
mod play_date {
    use chrono::NaiveDate;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer, Serializer};

    const ISO_FORMAT: &str = "%Y-%m-%d";
    const LEGACY_FORMAT: &str = "%a %b %d %Y";

    pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => serializer.serialize_str(&date.format(ISO_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    #[allow(dead_code)]
    enum RawDate {
        Text(String),
        Other(IgnoredAny),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawDate>::deserialize(deserializer)? {
            Some(RawDate::Text(raw)) => Ok(parse(&raw)),
            Some(RawDate::Other(_)) | None => Ok(None),
        }
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, ISO_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(raw, LEGACY_FORMAT))
            .ok()
    }
}
