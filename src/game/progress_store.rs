use chrono::NaiveDate;
use log::{debug, warn};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::streak;
use crate::error::StoreError;
use crate::model::{ProgressState, PuzzleSource};

const PROGRESS_FILE: &str = "progress.json";

/// Owns the progress record and keeps `progress.json` in step with it.
///
/// Every change rewrites the whole record through a temporary file and a rename, so the
/// file on disk is always one complete record: either the one before the change or the
/// one after it.
#[derive(Debug)]
pub struct ProgressStore {
    path: PathBuf,
    state: ProgressState,
}

impl ProgressStore {
    /// Load the record from `data_dir`.
    ///
    /// A missing file starts from defaults. An unreadable or corrupt file is logged and
    /// also starts from defaults; it is replaced on the next save. Counts past their
    /// bounds are pulled back in.
    pub fn open(data_dir: &Path) -> Self {
        let path = data_dir.join(PROGRESS_FILE);
        let state = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<ProgressState>(&contents) {
                Ok(state) => state.normalized(),
                Err(error) => {
                    warn!(
                        target: "progress",
                        "Ignoring corrupt progress file {}: {}",
                        path.display(),
                        error
                    );
                    ProgressState::default()
                }
            },
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(target: "progress", "No progress file at {}, starting fresh", path.display());
                ProgressState::default()
            }
            Err(error) => {
                warn!(
                    target: "progress",
                    "Cannot read progress file {}: {}",
                    path.display(),
                    error
                );
                ProgressState::default()
            }
        };
        Self { path, state }
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Count a solve and persist.
    pub fn record_solve(
        &mut self,
        source: PuzzleSource,
        duration_ms: u64,
    ) -> Result<&ProgressState, StoreError> {
        let new_state = self.state.recorded_solve(source, duration_ms);
        self.commit(new_state)?;
        Ok(&self.state)
    }

    /// Session-start streak check. Returns whether the streak was reset.
    pub fn reconcile(&mut self, today: NaiveDate) -> Result<bool, StoreError> {
        match streak::reconcile(&self.state, today) {
            Some(new_state) => self.commit(new_state).map(|_| true),
            None => Ok(false),
        }
    }

    /// Credit today's play to the streak. Returns whether the streak changed.
    pub fn on_solve(&mut self, today: NaiveDate) -> Result<bool, StoreError> {
        match streak::on_solve(&self.state, today) {
            Some(new_state) => self.commit(new_state).map(|_| true),
            None => Ok(false),
        }
    }

    /// Count a solve and credit the streak in one write, so the saved record never has
    /// one without the other.
    pub fn record_solve_on(
        &mut self,
        source: PuzzleSource,
        duration_ms: u64,
        today: NaiveDate,
    ) -> Result<&ProgressState, StoreError> {
        let solved = self.state.recorded_solve(source, duration_ms);
        let new_state = streak::on_solve(&solved, today).unwrap_or(solved);
        self.commit(new_state)?;
        Ok(&self.state)
    }

    /// Adopt `new_state` and write it out. The in-memory record is kept even if the
    /// write fails; the next commit rewrites the whole record.
    fn commit(&mut self, new_state: ProgressState) -> Result<(), StoreError> {
        self.state = new_state;
        self.save()
    }

    pub fn save(&self) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(io_error)?;
        }
        let contents = serde_json::to_string_pretty(&self.state)?;

        let temp_path = self.path.with_extension("json.tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(io_error)?;
        temp_file
            .write_all(contents.as_bytes())
            .map_err(io_error)?;
        temp_file.sync_all().map_err(io_error)?;

        fs::rename(&temp_path, &self.path).map_err(io_error)?;
        debug!(target: "progress", "Saved progress to {}", self.path.display());
        Ok(())
    }
}
