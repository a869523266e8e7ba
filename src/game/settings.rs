use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";
const APP_DIR: &str = "micropuzzle";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_true")]
    pub sound_enabled: bool,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: 1,
            sound_enabled: true,
        }
    }
}

impl Settings {
    /// Load the settings stored in `data_dir`, falling back to (and saving) the defaults
    /// when the file is missing or unreadable.
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        if let Ok(contents) = fs::read_to_string(&path) {
            if let Ok(mut settings) = serde_json::from_str::<Settings>(&contents) {
                settings.migrate();
                return settings;
            }
        }
        debug!(target: "settings", "Using default settings");
        let default = Settings::default();
        let _ = default.save(data_dir);
        default
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), std::io::Error> {
        fs::create_dir_all(data_dir)?;
        let contents = serde_json::to_string(self)?;
        fs::write(data_dir.join(SETTINGS_FILE), contents)
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_enabled = !self.sound_enabled;
        self.sound_enabled
    }

    /// Directory holding the progress and settings files.
    ///
    /// `MICROPUZZLE_DATA_DIR` overrides the platform data directory.
    pub fn data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("MICROPUZZLE_DATA_DIR") {
            if !dir.trim().is_empty() {
                return PathBuf::from(dir);
            }
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(".").join(format!(".{}", APP_DIR)))
    }

    pub fn is_debug_mode() -> bool {
        std::env::var("DEBUG").map(|v| v == "1").unwrap_or(false)
    }

    /// Fixed seed for ad-hoc puzzles, from the `SEED` variable. Unparsable values are
    /// ignored.
    pub fn seed_from_env() -> Option<u64> {
        std::env::var("SEED").ok()?.trim().parse::<u64>().ok()
    }
}
