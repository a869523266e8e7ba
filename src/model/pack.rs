use serde::{Deserialize, Serialize};
use std::fmt;

/// Starter packs gate the intermediate pack, which gates the expert pack.
pub const INTERMEDIATE_UNLOCK_AT: u32 = 5;
pub const EXPERT_UNLOCK_AT: u32 = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PackId {
    Starter,
    Intermediate,
    Expert,
}

impl PackId {
    pub fn all() -> Vec<PackId> {
        vec![PackId::Starter, PackId::Intermediate, PackId::Expert]
    }

    /// Number of puzzles in the pack; completion counts never exceed it.
    pub fn size(&self) -> u32 {
        match self {
            PackId::Starter => 10,
            PackId::Intermediate => 15,
            PackId::Expert => 20,
        }
    }

    pub fn from_name(name: &str) -> Option<PackId> {
        match name.trim().to_lowercase().as_str() {
            "starter" => Some(PackId::Starter),
            "intermediate" => Some(PackId::Intermediate),
            "expert" => Some(PackId::Expert),
            _ => None,
        }
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackId::Starter => "starter",
            PackId::Intermediate => "intermediate",
            PackId::Expert => "expert",
        };
        write!(f, "{}", name)
    }
}

/// Where the active puzzle came from. The daily puzzle is not part of any pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleSource {
    Daily,
    Pack(PackId),
}

impl fmt::Display for PuzzleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleSource::Daily => write!(f, "daily"),
            PuzzleSource::Pack(pack) => write!(f, "{}", pack),
        }
    }
}
