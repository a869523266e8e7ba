use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::PackId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot serialize progress: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("the {0} pack is locked")]
    PackLocked(PackId),
}
