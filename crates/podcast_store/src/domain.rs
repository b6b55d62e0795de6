use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// A generated podcast audio file and the bytes read back from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub filename: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl AudioArtifact {
    pub const FILENAME_PREFIX: &'static str = "podcast_";
    pub const FILENAME_EXTENSION: &'static str = "wav";
    /// The speech service returns MP3 data; only the file name says `.wav`.
    pub const MIME_TYPE: &'static str = "audio/mpeg";

    /// `podcast_<id>.wav`
    pub fn filename_for(id: &uuid::Uuid) -> String {
        format!(
            "{}{id}.{}",
            Self::FILENAME_PREFIX,
            Self::FILENAME_EXTENSION
        )
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
