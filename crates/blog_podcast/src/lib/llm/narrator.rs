use std::{fmt::Display, future::Future};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::NarrationConfig;

/// Summarizes scraped text into a podcast script and has it spoken.
///
/// How the script gets synthesized is up to the implementation; an empty
/// [`NarrationResponse::audio`] is a valid outcome, not an error.
pub trait Narrator {
    const MAX_SCRIPT_CHARS: usize = 3000;

    type Error: Display;

    fn summarize_and_narrate(
        &self,
        content: &str,
        config: &NarrationConfig,
    ) -> impl Future<Output = Result<NarrationResponse, Self::Error>>;
}

#[derive(Debug, Clone, Default)]
pub struct NarrationResponse {
    /// Final assistant reply, if any
    pub content: Option<String>,
    /// Last script handed to the speech tool
    pub script: Option<String>,
    pub audio: Vec<AudioSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSegment {
    pub id: String,
    pub base64_audio: String,
    pub mime_type: String,
}

impl AudioSegment {
    pub fn from_bytes(id: impl Into<String>, bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base64_audio: STANDARD.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.base64_audio)
    }
}
