use std::sync::{Arc, Mutex};

use blog_podcast::{AudioSegment, NarrationConfig, NarrationResponse, Narrator};

#[derive(Clone)]
pub struct MockNarrator {
    pub segments: Vec<AudioSegment>,
    pub calls: Arc<Mutex<Vec<(String, NarrationConfig)>>>,
    pub fail_with: Option<String>,
}

impl MockNarrator {
    pub fn with_audio(audio: &[&[u8]]) -> Self {
        Self {
            segments: audio
                .iter()
                .enumerate()
                .map(|(i, bytes)| {
                    AudioSegment::from_bytes(format!("call_{i}"), bytes, "audio/mpeg")
                })
                .collect(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn silent() -> Self {
        Self::with_audio(&[])
    }

    pub fn with_segments(segments: Vec<AudioSegment>) -> Self {
        Self {
            segments,
            ..Self::silent()
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::silent()
        }
    }
}

impl Narrator for MockNarrator {
    type Error = anyhow::Error;

    async fn summarize_and_narrate(
        &self,
        content: &str,
        config: &NarrationConfig,
    ) -> Result<NarrationResponse, Self::Error> {
        self.calls
            .lock()
            .unwrap()
            .push((content.to_string(), config.clone()));
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(NarrationResponse {
            content: Some("Enjoy the episode!".into()),
            script: Some("Welcome to the show.".into()),
            audio: self.segments.clone(),
        })
    }
}
