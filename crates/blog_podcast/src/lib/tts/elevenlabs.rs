use std::path::PathBuf;

use reqwest::Client;
use serde::Serialize;

use crate::tts::SpeechSynthesizer;

/// ElevenLabs text-to-speech client.
#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    client: Client,
    base_url: String,
    voice_id: String,
    model_id: String,
    target_directory: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ElevenLabsError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
}

impl Default for ElevenLabsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ElevenLabsClient {
    pub const DEFAULT_VOICE_ID: &'static str = "JBFqnCBsd6RMkjVDRZzb";
    pub const DEFAULT_MODEL_ID: &'static str = "eleven_multilingual_v2";
    const OUTPUT_FORMAT: &'static str = "mp3_44100_64";

    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "https://api.elevenlabs.io".into(),
            voice_id: Self::DEFAULT_VOICE_ID.into(),
            model_id: Self::DEFAULT_MODEL_ID.into(),
            target_directory: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_voice(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Also keep a copy of every synthesized clip in `dir`.
    pub fn with_target_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.target_directory = Some(dir.into());
        self
    }

    pub async fn send_speech_request(
        &self,
        text: &str,
        api_key: &str,
    ) -> Result<Vec<u8>, ElevenLabsError> {
        let resp = self
            .client
            .post(format!(
                "{}/v1/text-to-speech/{}",
                self.base_url, self.voice_id
            ))
            .query(&[("output_format", Self::OUTPUT_FORMAT)])
            .header("xi-api-key", api_key)
            .json(&SpeechRequest {
                text,
                model_id: &self.model_id,
            })
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(ElevenLabsError::Api { status, message });
        }

        Ok(resp.bytes().await?.to_vec())
    }
}

impl SpeechSynthesizer for ElevenLabsClient {
    type Error = ElevenLabsError;

    #[tracing::instrument(
        skip_all,
        fields(voice_id = %self.voice_id, chars = text.chars().count())
    )]
    async fn synthesize(&self, text: &str, api_key: &str) -> Result<Vec<u8>, Self::Error> {
        let audio = self
            .send_speech_request(text, api_key)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to synthesize speech"))?;

        if let Some(dir) = &self.target_directory {
            tokio::fs::create_dir_all(dir).await?;
            let path = dir.join(format!("{}.mp3", uuid::Uuid::new_v4()));
            tokio::fs::write(&path, &audio).await?;
            tracing::debug!(path = %path.display(), "Saved synthesized clip");
        }

        Ok(audio)
    }
}
