use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::io::AsyncWriteExt;

use crate::{store::ArtifactStore, AudioArtifact};

/// Stores artifacts as plain files in a single output directory.
#[derive(Debug, Clone)]
pub struct FsArtifactStore {
    output_dir: PathBuf,
}

impl Default for FsArtifactStore {
    fn default() -> Self {
        Self::new(Self::DEFAULT_OUTPUT_DIR)
    }
}

impl FsArtifactStore {
    pub const DEFAULT_OUTPUT_DIR: &'static str = "audio_generations";

    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ArtifactStore for FsArtifactStore {
    #[tracing::instrument(
        skip_all,
        fields(output_dir = %self.output_dir.display(), size = audio.len())
    )]
    async fn persist(&self, audio: &[u8]) -> anyhow::Result<AudioArtifact> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to create output directory"))
            .with_context(|| {
                format!(
                    "Failed to create output directory {}",
                    self.output_dir.display()
                )
            })?;

        let filename = AudioArtifact::filename_for(&uuid::Uuid::new_v4());
        let path = self.output_dir.join(&filename);

        // create_new: an existing artifact is never overwritten
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .with_context(|| format!("Failed to create artifact {}", path.display()))?;
        file.write_all(audio)
            .await
            .with_context(|| format!("Failed to write artifact {}", path.display()))?;
        file.flush().await?;
        drop(file);

        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to read back artifact {}", path.display()))?;

        tracing::info!(path = %path.display(), "Persisted podcast audio");

        Ok(AudioArtifact {
            filename,
            path,
            bytes,
            created_at: chrono::Utc::now(),
        })
    }

    async fn load(&self, artifact: &AudioArtifact) -> anyhow::Result<Vec<u8>> {
        tokio::fs::read(&artifact.path)
            .await
            .with_context(|| format!("Failed to read artifact {}", artifact.path.display()))
    }
}
