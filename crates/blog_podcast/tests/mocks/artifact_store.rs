use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use blog_podcast::{ArtifactStore, AudioArtifact};

#[derive(Clone, Default)]
pub struct MockArtifactStore {
    pub persisted: Arc<Mutex<Vec<Vec<u8>>>>,
    pub fail_with: Option<String>,
}

impl MockArtifactStore {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl ArtifactStore for MockArtifactStore {
    async fn persist(&self, audio: &[u8]) -> anyhow::Result<AudioArtifact> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.persisted.lock().unwrap().push(audio.to_vec());
        let filename = AudioArtifact::filename_for(&uuid::Uuid::new_v4());
        Ok(AudioArtifact {
            path: PathBuf::from("/mock").join(&filename),
            filename,
            bytes: audio.to_vec(),
            created_at: chrono::Utc::now(),
        })
    }

    async fn load(&self, artifact: &AudioArtifact) -> anyhow::Result<Vec<u8>> {
        Ok(artifact.bytes.clone())
    }
}
