use std::future::Future;

use crate::AudioArtifact;

pub mod fs;

pub trait ArtifactStore {
    /// Writes `audio` to a freshly named artifact and returns it with the
    /// bytes read back from storage.
    fn persist(&self, audio: &[u8]) -> impl Future<Output = anyhow::Result<AudioArtifact>> + Send;

    /// Reads the stored bytes of a previously persisted artifact.
    fn load(&self, artifact: &AudioArtifact)
        -> impl Future<Output = anyhow::Result<Vec<u8>>> + Send;
}

impl<T: ArtifactStore + Send + Sync> ArtifactStore for &T {
    async fn persist(&self, audio: &[u8]) -> anyhow::Result<AudioArtifact> {
        (**self).persist(audio).await
    }

    async fn load(&self, artifact: &AudioArtifact) -> anyhow::Result<Vec<u8>> {
        (**self).load(artifact).await
    }
}
