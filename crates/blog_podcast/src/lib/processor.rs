pub mod builder;

use podcast_store::ArtifactStore;

use crate::{
    ContentScraper, NarrationResponse, Narrator, PipelineError, PipelineRequest, PipelineResult,
};

/// Turns a blog URL into a narrated podcast artifact.
///
/// Every run is linear: validate, scrape, narrate, persist. The first failing
/// step ends the run with its [`PipelineError`].
#[derive(Debug)]
pub struct PodcastProcessor<S, N, A>
where
    S: ContentScraper,
    N: Narrator,
    A: ArtifactStore,
{
    scraper: S,
    narrator: N,
    store: A,
}

impl<S, N, A> PodcastProcessor<S, N, A>
where
    S: ContentScraper,
    N: Narrator,
    A: ArtifactStore,
{
    /// Scrapes `url`; empty or whitespace-only text means nothing usable came back.
    #[tracing::instrument(skip(self, api_key))]
    async fn scrape(&self, url: &str, api_key: &str) -> Result<String, PipelineError> {
        let content = self.scraper.scrape(url, api_key).await;
        if content.trim().is_empty() {
            tracing::error!("Scrape returned no usable content");
            return Err(PipelineError::ScrapeFailed);
        }

        tracing::info!(chars = content.len(), "Scraped blog content");
        Ok(content)
    }

    #[tracing::instrument(skip_all)]
    async fn narrate(
        &self,
        content: &str,
        request: &PipelineRequest,
    ) -> Result<NarrationResponse, PipelineError> {
        self.narrator
            .summarize_and_narrate(content, &request.narration_config())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to summarize and narrate content");
                PipelineError::Upstream(e.to_string())
            })
    }

    /// Persists the first audio segment of `narration`.
    #[tracing::instrument(skip_all, fields(segments = narration.audio.len()))]
    async fn persist(&self, narration: &NarrationResponse) -> PipelineResult {
        let Some(segment) = narration.audio.first() else {
            tracing::warn!("Narration finished without producing audio");
            return Err(PipelineError::NoAudioProduced);
        };

        let audio = segment.decode().map_err(|e| {
            tracing::error!(error = %e, segment = %segment.id, "Failed to decode audio segment");
            PipelineError::Persist(e.to_string())
        })?;

        self.store.persist(&audio).await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to persist podcast audio");
            PipelineError::Persist(format!("{e:#}"))
        })
    }

    #[tracing::instrument(skip_all, fields(url = %request.url, model = %request.model))]
    pub async fn run(&self, request: &PipelineRequest) -> PipelineResult {
        let url = request.validate()?;

        let content = self.scrape(url, &request.api_keys.scrape).await?;
        let narration = self.narrate(&content, request).await?;
        let artifact = self.persist(&narration).await?;

        tracing::info!(filename = %artifact.filename, bytes = artifact.len(), "Podcast generated");
        Ok(artifact)
    }
}
