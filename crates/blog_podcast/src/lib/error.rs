use podcast_store::AudioArtifact;

/// Outcome of a single pipeline run.
pub type PipelineResult = Result<AudioArtifact, PipelineError>;

/// Terminal failure reasons for a pipeline run. None of them are retried.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Please enter all required API keys to enable podcast generation (missing: {})", .0.join(", "))]
    MissingApiKeys(Vec<&'static str>),
    #[error("Please enter a blog URL first.")]
    EmptyUrl,
    #[error("Unable to extract content from the provided URL. Please try another blog/article URL.")]
    ScrapeFailed,
    #[error("No audio was generated. Please try again.")]
    NoAudioProduced,
    #[error("An error occurred: {0}")]
    Upstream(String),
    #[error("Failed to save podcast audio: {0}")]
    Persist(String),
}

impl PipelineError {
    /// Input problems the user can fix before anything runs.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PipelineError::MissingApiKeys(_) | PipelineError::EmptyUrl
        )
    }
}
