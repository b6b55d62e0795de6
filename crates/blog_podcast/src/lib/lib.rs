mod config;
mod error;
mod llm;
mod processor;
pub mod scrape;
pub mod tracing;
pub mod tts;

pub use config::{ApiKeys, CompletionModel, NarrationConfig, PipelineRequest};
pub use error::{PipelineError, PipelineResult};
pub use llm::openrouter;
pub use llm::{
    narrator::{AudioSegment, NarrationResponse, Narrator},
    prompt,
};
pub use podcast_store::{ArtifactStore, AudioArtifact, FsArtifactStore};
pub use processor::{builder::PodcastProcessorBuilder, PodcastProcessor};
pub use scrape::ContentScraper;
pub use tts::SpeechSynthesizer;
