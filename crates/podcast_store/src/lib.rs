//! # Podcast Store
//!
//! Durable storage for generated podcast audio.
//!
//! Every successful pipeline run produces exactly one [`AudioArtifact`]. Artifacts
//! are written once under an output directory with a fresh random identifier in
//! their filename, read back for presentation, and never overwritten or deleted.

mod domain;
mod store;

pub use domain::AudioArtifact;
pub use store::fs::FsArtifactStore;
pub use store::ArtifactStore;
