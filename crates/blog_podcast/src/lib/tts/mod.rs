pub mod elevenlabs;

use std::{fmt::Display, future::Future};

pub trait SpeechSynthesizer {
    type Error: Display;

    /// Converts `text` to encoded audio bytes.
    fn synthesize(
        &self,
        text: &str,
        api_key: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Self::Error>>;
}
