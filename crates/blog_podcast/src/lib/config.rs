use std::fmt;

use crate::PipelineError;

/// Completion models reachable through the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CompletionModel {
    /// Lighter model, cheaper on gateway credits
    #[default]
    #[value(name = "gpt-4o-mini")]
    Gpt4oMini,
    #[value(name = "gpt-4o")]
    Gpt4o,
}

impl CompletionModel {
    pub fn id(&self) -> &'static str {
        match self {
            CompletionModel::Gpt4oMini => "openai/gpt-4o-mini",
            CompletionModel::Gpt4o => "openai/gpt-4o",
        }
    }
}

impl fmt::Display for CompletionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Credentials forwarded verbatim to the three upstream services.
#[derive(Clone, Default)]
pub struct ApiKeys {
    pub scrape: String,
    pub completion: String,
    pub speech: String,
}

impl ApiKeys {
    pub const SCRAPE_ENV: &'static str = "FIRECRAWL_API_KEY";
    pub const COMPLETION_ENV: &'static str = "OPENROUTER_API_KEY";
    pub const SPEECH_ENV: &'static str = "ELEVEN_LABS_API_KEY";

    pub fn new(
        scrape: impl Into<String>,
        completion: impl Into<String>,
        speech: impl Into<String>,
    ) -> Self {
        Self {
            scrape: scrape.into(),
            completion: completion.into(),
            speech: speech.into(),
        }
    }

    /// Names of the keys that are empty or whitespace only.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (Self::COMPLETION_ENV, &self.completion),
            (Self::SPEECH_ENV, &self.speech),
            (Self::SCRAPE_ENV, &self.scrape),
        ]
        .into_iter()
        .filter(|(_, key)| key.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn all_present(&self) -> bool {
        self.missing().is_empty()
    }
}

impl fmt::Debug for ApiKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(key: &str) -> &'static str {
            if key.is_empty() {
                "<empty>"
            } else {
                "<redacted>"
            }
        }

        f.debug_struct("ApiKeys")
            .field("scrape", &redact(&self.scrape))
            .field("completion", &redact(&self.completion))
            .field("speech", &redact(&self.speech))
            .finish()
    }
}

/// One pipeline invocation: the blog to narrate and the credentials to use.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    pub url: String,
    pub api_keys: ApiKeys,
    pub model: CompletionModel,
}

impl PipelineRequest {
    pub fn new(url: impl Into<String>, api_keys: ApiKeys) -> Self {
        Self {
            url: url.into(),
            api_keys,
            model: CompletionModel::default(),
        }
    }

    pub fn with_model(mut self, model: CompletionModel) -> Self {
        self.model = model;
        self
    }

    /// Checks credentials first, then the url. Returns the trimmed url.
    pub fn validate(&self) -> Result<&str, PipelineError> {
        let missing = self.api_keys.missing();
        if !missing.is_empty() {
            return Err(PipelineError::MissingApiKeys(missing));
        }

        let url = self.url.trim();
        if url.is_empty() {
            return Err(PipelineError::EmptyUrl);
        }

        Ok(url)
    }

    pub fn narration_config(&self) -> NarrationConfig {
        NarrationConfig {
            model: self.model,
            completion_api_key: self.api_keys.completion.clone(),
            speech_api_key: self.api_keys.speech.clone(),
        }
    }
}

/// What the narrator needs for a single run, passed explicitly rather than
/// through process environment.
#[derive(Clone)]
pub struct NarrationConfig {
    pub model: CompletionModel,
    pub completion_api_key: String,
    pub speech_api_key: String,
}

impl fmt::Debug for NarrationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NarrationConfig")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
