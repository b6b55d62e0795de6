use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    prompt::{build_user_prompt, clamp_script},
    AudioArtifact, AudioSegment, NarrationConfig, NarrationResponse, Narrator, SpeechSynthesizer,
};

/// Narration agent speaking the OpenAI chat-completions protocol through the
/// OpenRouter gateway, with a `text_to_speech` tool backed by `T`.
pub struct OpenRouterAgent<T: SpeechSynthesizer> {
    client: Client,
    base_url: String,
    synthesizer: T,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenRouterError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Speech synthesis error: {0}")]
    Speech(String),
}

impl<T: SpeechSynthesizer> OpenRouterAgent<T> {
    const SYSTEM_PROMPT: &'static str = include_str!("./prompts/system_0.txt");
    pub const TEXT_TO_SPEECH_TOOL: &'static str = "text_to_speech";
    /// Completion round trips allowed before giving up on further tool calls
    const MAX_TOOL_ROUNDS: usize = 3;

    pub fn new(synthesizer: T) -> Self {
        Self {
            client: Client::new(),
            base_url: "https://openrouter.ai/api/v1".into(),
            synthesizer,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn tools() -> serde_json::Value {
        serde_json::json!([
            {
                "type": "function",
                "function": {
                    "name": Self::TEXT_TO_SPEECH_TOOL,
                    "description": "Convert a podcast script to spoken audio. Returns once the audio has been generated.",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "prompt": {
                                "type": "string",
                                "description": "The podcast script to speak, at most 3000 characters."
                            }
                        },
                        "required": ["prompt"]
                    }
                }
            }
        ])
    }

    pub async fn send_completion_request(
        &self,
        model_name: &str,
        messages: &[ChatMessage],
        api_key: &str,
    ) -> Result<CompletionResponse, OpenRouterError> {
        let body = serde_json::json!({
            "model": model_name,
            "messages": messages,
            "tools": Self::tools(),
        });

        let resp = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenRouterError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }

    /// Runs one tool call, returning the tool message for the model and the
    /// audio it produced, if any.
    async fn execute_tool_call(
        &self,
        call: &ToolCall,
        speech_api_key: &str,
    ) -> Result<(ChatMessage, Option<(String, AudioSegment)>), OpenRouterError> {
        if call.function.name != Self::TEXT_TO_SPEECH_TOOL {
            tracing::warn!(tool = %call.function.name, "Model requested an unknown tool");
            let reply = format!("Error: unknown tool '{}'", call.function.name);
            return Ok((ChatMessage::tool(&call.id, reply), None));
        }

        let args = match serde_json::from_str::<TextToSpeechArgs>(&call.function.arguments) {
            Ok(args) => args,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid text_to_speech arguments");
                let reply = format!("Error: invalid arguments: {e}");
                return Ok((ChatMessage::tool(&call.id, reply), None));
            }
        };

        let script = clamp_script(&args.prompt, Self::MAX_SCRIPT_CHARS);
        if script.len() < args.prompt.len() {
            tracing::warn!(
                limit = Self::MAX_SCRIPT_CHARS,
                "Podcast script exceeds character limit, truncating"
            );
        }

        let audio = self
            .synthesizer
            .synthesize(script, speech_api_key)
            .await
            .map_err(|e| OpenRouterError::Speech(e.to_string()))?;

        tracing::info!(bytes = audio.len(), "Generated podcast audio");
        let segment = AudioSegment::from_bytes(&call.id, &audio, AudioArtifact::MIME_TYPE);
        let reply = ChatMessage::tool(&call.id, "Audio generated successfully");

        Ok((reply, Some((script.to_string(), segment))))
    }
}

impl<T: SpeechSynthesizer> Narrator for OpenRouterAgent<T> {
    type Error = OpenRouterError;

    #[tracing::instrument(skip_all, fields(model = %config.model, content_chars = content.len()))]
    async fn summarize_and_narrate(
        &self,
        content: &str,
        config: &NarrationConfig,
    ) -> Result<NarrationResponse, Self::Error> {
        let mut messages = vec![
            ChatMessage::system(Self::SYSTEM_PROMPT),
            ChatMessage::user(build_user_prompt(content)),
        ];
        let mut narration = NarrationResponse::default();

        for round in 1..=Self::MAX_TOOL_ROUNDS {
            let response = self
                .send_completion_request(config.model.id(), &messages, &config.completion_api_key)
                .await
                .inspect_err(|e| tracing::error!(error = %e, "Failed to complete narration"))?;

            let message = response
                .choices
                .into_iter()
                .next()
                .map(|c| c.message)
                .ok_or_else(|| OpenRouterError::Api {
                    status: 0,
                    message: "No choices in completion response".into(),
                })?;

            narration.content = message.content.clone();
            let tool_calls = message.tool_calls.clone().unwrap_or_default();
            if tool_calls.is_empty() {
                break;
            }

            tracing::debug!(round, calls = tool_calls.len(), "Executing tool calls");
            messages.push(message);
            for call in &tool_calls {
                let (reply, produced) = self
                    .execute_tool_call(call, &config.speech_api_key)
                    .await?;
                if let Some((script, segment)) = produced {
                    narration.script = Some(script);
                    narration.audio.push(segment);
                }
                messages.push(reply);
            }
        }

        Ok(narration)
    }
}

#[derive(Debug, Deserialize)]
struct TextToSpeechArgs {
    prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl ChatMessage {
    fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn tool(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tool_call_id: Some(call_id.into()),
            ..Self::new("tool", content)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type", default = "ToolCall::function_type")]
    pub kind: String,
    pub function: FunctionCall,
}

impl ToolCall {
    fn function_type() -> String {
        "function".into()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// JSON-encoded arguments, as produced by the model
    pub arguments: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}
