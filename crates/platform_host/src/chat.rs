//! Chat-completion contracts for the assistant panel.
//!
//! The assistant keeps conversational context by flattening the transcript into a single prompt
//! and sending it to a `generateContent`-style endpoint. Transport lives behind
//! [`ChatCompletionService`]; this module owns the prompt format, the payload model, and the
//! best-effort reply policy built on [`crate::retry_with_backoff`].

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

use crate::{retry_with_backoff, DelayService, HostError, RetryPolicy};

/// Object-safe boxed future used by [`ChatCompletionService`].
pub type ChatFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Reply used when the endpoint answers without any candidate text.
pub const CHAT_EMPTY_REPLY_FALLBACK: &str = "申し訳ありません、応答を生成できませんでした。";

/// Reply used when every attempt failed.
pub const CHAT_NETWORK_FAILURE_FALLBACK: &str =
    "通信エラーが発生しました。ネットワーク状況を確認してください。";

/// System instruction sent with every request.
pub const DEFAULT_SYSTEM_INSTRUCTION: &str =
    "あなたは仮想OS「WebOS」に内蔵されたサポートAIです。親切かつ簡潔に、日本語で答えてください。";

const USER_SPEAKER: &str = "ユーザー";
const ASSISTANT_SPEAKER: &str = "AI";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Author of one transcript entry.
pub enum ChatRole {
    /// Message typed by the user.
    User,
    /// Message produced by the assistant.
    Assistant,
}

impl ChatRole {
    fn speaker(self) -> &'static str {
        match self {
            Self::User => USER_SPEAKER,
            Self::Assistant => ASSISTANT_SPEAKER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One transcript entry.
pub struct ChatMessage {
    /// Message author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Flattens `history` and the new `prompt` into the single-turn prompt sent upstream.
///
/// Each history entry becomes one `speaker: content` line, followed by the new user line and an
/// open `AI:` cue.
pub fn build_prompt(history: &[ChatMessage], prompt: &str) -> String {
    let history_text = history
        .iter()
        .map(|message| format!("{}: {}", message.role.speaker(), message.content))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{history_text}\n{USER_SPEAKER}: {prompt}\n{ASSISTANT_SPEAKER}:")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Text fragment of a content block.
pub struct Part {
    /// Fragment text; absent for non-text parts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Content block made of parts.
pub struct Content {
    /// Ordered fragments.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Builds a single-part text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part {
                text: Some(text.into()),
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Request body for the `generateContent` endpoint.
pub struct GenerateContentRequest {
    /// Conversation contents (a single flattened prompt block).
    pub contents: Vec<Content>,
    /// System-level instruction block.
    pub system_instruction: Content,
}

impl GenerateContentRequest {
    /// Builds a request for one flattened prompt.
    pub fn from_prompt(prompt: impl Into<String>, system_instruction: impl Into<String>) -> Self {
        Self {
            contents: vec![Content::text(prompt)],
            system_instruction: Content::text(system_instruction),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// One generated candidate.
pub struct Candidate {
    /// Generated content, absent when the candidate was filtered.
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Response body of the `generateContent` endpoint.
pub struct GenerateContentResponse {
    /// Generated candidates, best first.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, when non-empty.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Endpoint settings for the chat-completion adapter.
pub struct ChatEndpointConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Model path segment.
    pub model: String,
    /// API key appended as the `key` query parameter; the embedding environment may inject it.
    pub api_key: String,
    /// Instruction sent with every request.
    pub system_instruction: String,
}

impl Default for ChatEndpointConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-2.5-flash-preview-09-2025".to_string(),
            api_key: String::new(),
            system_instruction: DEFAULT_SYSTEM_INSTRUCTION.to_string(),
        }
    }
}

impl ChatEndpointConfig {
    /// Full `generateContent` URL for this configuration.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        )
    }

    /// Request body for a flattened prompt.
    pub fn request_for(&self, prompt: impl Into<String>) -> GenerateContentRequest {
        GenerateContentRequest::from_prompt(prompt, self.system_instruction.clone())
    }
}

/// Host service for one chat-completion round trip.
pub trait ChatCompletionService {
    /// Sends the flattened `prompt` and resolves with the decoded response.
    ///
    /// Non-success statuses and undecodable bodies are errors so the caller can retry them.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> ChatFuture<'a, Result<GenerateContentResponse, HostError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op chat service for unsupported targets.
pub struct NoopChatCompletionService;

impl ChatCompletionService for NoopChatCompletionService {
    fn generate<'a>(
        &'a self,
        _prompt: &'a str,
    ) -> ChatFuture<'a, Result<GenerateContentResponse, HostError>> {
        Box::pin(async { Err(HostError::unavailable("chat-completion")) })
    }
}

/// Produces the assistant reply for `prompt` given the prior transcript.
///
/// Never fails: an empty answer maps to [`CHAT_EMPTY_REPLY_FALLBACK`] and an exhausted retry
/// budget maps to [`CHAT_NETWORK_FAILURE_FALLBACK`].
pub async fn generate_reply(
    chat: &dyn ChatCompletionService,
    delay: &dyn DelayService,
    policy: &RetryPolicy,
    history: &[ChatMessage],
    prompt: &str,
) -> String {
    let full_prompt = build_prompt(history, prompt);
    let outcome = retry_with_backoff(policy, delay, |_| chat.generate(&full_prompt)).await;
    match outcome {
        Ok(response) => response
            .first_text()
            .unwrap_or(CHAT_EMPTY_REPLY_FALLBACK)
            .to_string(),
        Err(_) => CHAT_NETWORK_FAILURE_FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::VecDeque, time::Duration};

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::NoopDelayService;

    struct ScriptedChat {
        replies: RefCell<VecDeque<Result<GenerateContentResponse, HostError>>>,
        prompts: RefCell<Vec<String>>,
    }

    impl ScriptedChat {
        fn new(replies: Vec<Result<GenerateContentResponse, HostError>>) -> Self {
            Self {
                replies: RefCell::new(replies.into()),
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl ChatCompletionService for ScriptedChat {
        fn generate<'a>(
            &'a self,
            prompt: &'a str,
        ) -> ChatFuture<'a, Result<GenerateContentResponse, HostError>> {
            self.prompts.borrow_mut().push(prompt.to_string());
            let next = self
                .replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(HostError::Request("script exhausted".to_string())));
            Box::pin(async move { next })
        }
    }

    fn text_response(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content::text(text)),
            }],
        }
    }

    #[test]
    fn prompt_carries_history_and_open_cue() {
        let history = vec![
            ChatMessage::assistant("こんにちは"),
            ChatMessage::user("天気は？"),
        ];
        assert_eq!(
            build_prompt(&history, "ありがとう"),
            "AI: こんにちは\nユーザー: 天気は？\nユーザー: ありがとう\nAI:"
        );
    }

    #[test]
    fn prompt_without_history_starts_with_blank_line() {
        assert_eq!(build_prompt(&[], "hi"), "\nユーザー: hi\nAI:");
    }

    #[test]
    fn request_serializes_camel_case_body() {
        let config = ChatEndpointConfig::default();
        let body = serde_json::to_value(config.request_for("hello")).expect("serialize");
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "systemInstruction": { "parts": [{ "text": DEFAULT_SYSTEM_INSTRUCTION }] }
            })
        );
    }

    #[test]
    fn endpoint_url_embeds_model_and_key() {
        let config = ChatEndpointConfig {
            base_url: "https://example.test/v1/".to_string(),
            model: "m-1".to_string(),
            api_key: "k".to_string(),
            ..ChatEndpointConfig::default()
        };
        assert_eq!(
            config.endpoint_url(),
            "https://example.test/v1/models/m-1:generateContent?key=k"
        );
    }

    #[test]
    fn first_text_tolerates_sparse_responses() {
        let parsed: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))
                .expect("decode");
        assert_eq!(parsed.first_text(), None);

        let parsed: GenerateContentResponse = serde_json::from_value(json!({})).expect("decode");
        assert_eq!(parsed.first_text(), None);

        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{ "text": "はい" }] } }]
        }))
        .expect("decode");
        assert_eq!(parsed.first_text(), Some("はい"));
    }

    #[test]
    fn reply_uses_first_candidate_text() {
        let chat = ScriptedChat::new(vec![Ok(text_response("了解です"))]);
        let reply = block_on(generate_reply(
            &chat,
            &NoopDelayService,
            &RetryPolicy::default(),
            &[ChatMessage::assistant("こんにちは")],
            "テスト",
        ));
        assert_eq!(reply, "了解です");
        assert_eq!(
            *chat.prompts.borrow(),
            vec!["AI: こんにちは\nユーザー: テスト\nAI:".to_string()]
        );
    }

    #[test]
    fn empty_answer_maps_to_apology() {
        let chat = ScriptedChat::new(vec![Ok(GenerateContentResponse::default())]);
        let reply = block_on(generate_reply(
            &chat,
            &NoopDelayService,
            &RetryPolicy::default(),
            &[],
            "?",
        ));
        assert_eq!(reply, CHAT_EMPTY_REPLY_FALLBACK);
    }

    #[test]
    fn transient_failure_is_retried() {
        let chat = ScriptedChat::new(vec![
            Err(HostError::Request("status 503".to_string())),
            Ok(text_response("復旧しました")),
        ]);
        let reply = block_on(generate_reply(
            &chat,
            &NoopDelayService,
            &RetryPolicy::default(),
            &[],
            "?",
        ));
        assert_eq!(reply, "復旧しました");
        assert_eq!(chat.prompts.borrow().len(), 2);
    }

    #[test]
    fn exhausted_retries_map_to_network_notice() {
        let chat = ScriptedChat::new(Vec::new());
        let policy = RetryPolicy {
            max_retries: 3,
            initial_delay: Duration::from_millis(1),
            ..RetryPolicy::default()
        };
        let reply = block_on(generate_reply(&chat, &NoopDelayService, &policy, &[], "?"));
        assert_eq!(reply, CHAT_NETWORK_FAILURE_FALLBACK);
        assert_eq!(chat.prompts.borrow().len(), 4);
    }
}
