//! `fetch`-backed chat-completion adapter for the `generateContent` endpoint.

use platform_host::{
    ChatCompletionService, ChatEndpointConfig, ChatFuture, GenerateContentResponse, HostError,
};

#[derive(Debug, Clone, Default)]
/// Browser chat client posting JSON to the configured endpoint.
pub struct WebChatCompletionService {
    config: ChatEndpointConfig,
}

impl WebChatCompletionService {
    /// Creates a client for `config`.
    pub fn new(config: ChatEndpointConfig) -> Self {
        Self { config }
    }

    /// Endpoint settings in use.
    pub fn config(&self) -> &ChatEndpointConfig {
        &self.config
    }
}

impl ChatCompletionService for WebChatCompletionService {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> ChatFuture<'a, Result<GenerateContentResponse, HostError>> {
        Box::pin(async move {
            let body = serde_json::to_string(&self.config.request_for(prompt))
                .map_err(|err| HostError::Decode(err.to_string()))?;
            let text = post_json(&self.config.endpoint_url(), &body).await?;
            serde_json::from_str::<GenerateContentResponse>(&text)
                .map_err(|err| HostError::Decode(err.to_string()))
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn post_json(_url: &str, _body: &str) -> Result<String, HostError> {
    Err(HostError::unavailable("chat-completion"))
}

#[cfg(target_arch = "wasm32")]
async fn post_json(url: &str, body: &str) -> Result<String, HostError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or(HostError::unavailable("window"))?;
    let headers =
        web_sys::Headers::new().map_err(|err| HostError::Request(format!("{err:?}")))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|err| HostError::Request(format!("{err:?}")))?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = web_sys::Request::new_with_str_and_init(url, &init)
        .map_err(|err| HostError::Request(format!("failed to build request: {err:?}")))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| HostError::Request(format!("fetch failed: {err:?}")))?
        .dyn_into::<web_sys::Response>()
        .map_err(|_| HostError::Decode("fetch resolved with a non-response".to_string()))?;

    if !response.ok() {
        return Err(HostError::Request(format!("status {}", response.status())));
    }

    let text_promise = response
        .text()
        .map_err(|err| HostError::Decode(format!("{err:?}")))?;
    JsFuture::from(text_promise)
        .await
        .map_err(|err| HostError::Decode(format!("failed to read body: {err:?}")))?
        .as_string()
        .ok_or_else(|| HostError::Decode("response body was not text".to_string()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_builds_report_unavailable() {
        let service = WebChatCompletionService::default();
        assert_eq!(
            block_on(service.generate("hello")),
            Err(HostError::unavailable("chat-completion"))
        );
    }
}
