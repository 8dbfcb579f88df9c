//! OpenAI-compatible chat completions client.

use super::{CompletionClient, CompletionRequest};
use crate::error::{QuillError, Result};
use serde::{Deserialize, Serialize};

/// Blocking client for `POST {base_url}/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: Option<String>,
    /// Environment variable the key was read from, for error messages.
    key_env: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a client for `base_url` authenticating with `api_key`.
    ///
    /// No request timeout is set: a hung service hangs the run.
    #[cfg(test)]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::build(base_url.into(), Some(api_key.into()), None)
    }

    /// Create a client whose API key comes from the environment variable `key_env`.
    ///
    /// A missing key is reported when a completion is requested, so runs
    /// that never generate do not need one.
    pub fn from_env(base_url: impl Into<String>, key_env: &str) -> Result<Self> {
        Self::build(
            base_url.into(),
            std::env::var(key_env).ok(),
            Some(key_env.to_string()),
        )
    }

    fn build(base_url: String, api_key: Option<String>, key_env: Option<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("quill/", env!("CARGO_PKG_VERSION")))
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(|e| {
                QuillError::ConfigError(format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            key_env,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            let fix = match &self.key_env {
                Some(var) => format!("export {}=<your API key> or add it to .env", var),
                None => "provide a non-empty API key".to_string(),
            };
            QuillError::generation_msg(format!(
                "completion API key is not set.\n\nFix: {}.",
                fix
            ))
        })
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        let api_key = self.api_key()?;
        let body = ChatRequest {
            model: request.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.user,
                },
            ],
            max_tokens: request.max_output_tokens,
            temperature: request.temperature,
        };

        tracing::debug!(
            endpoint = %self.endpoint(),
            model = request.model,
            prompt_chars = request.user.chars().count(),
            "sending completion request"
        );

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| QuillError::generation("completion request failed", e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(QuillError::generation_msg(format!(
                "completion service returned HTTP {}: {}",
                status,
                detail.trim()
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .map_err(|e| QuillError::generation("completion response was not valid JSON", e))?;

        extract_content(parsed)
    }
}

fn extract_content(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| QuillError::generation_msg("completion response contained no text"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// Serve exactly one HTTP response and hand back the raw request.
    fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(value) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap();
                }
                let done = line == "\r\n";
                head.push_str(&line);
                if done {
                    break;
                }
            }
            let mut payload = vec![0u8; content_length];
            reader.read_exact(&mut payload).unwrap();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            reader.get_mut().write_all(response.as_bytes()).unwrap();

            head + &String::from_utf8(payload).unwrap()
        });

        (base_url, handle)
    }

    fn request<'a>() -> CompletionRequest<'a> {
        CompletionRequest {
            model: "gpt-4o-mini",
            system: "be helpful",
            user: "write about queues",
            max_output_tokens: 4000,
            temperature: 0.7,
        }
    }

    #[test]
    fn returns_first_choice_text() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"choices":[{"message":{"role":"assistant","content":"TITLE: Hi\nBODY:\nx"}}]}"#,
        );
        let client = OpenAiClient::new(base_url, "sk-test").unwrap();

        let text = client.complete(&request()).unwrap();
        assert_eq!(text, "TITLE: Hi\nBODY:\nx");

        let raw = server.join().unwrap();
        assert!(raw.starts_with("POST /chat/completions"));
        assert!(raw.to_ascii_lowercase().contains("authorization: bearer sk-test"));
        let json_start = raw.find('{').unwrap();
        let sent: serde_json::Value = serde_json::from_str(&raw[json_start..]).unwrap();
        assert_eq!(sent["model"], "gpt-4o-mini");
        assert_eq!(sent["max_tokens"], 4000);
        assert_eq!(sent["messages"][0]["role"], "system");
        assert_eq!(sent["messages"][0]["content"], "be helpful");
        assert_eq!(sent["messages"][1]["role"], "user");
        assert_eq!(sent["messages"][1]["content"], "write about queues");
        assert!((sent["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn http_error_status_is_generation_error() {
        let (base_url, server) =
            serve_once("429 Too Many Requests", r#"{"error":{"message":"quota"}}"#);
        let client = OpenAiClient::new(base_url, "sk-test").unwrap();

        let err = client.complete(&request()).unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, QuillError::GenerationError { .. }));
        assert!(err.to_string().contains("429"));
        assert!(err.to_string().contains("quota"));
    }

    #[test]
    fn malformed_json_is_generation_error() {
        let (base_url, server) = serve_once("200 OK", "not json at all");
        let client = OpenAiClient::new(base_url, "sk-test").unwrap();

        let err = client.complete(&request()).unwrap_err();
        server.join().unwrap();

        assert!(matches!(err, QuillError::GenerationError { .. }));
    }

    #[test]
    fn unreachable_service_is_generation_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let client = OpenAiClient::new(base_url, "sk-test").unwrap();
        let err = client.complete(&request()).unwrap_err();

        assert!(matches!(err, QuillError::GenerationError { source: Some(_), .. }));
    }

    #[test]
    fn empty_choices_is_generation_error() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(extract_content(response).is_err());

        let response: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(extract_content(response).is_err());
    }

    #[test]
    fn empty_api_key_is_generation_error_without_request() {
        // Nothing listens here; a request attempt would attach a transport source.
        let client = OpenAiClient::new("http://127.0.0.1:9", "  ").unwrap();
        let err = client.complete(&request()).unwrap_err();
        assert!(matches!(err, QuillError::GenerationError { source: None, .. }));
        assert_eq!(err.exit_code(), crate::exit_codes::GENERATION_FAILURE);
    }

    #[test]
    fn base_url_trailing_slash_is_normalised() {
        let client = OpenAiClient::new("https://api.example.com/v1/", "k").unwrap();
        assert_eq!(client.endpoint(), "https://api.example.com/v1/chat/completions");
    }

    #[test]
    #[serial_test::serial]
    fn from_env_reports_the_missing_variable() {
        let var = "QUILL_TEST_COMPLETION_KEY";
        // SAFETY: serialized with other env-mutating tests.
        unsafe { std::env::remove_var(var) };
        let client = OpenAiClient::from_env("http://127.0.0.1:9", var).unwrap();
        let err = client.complete(&request()).unwrap_err();
        assert!(matches!(err, QuillError::GenerationError { source: None, .. }));
        assert!(err.to_string().contains(var));

        unsafe { std::env::set_var(var, "sk-from-env") };
        let client = OpenAiClient::from_env("http://127.0.0.1:9", var).unwrap();
        assert_eq!(client.api_key().unwrap(), "sk-from-env");
        unsafe { std::env::remove_var(var) };
    }
}
