use crate::domain::{
    backend::ChatBackend,
    models::{AskResponse, Message},
};
use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// REST client for the assistant backend.
pub struct HttpBackend {
    base_url: String,
    http: HttpClient,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    data: &'a str,
}

// Older servers answer with a bare message array on both endpoints.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptBody {
    Bare(Vec<Message>),
    Wrapped {
        #[serde(default)]
        items: Vec<Message>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AskBody {
    Bare(Vec<Message>),
    Wrapped(AskResponse),
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_owned();
        if base_url.is_empty() {
            bail!("backend.base_url must not be empty");
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .context("build HTTP client")?;

        Ok(Self { base_url, http })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn fetch_transcript(&self) -> Result<Vec<Message>> {
        let response = self
            .http
            .get(self.endpoint("/api"))
            .send()
            .await
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        let body = response.text().await.context("read transcript body")?;
        if !status.is_success() {
            return Err(clean_error_response(status, &body));
        }

        let parsed: TranscriptBody = serde_json::from_str(&body).context("decode transcript")?;
        Ok(match parsed {
            TranscriptBody::Bare(items) | TranscriptBody::Wrapped { items } => items,
        })
    }

    async fn ask(&self, text: &str) -> Result<AskResponse> {
        let response = self
            .http
            .post(self.endpoint("/api/ask"))
            .json(&AskRequest { data: text })
            .send()
            .await
            .map_err(|error| connection_error(&self.base_url, error))?;

        let status = response.status();
        let body = response.text().await.context("read ask body")?;
        if !status.is_success() {
            return Err(clean_error_response(status, &body));
        }

        let parsed: AskBody = serde_json::from_str(&body).context("decode ask response")?;
        Ok(match parsed {
            AskBody::Bare(items) => AskResponse {
                items,
                questions: None,
            },
            AskBody::Wrapped(response) => response,
        })
    }
}

fn connection_error(base_url: &str, error: reqwest::Error) -> anyhow::Error {
    anyhow!("cannot reach {base_url} -- is the assistant server running? ({error})")
}

fn clean_error_response(status: StatusCode, body: &str) -> anyhow::Error {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: Option<String>,
    }

    if let Ok(ErrorEnvelope { error: Some(error) }) = serde_json::from_str(body) {
        if !error.is_empty() {
            return anyhow!("server error ({}): {}", status.as_u16(), error);
        }
    }

    if body.len() < 100 && !body.contains('{') && !body.contains('<') {
        return anyhow!("server error ({}): {}", status.as_u16(), body.trim());
    }

    anyhow!("server returned {}", status.as_u16())
}
