//! Submitting prepared requests over HTTP.

use std::fmt;
use std::future::Future;

use anyhow::Context;
use bytes::Bytes;
use futures_util::future::try_join_all;
use reqwest::Body;
use reqwest::multipart::{Form, Part};
use tokio_util::io::ReaderStream;

use crate::config::{API_ENDPOINT, BotConfig};
use crate::error::{Error, Result};
use crate::file::{RequestFile, Upload, UploadBody};
use crate::params::Params;

/// Everything needed to put one call on the wire. Building it does no I/O.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method: &'static str,
    pub params: Params,
    pub files: Vec<RequestFile>,
}

impl PreparedRequest {
    /// Multipart is only used when at least one part must be uploaded.
    pub fn is_multipart(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Sends a prepared request and returns the raw response body.
pub trait Transport: Send + Sync {
    fn submit(&self, request: PreparedRequest) -> impl Future<Output = Result<Bytes>> + Send;
}

/// [`Transport`] over a `reqwest` client.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpTransport {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: API_ENDPOINT.to_string(),
            token: token.into(),
        }
    }

    /// Uses a different endpoint template (`{token}` and `{method}` placeholders).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    pub fn from_config(config: &BotConfig) -> anyhow::Result<Self> {
        let token = config.resolve_token()?;
        let endpoint = config.resolve_api_endpoint()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self::new(token).with_endpoint(endpoint).with_client(http))
    }

    fn method_url(&self, method: &str) -> String {
        self.endpoint
            .replace("{token}", &self.token)
            .replace("{method}", method)
    }
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

impl Transport for HttpTransport {
    async fn submit(&self, request: PreparedRequest) -> Result<Bytes> {
        let PreparedRequest {
            method,
            params,
            files,
        } = request;
        let builder = self.http.post(self.method_url(method));
        let builder = if files.is_empty() {
            let fields: Vec<(String, String)> = params.into_iter().collect();
            builder.form(&fields)
        } else {
            builder.multipart(multipart_form(params, files).await?)
        };

        // reqwest errors carry the URL, which contains the token.
        let response = builder
            .send()
            .await
            .map_err(|err| Error::transport(method, err.without_url()))?;
        response
            .bytes()
            .await
            .map_err(|err| Error::transport(method, err.without_url()))
    }
}

async fn multipart_form(params: Params, files: Vec<RequestFile>) -> Result<Form> {
    let mut form = Form::new();
    for (key, value) in params {
        form = form.text(key, value);
    }
    let uploads = try_join_all(files.iter().map(|file| file.file.open())).await?;
    for (file, upload) in files.into_iter().zip(uploads) {
        form = form.part(file.name, upload_part(upload));
    }
    Ok(form)
}

fn upload_part(upload: Upload) -> Part {
    let part = match upload.body {
        UploadBody::Bytes(data) => Part::stream(data),
        UploadBody::Reader { reader, length } => {
            let body = Body::wrap_stream(ReaderStream::new(reader));
            match length {
                Some(length) => Part::stream_with_length(body, length),
                None => Part::stream(body),
            }
        }
    };
    part.file_name(upload.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_url_substitution() {
        let transport = HttpTransport::new("123:abc");
        assert_eq!(
            transport.method_url("getMe"),
            "https://api.telegram.org/bot123:abc/getMe"
        );

        let local = HttpTransport::new("t").with_endpoint("http://localhost:8081/bot{token}/{method}");
        assert_eq!(local.method_url("close"), "http://localhost:8081/bott/close");
    }

    #[test]
    fn test_debug_hides_token() {
        let transport = HttpTransport::new("123:secret");
        assert!(!format!("{transport:?}").contains("secret"));
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = BotConfig {
            token: Some("42:abc".to_string()),
            api_endpoint: Some("http://127.0.0.1:9/bot{token}/{method}".to_string()),
            timeout_secs: 5,
            ..BotConfig::default()
        };
        let transport = HttpTransport::from_config(&config).unwrap();
        assert_eq!(transport.method_url("getMe"), "http://127.0.0.1:9/bot42:abc/getMe");
    }
}
