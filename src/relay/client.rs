use reqwest::Client;
use reqwest::header;
use reqwest::multipart::Form;

use crate::error::Result;

use super::{FormPayload, HttpClient, RelayResponse};

/// [`HttpClient`] backed by `reqwest`.
///
/// No timeout or retry is configured; the request lives as long as the
/// underlying connection does.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing client (shared connection pool, custom TLS, ...)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn multipart_form(payload: &FormPayload) -> Form {
    payload
        .fields()
        .iter()
        .fold(Form::new(), |form, (name, value)| {
            form.text(name.clone(), value.clone())
        })
}

impl HttpClient for ReqwestClient {
    async fn post_form(&self, url: &str, payload: &FormPayload) -> Result<RelayResponse> {
        tracing::debug!("posting {} form fields to {}", payload.fields().len(), url);

        let response = self
            .client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .multipart(multipart_form(payload))
            .send()
            .await?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("failed to read relay response body: {e}");
                String::new()
            }
        };

        tracing::debug!("relay answered {}", status);
        Ok(RelayResponse { status, body })
    }
}
