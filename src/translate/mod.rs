//! Client for the Google Cloud Translation v2 API.
//!
//! A [`Translator`] makes exactly one provider call per [`Translator::translate`]
//! and returns either the first translation or a [`TranslateError`]. It never
//! retries; timeouts belong to the [`Transport`].

pub mod transport;
pub mod types;

pub use transport::{HttpTransport, Transport, TransportRequest, TransportResponse};
pub use types::{ProviderResponse, Translation, TranslationRequest};

use crate::error::TranslateError;
use bytes::Bytes;
use reqwest::Url;
use std::sync::Arc;

pub struct Translator {
    endpoint: Url,
    transport: Arc<dyn Transport>,
}

impl Translator {
    /// Bind a translator to `endpoint?key=<api_key>` over the given transport.
    pub fn new(endpoint: &Url, api_key: &str, transport: Arc<dyn Transport>) -> Self {
        let mut endpoint = endpoint.clone();
        endpoint.query_pairs_mut().append_pair("key", api_key);
        Self {
            endpoint,
            transport,
        }
    }

    pub async fn translate(&self, target: &str, text: &str) -> Result<Translation, TranslateError> {
        let body = serde_json::to_vec(&TranslationRequest {
            text: text.to_string(),
            target: target.to_string(),
        })?;

        let response = self
            .transport
            .send(TransportRequest {
                url: self.endpoint.clone(),
                body: Bytes::from(body),
            })
            .await?;

        if response.status != 200 {
            return Err(TranslateError::BadStatus(response.status));
        }

        let envelope: ProviderResponse = serde_json::from_slice(&response.body)?;

        envelope
            .data
            .translations
            .into_iter()
            .next()
            .map(Translation::from)
            .ok_or(TranslateError::EmptyTranslations)
    }
}
