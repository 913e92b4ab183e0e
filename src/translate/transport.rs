//! Outbound HTTP seam between the [`Translator`](super::Translator) and the provider.

use crate::error::{Result, TransportError};
use bytes::Bytes;
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub url: Url,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Performs one request and returns one response.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, std::result::Result<TransportResponse, TransportError>>;
}

/// Production transport: a pooled `reqwest::Client` with a hard request timeout.
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        request: TransportRequest,
    ) -> BoxFuture<'_, std::result::Result<TransportResponse, TransportError>> {
        async move {
            let response = self
                .client
                .post(request.url)
                .header(CONTENT_TYPE, "application/json")
                .body(request.body)
                .send()
                .await?;

            let status = response.status().as_u16();
            let body = response.bytes().await?;

            tracing::debug!(status, body_len = body.len(), "Provider responded");

            Ok(TransportResponse { status, body })
        }
        .boxed()
    }
}
