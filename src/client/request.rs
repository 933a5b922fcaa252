//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::config::FetchConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{CourseSource, HttpClient};
use crate::model::structs::Course;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
}

impl HttpClient for NoWasmClient {
    async fn new(config: &FetchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }
}

impl CourseSource for NoWasmClient {
    async fn fetch_courses(&self, endpoint: &str) -> Result<Vec<Course>> {
        let resp = self.client.get(endpoint).send().await?;

        let status = resp.status();
        if !status.is_success() {
            log::debug!(
                "GET {} -> {} {}",
                endpoint,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            );
            return Err(ErrorKind::HttpStatus(status.as_u16()).into());
        }

        let body = resp.text().await?;
        log::debug!("GET {} -> {} bytes", endpoint, body.len());

        Ok(serde_json::from_str(&body)?)
    }
}
