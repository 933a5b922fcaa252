//! WASM HTTP client implementation using gloo_net
//!
//! Fetches the course list through the browser's fetch API.

use crate::config::FetchConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::{CourseSource, HttpClient};
use crate::model::structs::Course;
use gloo_net::http::Request;
use web_sys::{RequestCredentials, RequestMode};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient;

impl HttpClient for WasmClient {
    async fn new(_config: &FetchConfig) -> Result<Self> {
        Ok(Self)
    }
}

impl CourseSource for WasmClient {
    async fn fetch_courses(&self, endpoint: &str) -> Result<Vec<Course>> {
        let resp = Request::get(endpoint)
            .mode(RequestMode::SameOrigin)
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
            .send()
            .await?;

        log::debug!("Response status: {:?}", resp.status());

        if !resp.ok() {
            return Err(ErrorKind::HttpStatus(resp.status()).into());
        }

        let text = resp.text().await?;
        log::debug!("Response length: {}", text.len());

        Ok(serde_json::from_str(&text)?)
    }
}
