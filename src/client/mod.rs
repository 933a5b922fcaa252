//! Client module - fetches the course list in both WASM and no-WASM environments
//!
//! `request` uses reqwest on native targets, `gloo` uses the browser's fetch
//! through gloo_net. Both implement [`crate::interface::CourseSource`].

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;
