//! REST API Wrappers
//!
//! Frontend bindings to the backend REST surface, organized by resource.
//! Every call is a single attempt over the browser's fetch (no retry, no
//! timeout); failures are returned to the caller for local handling.

mod booking;
mod lab_test;
mod user;

pub use booking::*;
pub use lab_test::*;
pub use user::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Base path of the backend REST surface
pub const API_BASE: &str = "http://localhost:5000/api/v1";

/// What went wrong with an API call
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never reached the server
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status
    #[error("server responded with status {status}")]
    Server { status: u16 },
    /// The response body was not the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// One client per thread, shared across all calls. `reqwest::Client` clones
/// are cheap handles onto the same connection state.
fn http_client() -> reqwest::Client {
    thread_local! {
        static CLIENT: reqwest::Client = reqwest::Client::new();
    }
    CLIENT.with(|c| c.clone())
}

/// Session auth is cookie-based; the browser only sends cookies cross-origin
/// when the fetch runs in `include` credentials mode.
fn with_credentials(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    let req = req.fetch_credentials_include();
    req
}

async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T, ApiError> {
    let status = res.status();
    if !status.is_success() {
        return Err(ApiError::Server {
            status: status.as_u16(),
        });
    }
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let res = with_credentials(http_client().get(url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(res).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let res = with_credentials(http_client().post(url(path)).json(body))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(res).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let res = with_credentials(http_client().put(url(path)).json(body))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(res).await
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let res = with_credentials(http_client().delete(url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = res.status();
    if !status.is_success() {
        return Err(ApiError::Server {
            status: status.as_u16(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_rooted_at_the_api_base() {
        assert_eq!(url("/tests"), "http://localhost:5000/api/v1/tests");
        assert_eq!(url("/bookings"), "http://localhost:5000/api/v1/bookings");
    }

    #[test]
    fn the_shared_client_hands_out_clones() {
        // Repeated lookups reuse the thread-local client rather than
        // building a fresh one per call.
        let _first = http_client();
        let _second = http_client();
    }
}
