//! Request pipeline shared by every API call.
//!
//! DESIGN
//! ======
//! The authorization stage is an explicit step applied here, once per
//! outbound request, before dispatch: when the session holds a non-empty
//! token the request gains a bearer `Authorization` header, otherwise it is
//! forwarded unmodified. The stage never inspects responses and never
//! retries.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`. Server-side (SSR):
//! these helpers are not compiled; `api` returns errors there instead.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::session::Session;

/// Base URL of the backend API during local development.
pub const API_BASE: &str = "http://localhost:8080/api";

/// Join an endpoint path (leading slash included) onto the API base.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn api_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Value for the `Authorization` header, or `None` when no usable token is
/// present. Pure; the single place the wire format of the credential lives.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn authorization_header(token: Option<&str>) -> Option<String> {
    match token {
        Some(token) if !token.is_empty() => Some(format!("Bearer {token}")),
        _ => None,
    }
}

/// GET `path` and decode a JSON body.
#[cfg(feature = "hydrate")]
pub(crate) async fn get_json<T: DeserializeOwned>(
    session: &Session,
    path: &str,
) -> Result<T, ApiError> {
    let mut request = gloo_net::http::Request::get(&api_url(path));
    if let Some(value) = authorization_header(session.token().as_deref()) {
        request = request.header("Authorization", &value);
    }
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

/// POST a JSON `body` to `path` and decode a JSON response.
#[cfg(feature = "hydrate")]
pub(crate) async fn post_json<T: DeserializeOwned>(
    session: &Session,
    path: &str,
    body: &serde_json::Value,
) -> Result<T, ApiError> {
    let mut request = gloo_net::http::Request::post(&api_url(path));
    if let Some(value) = authorization_header(session.token().as_deref()) {
        request = request.header("Authorization", &value);
    }
    let response = request
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(response).await
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(response: gloo_net::http::Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::from_status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
