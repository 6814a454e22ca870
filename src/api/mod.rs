//! REST API Client
//!
//! Thin wrappers over the backend's CRUD surface, organized by domain.
//! Responses are decoded into models; failures are mapped onto the
//! `ApiError` taxonomy by HTTP status.

pub mod auth;
pub mod projects;
pub mod tasks;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::config;
use crate::error::ApiError;
use crate::storage;

/// Error payload shape shared by every backend endpoint.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn url(path: &str) -> String {
    format!("{}{}", config::api_base_url(), path)
}

/// Attach the stored bearer token, if any, and send.
async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let request = match storage::stored_token() {
        Some(token) => request.bearer_auth(token),
        None => request,
    };
    request.send().await.map_err(|err| {
        web_sys::console::error_1(&format!("[API] Request failed: {}", err).into());
        ApiError::Network(err.to_string())
    })
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Network(err.to_string()));
    }

    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    Err(match status.as_u16() {
        401 => ApiError::Auth(message),
        400 | 422 => ApiError::Validation(message),
        404 => ApiError::NotFound(message),
        code => ApiError::Server(code, message),
    })
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(reqwest::Client::new().get(url(path))).await?;
    decode(response).await
}

pub(crate) async fn get_json_with_query<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let response = send(reqwest::Client::new().get(url(path)).query(query)).await?;
    decode(response).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(reqwest::Client::new().post(url(path)).json(body)).await?;
    decode(response).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = send(reqwest::Client::new().put(url(path)).json(body)).await?;
    decode(response).await
}

/// DELETE, ignoring any acknowledgment body.
pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let response = send(reqwest::Client::new().delete(url(path))).await?;
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };
    Err(match status.as_u16() {
        401 => ApiError::Auth(message),
        404 => ApiError::NotFound(message),
        code => ApiError::Server(code, message),
    })
}
