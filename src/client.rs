// SPDX-FileCopyrightText: 2025 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use log::debug;
use reqwest::{header, Method, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{
    error::{Error, Result},
    metadata,
    session::Token,
    storage,
};

/// Message substituted when a failure response body cannot be parsed.
const GENERIC_FAILURE_MESSAGE: &str = "Network error";

/// Query-string fragment assembled from a filter object: one pair per
/// defined field, undefined fields omitted entirely.
#[derive(Clone, Debug, Default)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a pair when the filter field is defined, and nothing
    /// otherwise.
    pub fn push<T: ToString>(&mut self, key: &'static str, value: &Option<T>) {
        if let Some(value) = value.as_ref() {
            self.0.push((key, value.to_string()));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }
}

/// Executes requests against the BizDash backend.
///
/// One attempt per call: no retry, no timeout beyond the transport's own,
/// no cancellation. Every request carries a JSON content type, and a
/// bearer credential whenever the shared storage holds one. Failure
/// responses are normalized into [`Error::Api`] with a displayable
/// message.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    storage: storage::Shared,
}

impl Client {
    /// A client for the default backend address.
    pub fn new(storage: storage::Shared) -> Self {
        Self::with_base_url(metadata::DEFAULT_BASE_URL.clone(), storage)
    }

    /// A client for an explicit backend address. The URL should end with a
    /// trailing slash; endpoint paths are joined relative to it.
    pub fn with_base_url(base_url: Url, storage: storage::Shared) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            storage,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T> {
        self.request::<T, ()>(Method::GET, path, &query, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        self.request(Method::POST, path, &Query::new(), body).await
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<T> {
        self.request(Method::PATCH, path, &Query::new(), body).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request::<T, ()>(Method::DELETE, path, &Query::new(), None)
            .await
    }

    async fn request<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&B>,
    ) -> Result<T> {
        let url = self.endpoint(path, query)?;

        let mut request = self
            .http
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = self.bearer().await {
            request = request.bearer_auth(token.expose());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        decode(status, &bytes)
    }

    fn endpoint(&self, path: &str, query: &Query) -> Result<Url> {
        let mut url = self.base_url.join(path.trim_start_matches('/'))?;
        if !query.is_empty() {
            let _ = url.query_pairs_mut().extend_pairs(query.pairs());
        }
        Ok(url)
    }

    /// Best-effort credential lookup. Unreadable storage means the request
    /// goes out unauthenticated; the backend's rejection is the signal the
    /// caller sees.
    async fn bearer(&self) -> Option<Token> {
        match self.storage.lock().await.get().await {
            Ok(data) => data.map(|data| data.token().clone()),
            Err(e) => {
                debug!("Proceeding without credentials, storage is unreadable: {}", e);
                None
            }
        }
    }
}

#[derive(Deserialize)]
struct FailureBody {
    message: Option<String>,
}

/// Turns a transport-level response into the caller's typed result.
///
/// Success bodies are trusted to match `T`. Failure bodies are mined for a
/// `message` field; a parseable body without one falls back to
/// `HTTP <code>`, an unparsable one to the generic network-error message.
fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T> {
    if status.is_success() {
        return Ok(serde_json::from_slice(body)?);
    }

    let message = match serde_json::from_slice::<FailureBody>(body) {
        Ok(FailureBody {
            message: Some(message),
        }) if !message.is_empty() => message,
        Ok(_) => format!("HTTP {}", status.as_u16()),
        Err(_) => GENERIC_FAILURE_MESSAGE.to_owned(),
    };

    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::{error::Result, storage::Memory};

    use super::*;

    fn client() -> Result<Client> {
        Ok(Client::with_base_url(
            Url::parse("https://example.com/api/")?,
            storage::shared(Memory::new()),
        ))
    }

    #[test]
    fn endpoint_joins_paths_relative_to_the_base() -> Result<()> {
        let client = client()?;

        assert_eq!(
            client.endpoint("sales", &Query::new())?.as_str(),
            "https://example.com/api/sales"
        );
        assert_eq!(
            client.endpoint("/auth/login", &Query::new())?.as_str(),
            "https://example.com/api/auth/login"
        );
        Ok(())
    }

    #[test]
    fn endpoint_omits_undefined_filter_fields() -> Result<()> {
        let client = client()?;

        let mut query = Query::new();
        query.push("page", &Some(2));
        query.push("category", &None::<String>);
        query.push("lowStock", &Some(true));

        let url = client.endpoint("inventory", &query)?;
        assert_eq!(
            url.as_str(),
            "https://example.com/api/inventory?page=2&lowStock=true"
        );
        Ok(())
    }

    #[test]
    fn decode_returns_the_typed_success_body() -> Result<()> {
        let value: Value = decode(StatusCode::OK, br#"{"ok":true}"#)?;
        assert_eq!(value["ok"], true);
        Ok(())
    }

    #[test]
    fn decode_surfaces_the_server_message() {
        let result = decode::<Value>(
            StatusCode::UNAUTHORIZED,
            br#"{"message":"Invalid credentials"}"#,
        );

        match result {
            Err(Error::Api { status, message }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid credentials");
            }
            _ => panic!("expected an API failure"),
        }
    }

    #[test]
    fn decode_falls_back_to_the_status_code_without_a_message() {
        let result = decode::<Value>(StatusCode::UNAUTHORIZED, br#"{"error":"nope"}"#);

        match result {
            Err(Error::Api { message, .. }) => assert_eq!(message, "HTTP 401"),
            _ => panic!("expected an API failure"),
        }
    }

    #[test]
    fn decode_substitutes_the_generic_message_for_unparsable_bodies() {
        let result = decode::<Value>(StatusCode::BAD_GATEWAY, b"<html>upstream died</html>");

        match result {
            Err(Error::Api { message, .. }) => assert_eq!(message, GENERIC_FAILURE_MESSAGE),
            _ => panic!("expected an API failure"),
        }
    }

    #[test]
    fn decode_treats_an_empty_message_as_missing() {
        let result = decode::<Value>(StatusCode::INTERNAL_SERVER_ERROR, br#"{"message":""}"#);

        match result {
            Err(Error::Api { message, .. }) => assert_eq!(message, "HTTP 500"),
            _ => panic!("expected an API failure"),
        }
    }
}
