//! Shared PostgREST HTTP plumbing.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::infrastructure::config::DataStoreConfig;
use crate::infrastructure::ports::RepoError;

/// `Prefer` value for inserts that should echo the stored row.
pub(super) const RETURN_REPRESENTATION: &str = "return=representation";

/// `Prefer` value for upserts against a uniqueness constraint.
pub(super) const MERGE_DUPLICATES: &str = "resolution=merge-duplicates,return=representation";

/// Thin wrapper over `{SUPABASE_URL}/rest/v1`.
///
/// Built even when unconfigured; every call then fails with
/// [`RepoError::NotConfigured`] so narration keeps working.
#[derive(Clone)]
pub struct PostgrestClient {
    client: Client,
    config: Option<DataStoreConfig>,
}

impl PostgrestClient {
    pub fn new(config: Option<DataStoreConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Request against `resource` with auth headers and query parameters set.
    pub(super) fn request(
        &self,
        method: Method,
        resource: &'static str,
        query: &[(&str, String)],
    ) -> Result<RequestBuilder, RepoError> {
        let config = self.config.as_ref().ok_or(RepoError::NotConfigured)?;
        let headers = auth_headers(&config.service_key)
            .map_err(|e| RepoError::request(resource, format!("invalid service key: {e}")))?;

        Ok(self
            .client
            .request(method, resource_url(&config.url, resource))
            .headers(headers)
            .query(query))
    }

    /// Send and decode a JSON body.
    pub(super) async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        request: RequestBuilder,
    ) -> Result<T, RepoError> {
        let body = self.send(resource, request).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(resource, error = %e, "Undecodable data store response");
            RepoError::serialization(format!("{resource}: {e}"))
        })
    }

    /// Send and return the raw body of a successful response.
    pub(super) async fn send(
        &self,
        resource: &'static str,
        request: RequestBuilder,
    ) -> Result<String, RepoError> {
        let response = request
            .send()
            .await
            .map_err(|e| RepoError::request(resource, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RepoError::request(resource, e))?;

        if !status.is_success() {
            tracing::warn!(resource, status = status.as_u16(), "Data store request failed");
            return Err(RepoError::Status {
                resource,
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

pub(super) fn resource_url(base_url: &str, resource: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), resource)
}

fn auth_headers(service_key: &str) -> Result<HeaderMap, reqwest::header::InvalidHeaderValue> {
    let mut headers = HeaderMap::new();
    headers.insert("apikey", HeaderValue::from_str(service_key)?);
    headers.insert(
        reqwest::header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {service_key}"))?,
    );
    Ok(headers)
}

/// PostgREST equality filter value.
pub(super) fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{value}")
}

/// First row of a `return=representation` response.
pub(super) fn single_row<T>(resource: &'static str, rows: Vec<T>) -> Result<T, RepoError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| RepoError::serialization(format!("{resource}: empty representation")))
}
