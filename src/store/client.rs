//! # Store Client
//!
//! Connection handle for the hosted store's REST endpoint. The client is
//! built once from [`SupabaseConfig`], carries the project's API key on every
//! request, and hands out [`TableRef`]s that scope queries to a single table.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;

use crate::config::SupabaseConfig;

use super::error::{StoreError, StoreResult};
use super::query::TableQuery;

/// Client for the hosted store's REST endpoint
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    rest_url: String,
}

impl StoreClient {
    /// Build a client that authenticates every request with the project's
    /// API key.
    pub fn new(config: &SupabaseConfig) -> StoreResult<Self> {
        let key = HeaderValue::from_str(config.api_key()).map_err(|_| {
            StoreError::InvalidRequest("API key is not a valid header value".to_string())
        })?;
        let bearer =
            HeaderValue::from_str(&format!("Bearer {}", config.api_key())).map_err(|_| {
                StoreError::InvalidRequest("API key is not a valid header value".to_string())
            })?;

        let mut headers = HeaderMap::new();
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            rest_url: config.rest_url(),
        })
    }

    /// Scope operations to one table
    pub fn table(&self, name: &str) -> TableRef<'_> {
        TableRef {
            client: self,
            name: name.to_string(),
        }
    }

    /// Base URL of the REST endpoint
    pub fn rest_url(&self) -> &str {
        &self.rest_url
    }

    fn endpoint(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }
}

/// Operations scoped to a single table
pub struct TableRef<'a> {
    client: &'a StoreClient,
    name: String,
}

impl TableRef<'_> {
    /// Read rows. `columns` is the select list, either `*` or an embed
    /// expression such as `*, company:companies(*)`.
    pub fn select(&self, columns: &str) -> TableQuery {
        TableQuery::get(self.client.http.clone(), self.client.endpoint(&self.name))
            .with_select(columns)
    }

    /// Insert one row and read back the created row
    pub fn insert<B: Serialize>(&self, row: &B) -> TableQuery {
        TableQuery::post(self.client.http.clone(), self.client.endpoint(&self.name))
            .with_body(serde_json::to_value(row))
    }

    /// Partially update matching rows and read back the updated rows
    pub fn update<B: Serialize>(&self, patch: &B) -> TableQuery {
        TableQuery::patch(self.client.http.clone(), self.client.endpoint(&self.name))
            .with_body(serde_json::to_value(patch))
    }

    /// Delete matching rows and read back the deleted rows
    pub fn delete(&self) -> TableQuery {
        TableQuery::delete(self.client.http.clone(), self.client.endpoint(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_rest_url_and_table() {
        let config =
            SupabaseConfig::new("https://abc.supabase.co", "anon-key", None).unwrap();
        let client = StoreClient::new(&config).unwrap();

        assert_eq!(client.rest_url(), "https://abc.supabase.co/rest/v1");
        assert_eq!(client.endpoint("companies"), "https://abc.supabase.co/rest/v1/companies");
    }

    #[test]
    fn test_rejects_key_that_cannot_be_a_header() {
        let config = SupabaseConfig::new("https://abc.supabase.co", "bad\nkey", None).unwrap();
        let result = StoreClient::new(&config);

        assert!(matches!(result, Err(StoreError::InvalidRequest(_))));
    }
}
