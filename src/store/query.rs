//! # Table Queries
//!
//! One pending operation against a table: built by [`TableRef`], narrowed by
//! filters and a row window, executed by one of the `fetch_*` methods. Each
//! execution is a single round trip; nothing is retried and no timeout is
//! imposed beyond the HTTP client's defaults.
//!
//! [`TableRef`]: super::client::TableRef

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{StoreError, StoreResult};
use super::filter::{Filter, FilterOperator};

/// A query against one table
pub struct TableQuery {
    client: reqwest::Client,
    url: String,
    method: Method,
    select: Option<String>,
    filters: Vec<Filter>,
    offset: Option<usize>,
    limit: Option<usize>,
    body: Option<serde_json::Result<Value>>,
    representation: bool,
}

impl TableQuery {
    fn new(client: reqwest::Client, url: String, method: Method) -> Self {
        Self {
            client,
            url,
            method,
            select: None,
            filters: Vec::new(),
            offset: None,
            limit: None,
            body: None,
            representation: false,
        }
    }

    /// A read
    pub(crate) fn get(client: reqwest::Client, url: String) -> Self {
        Self::new(client, url, Method::GET)
    }

    /// An insert; affected rows are requested back
    pub(crate) fn post(client: reqwest::Client, url: String) -> Self {
        Self::new(client, url, Method::POST).with_representation()
    }

    /// A partial update; affected rows are requested back
    pub(crate) fn patch(client: reqwest::Client, url: String) -> Self {
        Self::new(client, url, Method::PATCH).with_representation()
    }

    /// A delete; affected rows are requested back
    pub(crate) fn delete(client: reqwest::Client, url: String) -> Self {
        Self::new(client, url, Method::DELETE).with_representation()
    }

    pub(crate) fn with_select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub(crate) fn with_body(mut self, body: serde_json::Result<Value>) -> Self {
        self.body = Some(body);
        self
    }

    fn with_representation(mut self) -> Self {
        self.representation = true;
        self
    }

    /// Keep only rows where `column` equals `value`
    pub fn eq(self, column: &str, value: impl ToString) -> Self {
        self.filter(Filter::eq(column, value))
    }

    /// Add an arbitrary column filter
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a comparison filter without constructing a [`Filter`] by hand
    pub fn filter_op(self, column: &str, operator: FilterOperator, value: impl ToString) -> Self {
        self.filter(Filter::new(column, operator, value))
    }

    /// Window the result: skip `offset` rows, return at most `limit`
    pub fn range(mut self, offset: usize, limit: usize) -> Self {
        self.offset = Some(offset);
        self.limit = Some(limit);
        self
    }

    /// Assemble the HTTP request without sending it
    pub(crate) fn build(self) -> StoreResult<reqwest::Request> {
        let mut request = self.client.request(self.method, &self.url);

        if let Some(columns) = &self.select {
            request = request.query(&[("select", columns.as_str())]);
        }
        for filter in &self.filters {
            request = request.query(&[filter.to_query_pair()]);
        }
        if let Some(offset) = self.offset {
            request = request.query(&[("offset", offset.to_string())]);
        }
        if let Some(limit) = self.limit {
            request = request.query(&[("limit", limit.to_string())]);
        }
        if self.representation {
            request = request.header("Prefer", "return=representation");
        }

        match self.body {
            Some(Ok(body)) => request = request.json(&body),
            Some(Err(e)) => return Err(StoreError::Encode(e)),
            None => {}
        }

        request.build().map_err(StoreError::from)
    }

    /// Execute and return every row
    pub async fn fetch_all<T: DeserializeOwned>(self) -> StoreResult<Vec<T>> {
        let client = self.client.clone();
        let request = self.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "store request");

        let response = client.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::failed(status.as_u16(), &body));
        }

        Ok(response.json::<Vec<T>>().await?)
    }

    /// Execute expecting exactly one row. Zero rows and more than one row
    /// both collapse to `None`; every other failure propagates unchanged.
    pub async fn fetch_optional<T: DeserializeOwned>(self) -> StoreResult<Option<T>> {
        let mut rows = self.fetch_all::<T>().await?;
        if rows.len() == 1 {
            Ok(rows.pop())
        } else {
            Ok(None)
        }
    }

    /// Execute expecting at least one row back (mutations with
    /// representation); the first row is returned.
    pub async fn fetch_one<T: DeserializeOwned>(self) -> StoreResult<T> {
        self.fetch_all::<T>()
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::RowNotReturned)
    }
}
