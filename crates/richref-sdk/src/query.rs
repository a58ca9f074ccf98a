//! Persisted-query requests.
//!
//! Builds the request path for a persisted GraphQL query:
//! `<endpoint>/<config>/<query>;name=value;...`. Executing the request is
//! the data-fetch collaborator's job.

use url::form_urlencoded;

/// Persisted query returning a single event by slug.
pub const EVENT_BY_SLUG: &str = "wknd-shared/event-by-slug";

/// Persisted query returning a page of events.
pub const EVENTS_PAGINATED: &str = "wknd-shared/events-paginated";

/// Default persisted-query endpoint.
pub const DEFAULT_ENDPOINT: &str = "/graphql/execute.json";

/// A persisted query with its variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryRequest {
    query: String,
    params: Vec<(String, String)>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: Vec::new(),
        }
    }

    /// Add a query variable. Variables keep insertion order.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// The event-by-slug query.
    pub fn event_by_slug(slug: &str) -> Self {
        Self::new(EVENT_BY_SLUG).param("slug", slug)
    }

    /// The paginated events query, `count` items per page.
    pub fn events_paginated(count: usize) -> Self {
        Self::new(EVENTS_PAGINATED).param("count", count)
    }

    /// The persisted query name.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Query variables in insertion order.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Request path under `endpoint`, with percent-encoded variables.
    pub fn path(&self, endpoint: &str) -> String {
        let mut path = format!("{}/{}", endpoint.trim_end_matches('/'), self.query);
        for (name, value) in &self.params {
            path.push(';');
            path.push_str(&encode(name));
            path.push('=');
            path.push_str(&encode(value));
        }
        path
    }
}

fn encode(s: &str) -> String {
    // Form encoding turns spaces into '+', which a path segment keeps literally.
    form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
