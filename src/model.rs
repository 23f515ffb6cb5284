//! Data models for the URL shortener application
//!
//! This module defines the stored URL record and the query structures the
//! HTTP layer deserializes before calling into the store.

use serde::{Deserialize, Serialize};

/// Represents a URL record held by the store
///
/// Records are write-once: the store assigns every field at creation time and
/// hands out clones, so there are no setters.
///
/// # Example
/// ```json
/// {
///   "id": 1,
///   "full_url": "https://example.com/very/long/url",
///   "short_url_code": "aZ3kP9qX"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    /// Sequential identifier, starts at 1 and is never reused
    id: u64,

    /// The destination URL, stored exactly as submitted
    full_url: String,

    /// Random alphanumeric redirection code
    short_url_code: String,
}

impl UrlRecord {
    pub(crate) fn new(id: u64, full_url: String, short_url_code: String) -> Self {
        Self {
            id,
            full_url,
            short_url_code,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn full_url(&self) -> &str {
        &self.full_url
    }

    pub fn short_url_code(&self) -> &str {
        &self.short_url_code
    }
}

/// Selector for [`UrlStore::get`](crate::store::UrlStore::get)
///
/// A non-zero `id` wins over everything else. Without one, the store scans for
/// the first record whose `full_url` or `short_url_code` matches.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Lookup {
    pub id: Option<u64>,
    pub full_url: Option<String>,
    pub short_url_code: Option<String>,
}

impl Lookup {
    pub fn by_id(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn by_full_url(full_url: impl Into<String>) -> Self {
        Self {
            full_url: Some(full_url.into()),
            ..Self::default()
        }
    }

    pub fn by_code(short_url_code: impl Into<String>) -> Self {
        Self {
            short_url_code: Some(short_url_code.into()),
            ..Self::default()
        }
    }

    /// Returns the id selector, treating `0` the same as no id at all
    pub(crate) fn effective_id(&self) -> Option<u64> {
        self.id.filter(|id| *id != 0)
    }

    pub(crate) fn matches(&self, record: &UrlRecord) -> bool {
        self.full_url.as_deref() == Some(record.full_url())
            || self.short_url_code.as_deref() == Some(record.short_url_code())
    }
}

/// Query parameters for creating a new short URL
///
/// Query string: `?url=https://example.com/very/long/url`
#[derive(Deserialize, Debug)]
pub struct CreateParams {
    /// The URL to be shortened, accepted without validation
    pub url: String,
}
