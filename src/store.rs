//! In-memory URL store
//!
//! Owns every URL record and is the only way to create, read, sample,
//! enumerate and delete them. Records live in an ordered map keyed by id, so
//! iteration order is insertion order.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::{distr::Alphanumeric, seq::IteratorRandom, Rng};
use tokio::sync::RwLock;

use crate::error::{Result, StoreError};
use crate::model::{Lookup, UrlRecord};

/// Length of every generated short code
pub const CODE_LENGTH: usize = 8;

#[derive(Debug)]
struct Inner {
    records: BTreeMap<u64, UrlRecord>,
    /// Last id handed out; ids come from this counter, not from `records.len()`
    last_id: u64,
}

/// Authoritative set of URL records
///
/// Every operation holds the lock for its full duration, so no caller can
/// observe a record that is only partially inserted or removed.
#[derive(Debug)]
pub struct UrlStore {
    inner: RwLock<Inner>,
}

impl UrlStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Stores `full_url` under a fresh id and random short code
    ///
    /// The URL is not validated, and the generated code is not checked
    /// against existing ones.
    pub async fn create(&self, full_url: impl Into<String>) -> UrlRecord {
        let code = generate_code();

        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let record = UrlRecord::new(inner.last_id, full_url.into(), code);
        inner.records.insert(record.id(), record.clone());

        record
    }

    /// Finds a record by id, or else by full URL or short code
    ///
    /// A non-zero id short-circuits the scan entirely. Otherwise the first
    /// record (in insertion order) matching either field is returned.
    pub async fn get(&self, lookup: &Lookup) -> Option<UrlRecord> {
        let inner = self.inner.read().await;

        match lookup.effective_id() {
            Some(id) => inner.records.get(&id).cloned(),
            None => inner
                .records
                .values()
                .find(|record| lookup.matches(record))
                .cloned(),
        }
    }

    /// Picks the id of a uniformly random live record
    pub async fn get_random(&self) -> Result<u64> {
        let inner = self.inner.read().await;

        inner
            .records
            .keys()
            .copied()
            .choose(&mut rand::rng())
            .ok_or(StoreError::EmptyCollection)
    }

    /// Yields every record in insertion order
    ///
    /// The iterator walks a snapshot taken when this is called; later writes
    /// do not show up in it. Call again for a fresh pass.
    pub async fn enumerate(&self) -> std::vec::IntoIter<UrlRecord> {
        let inner = self.inner.read().await;
        let snapshot: Vec<UrlRecord> = inner.records.values().cloned().collect();
        snapshot.into_iter()
    }

    /// Permanently removes the record with the given id
    pub async fn delete(&self, id: u64) -> Result<()> {
        let mut inner = self.inner.write().await;

        match inner.records.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.records.is_empty()
    }
}

impl Default for UrlStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws a random alphanumeric code of [`CODE_LENGTH`] characters
fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Application state shared across all request handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<UrlStore>,
}

impl AppState {
    pub fn new(store: UrlStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = UrlStore::new();

        let first = store.create("https://a.example").await;
        let second = store.create("https://b.example").await;

        assert_eq!(first.id(), 1);
        assert_eq!(second.id(), 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = UrlStore::new();

        store.create("https://a.example").await;
        store.create("https://b.example").await;
        store.delete(1).await.unwrap();

        let third = store.create("https://c.example").await;
        assert_eq!(third.id(), 3);
        assert!(store.get(&Lookup::by_id(2)).await.is_some());
    }

    #[tokio::test]
    async fn zero_id_falls_back_to_scan() {
        let store = UrlStore::new();
        let record = store.create("https://a.example").await;

        let lookup = Lookup {
            id: Some(0),
            full_url: None,
            short_url_code: Some(record.short_url_code().to_string()),
        };

        assert_eq!(store.get(&lookup).await, Some(record));
    }

    #[tokio::test]
    async fn id_takes_precedence_over_other_selectors() {
        let store = UrlStore::new();
        let first = store.create("https://a.example").await;
        let second = store.create("https://b.example").await;

        let lookup = Lookup {
            id: Some(second.id()),
            full_url: Some(first.full_url().to_string()),
            short_url_code: Some(first.short_url_code().to_string()),
        };

        assert_eq!(store.get(&lookup).await, Some(second));
    }

    #[tokio::test]
    async fn empty_lookup_matches_nothing() {
        let store = UrlStore::new();
        store.create("https://a.example").await;

        assert!(store.get(&Lookup::default()).await.is_none());
    }

    #[test]
    fn generated_codes_are_alphanumeric() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
