//! Entity stores: the persistence seam behind every resource handler.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entity::Entity;

/// Key-value style persistence for one entity type.
///
/// `save` is insert-or-replace keyed by the record's key; `list` returns
/// records in insertion order. Conflicting writes are serialized by the
/// implementation and resolve last-write-wins.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    async fn list(&self) -> Vec<E>;

    /// Exact key equality; no partial or case-insensitive match.
    async fn get(&self, key: &E::Key) -> Option<E>;

    /// Insert or replace, returning the persisted record with its key.
    async fn save(&self, record: E) -> E;

    /// Remove the record with `key`. False when no such record exists.
    async fn delete(&self, key: &E::Key) -> bool;
}

/// How a record obtains its identity on first insert.
pub trait KeyStrategy<E: Entity>: Send + Sync {
    /// Called once before a record is appended. `seq` is the store's next
    /// sequence value; natural-key strategies ignore it.
    fn prepare_insert(&self, record: &mut E, seq: i64);
}

/// The record keeps whatever key it was created with.
pub struct NaturalKey;

impl<E: Entity> KeyStrategy<E> for NaturalKey {
    fn prepare_insert(&self, _record: &mut E, _seq: i64) {}
}

/// Numeric keys minted from the store sequence. A record arriving with
/// id 0 is unassigned and receives the next sequence value; a record
/// arriving with an explicit id keeps it.
pub struct SurrogateKey;

impl<E> KeyStrategy<E> for SurrogateKey
where
    E: Entity<Key = i64>,
{
    fn prepare_insert(&self, record: &mut E, seq: i64) {
        if record.key() == 0 {
            record.set_key(seq);
        }
    }
}

/// In-memory, insertion-ordered store. The write lock serializes
/// conflicting saves; the sequence starts at 1 and never reuses a value.
pub struct MemoryStore<E: Entity> {
    records: RwLock<Vec<E>>,
    seq: AtomicI64,
    keys: Box<dyn KeyStrategy<E>>,
}

impl<E: Entity> MemoryStore<E> {
    pub fn new(keys: impl KeyStrategy<E> + 'static) -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            seq: AtomicI64::new(1),
            keys: Box::new(keys),
        }
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for MemoryStore<E> {
    async fn list(&self) -> Vec<E> {
        self.records.read().await.clone()
    }

    async fn get(&self, key: &E::Key) -> Option<E> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.key() == *key)
            .cloned()
    }

    async fn save(&self, mut record: E) -> E {
        let mut records = self.records.write().await;
        if let Some(existing) = records.iter_mut().find(|r| r.key() == record.key()) {
            *existing = record.clone();
            tracing::debug!(entity = E::TYPE_NAME, key = %record.key(), "replace");
            return record;
        }
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        self.keys.prepare_insert(&mut record, seq);
        tracing::debug!(entity = E::TYPE_NAME, key = %record.key(), "insert");
        records.push(record.clone());
        record
    }

    async fn delete(&self, key: &E::Key) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.key() != *key);
        let removed = records.len() != before;
        if removed {
            tracing::debug!(entity = E::TYPE_NAME, key = %key, "delete");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{MenuItemReview, Organization};

    fn org(code: &str, short: &str) -> Organization {
        Organization {
            org_code: code.into(),
            short_label: short.into(),
            long_label: format!("{} CLUB", short),
            inactive: false,
        }
    }

    fn review(id: i64, stars: i32) -> MenuItemReview {
        MenuItemReview {
            id,
            item_id: 11,
            reviewer_email: "reviewer@example.org".into(),
            stars,
            date_reviewed: "2022-01-03T00:00:00".parse().unwrap(),
            comments: "fine".into(),
        }
    }

    #[tokio::test]
    async fn natural_key_records_keep_their_key() {
        let store = MemoryStore::new(NaturalKey);
        let saved = store.save(org("LC", "LACROSSE")).await;
        assert_eq!(saved.org_code, "LC");
        assert_eq!(store.get(&"LC".to_string()).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn surrogate_keys_are_minted_from_one() {
        let store = MemoryStore::new(SurrogateKey);
        let first = store.save(review(0, 3)).await;
        let second = store.save(review(0, 5)).await;
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn explicitly_keyed_records_keep_their_id() {
        let store = MemoryStore::new(SurrogateKey);
        let saved = store.save(review(15, 4)).await;
        assert_eq!(saved.id, 15);
        assert!(store.get(&15).await.is_some());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = MemoryStore::new(NaturalKey);
        store.save(org("ZZZ", "LAST-ALPHABETICALLY")).await;
        store.save(org("AAA", "FIRST-ALPHABETICALLY")).await;
        let all = store.list().await;
        assert_eq!(all[0].org_code, "ZZZ");
        assert_eq!(all[1].org_code, "AAA");
    }

    #[tokio::test]
    async fn save_replaces_in_place_without_moving_the_record() {
        let store = MemoryStore::new(NaturalKey);
        store.save(org("LC", "LACROSSE")).await;
        store.save(org("SC", "SOCCER")).await;
        store.save(org("LC", "LAX")).await;

        let all = store.list().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].org_code, "LC");
        assert_eq!(all[0].short_label, "LAX");
        assert_eq!(all[1].org_code, "SC");
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_record() {
        let store = MemoryStore::new(SurrogateKey);
        store.save(review(0, 1)).await;
        store.save(review(0, 2)).await;
        assert!(store.delete(&1).await);
        assert!(store.get(&1).await.is_none());
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn delete_on_a_missing_key_reports_false() {
        let store: MemoryStore<MenuItemReview> = MemoryStore::new(SurrogateKey);
        assert!(!store.delete(&7).await);
    }

    #[tokio::test]
    async fn lookups_use_exact_key_equality() {
        let store = MemoryStore::new(NaturalKey);
        store.save(org("LC", "LACROSSE")).await;
        assert!(store.get(&"lc".to_string()).await.is_none());
        assert!(store.get(&"L".to_string()).await.is_none());
    }
}
