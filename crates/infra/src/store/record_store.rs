use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use larder_core::Entity;

/// Record store operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock; contents may be inconsistent.
    #[error("record store lock poisoned")]
    Poisoned,
}

/// Get/save persistence interface for one kind of record.
///
/// `save` is an upsert keyed by `Entity::id`. Each call is independent: there
/// is no transaction spanning a read and a later write.
pub trait RecordStore<E: Entity>: Send + Sync {
    fn get(&self, id: &E::Id) -> Result<Option<E>, StoreError>;
    fn save(&self, record: E) -> Result<(), StoreError>;
    /// All records, in first-insertion order.
    fn list(&self) -> Result<Vec<E>, StoreError>;
    /// Remove and return a record, if present.
    fn remove(&self, id: &E::Id) -> Result<Option<E>, StoreError>;
}

impl<E, S> RecordStore<E> for Arc<S>
where
    E: Entity,
    S: RecordStore<E> + ?Sized,
{
    fn get(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        (**self).get(id)
    }

    fn save(&self, record: E) -> Result<(), StoreError> {
        (**self).save(record)
    }

    fn list(&self) -> Result<Vec<E>, StoreError> {
        (**self).list()
    }

    fn remove(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        (**self).remove(id)
    }
}

#[derive(Debug)]
struct Slot<E> {
    seq: u64,
    record: E,
}

#[derive(Debug)]
struct Records<K, E> {
    next_seq: u64,
    by_id: HashMap<K, Slot<E>>,
}

/// In-memory record store for tests/dev.
#[derive(Debug)]
pub struct InMemoryRecordStore<E: Entity> {
    inner: RwLock<Records<E::Id, E>>,
}

impl<E: Entity> InMemoryRecordStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Records {
                next_seq: 0,
                by_id: HashMap::new(),
            }),
        }
    }
}

impl<E: Entity> Default for InMemoryRecordStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> RecordStore<E> for InMemoryRecordStore<E>
where
    E: Entity + Clone + Send + Sync + 'static,
    E::Id: Send + Sync + 'static,
{
    fn get(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(map.by_id.get(id).map(|slot| slot.record.clone()))
    }

    fn save(&self, record: E) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let id = *record.id();
        if let Some(slot) = map.by_id.get_mut(&id) {
            slot.record = record;
            return Ok(());
        }

        let seq = map.next_seq;
        map.next_seq += 1;
        map.by_id.insert(id, Slot { seq, record });
        Ok(())
    }

    fn list(&self) -> Result<Vec<E>, StoreError> {
        let map = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let mut slots: Vec<&Slot<E>> = map.by_id.values().collect();
        slots.sort_by_key(|slot| slot.seq);
        Ok(slots.into_iter().map(|slot| slot.record.clone()).collect())
    }

    fn remove(&self, id: &E::Id) -> Result<Option<E>, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(map.by_id.remove(id).map(|slot| slot.record))
    }
}
