//! In-memory item collection with a monotonic id counter.
//!
//! # Design
//! `ItemStore` owns an insertion-ordered `Vec<Item>` and the next id to hand
//! out. Lookups scan linearly for the first matching id, which is what the
//! HTTP contract describes: ids are unique for created items, but an update
//! may store whatever id its body carries, so duplicates are possible and the
//! first one wins.
//!
//! The store does no locking. Callers that share it across tasks wrap it in a
//! lock so each operation's scan-and-mutate is atomic.

use crate::error::StoreError;
use crate::types::{Item, ItemId};

const FIRST_ID: ItemId = 1;

#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: ItemId,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Empty collection, counter at 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: FIRST_ID,
        }
    }

    /// All items in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> ItemId {
        self.next_id
    }

    /// Append a new item. The payload's `id` is ignored and replaced by the
    /// counter, which then advances. Ids are never reused.
    pub fn create(&mut self, payload: Item) -> Item {
        let item = Item {
            id: self.next_id,
            name: payload.name,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    pub fn get(&self, id: ItemId) -> Result<&Item, StoreError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Replace the first item matching `id` with `replacement`, verbatim.
    ///
    /// The stored record takes the replacement's own `id`, which need not
    /// equal `id`.
    pub fn update(&mut self, id: ItemId, replacement: Item) -> Result<&Item, StoreError> {
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = replacement;
        Ok(&*slot)
    }

    /// Remove the first item matching `id`, keeping the order of the rest.
    pub fn delete(&mut self, id: ItemId) -> Result<Item, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        Ok(self.items.remove(index))
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Item {
        Item::new(0, name)
    }

    #[test]
    fn new_store_is_empty_with_counter_at_one() {
        let store = ItemStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let mut store = ItemStore::new();
        assert_eq!(store.create(named("A")), Item::new(1, "A"));
        assert_eq!(store.create(named("B")), Item::new(2, "B"));
        assert_eq!(store.list(), &[Item::new(1, "A"), Item::new(2, "B")]);
    }

    #[test]
    fn create_ignores_payload_id() {
        let mut store = ItemStore::new();
        let created = store.create(Item::new(42, "x"));
        assert_eq!(created.id, 1);
        assert!(store.get(42).is_err());
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = ItemStore::new();
        let mut seen = Vec::new();
        for round in 0..5 {
            let created = store.create(named(&format!("item-{round}")));
            if let Some(last) = seen.last() {
                assert!(created.id > *last);
            }
            seen.push(created.id);
            store.delete(created.id).unwrap();
        }
        assert!(store.is_empty());
        assert_eq!(store.next_id(), 6);
    }

    #[test]
    fn get_returns_matching_item() {
        let mut store = ItemStore::new();
        store.create(named("A"));
        store.create(named("B"));
        assert_eq!(store.get(2).unwrap(), &Item::new(2, "B"));
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = ItemStore::new();
        assert_eq!(store.get(9999), Err(StoreError::NotFound(9999)));
    }

    #[test]
    fn update_replaces_record_verbatim() {
        let mut store = ItemStore::new();
        store.create(named("A"));
        store.create(named("B"));

        let updated = store.update(1, Item::new(0, "bar")).unwrap().clone();
        assert_eq!(updated, Item::new(0, "bar"));
        assert_eq!(store.list(), &[Item::new(0, "bar"), Item::new(2, "B")]);
        assert!(store.get(1).is_err());
        assert_eq!(store.get(0).unwrap().name, "bar");
    }

    #[test]
    fn update_unknown_id_leaves_store_untouched() {
        let mut store = ItemStore::new();
        store.create(named("A"));
        let err = store.update(7, named("nope")).unwrap_err();
        assert_eq!(err, StoreError::NotFound(7));
        assert_eq!(store.list(), &[Item::new(1, "A")]);
    }

    #[test]
    fn update_hits_first_duplicate_only() {
        let mut store = ItemStore::new();
        store.create(named("A"));
        store.create(named("B"));
        store.update(2, Item::new(1, "B2")).unwrap();

        store.update(1, Item::new(1, "first")).unwrap();
        assert_eq!(store.list(), &[Item::new(1, "first"), Item::new(1, "B2")]);
    }

    #[test]
    fn delete_preserves_order_of_remaining() {
        let mut store = ItemStore::new();
        for name in ["A", "B", "C"] {
            store.create(named(name));
        }
        assert_eq!(store.delete(2).unwrap(), Item::new(2, "B"));
        assert_eq!(store.list(), &[Item::new(1, "A"), Item::new(3, "C")]);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let mut store = ItemStore::new();
        store.create(named("A"));
        assert_eq!(store.delete(5), Err(StoreError::NotFound(5)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(StoreError::NotFound(12).to_string(), "item 12 not found");
    }
}
