//! The authoritative in-memory collection of supply items.

use std::collections::BTreeSet;

use tracing::debug;

use medsupply_model::{Result, SupplyError, SupplyId, SupplyItem, SupplyItemInput};

/// Owns the supply collection and assigns ids.
///
/// Items are kept in insertion order. Ids only move forward: the next id is
/// one past the highest id this store has ever held, so a deleted id is
/// never handed out again. Once `u32::MAX` has been assigned the store is
/// exhausted and `next_id` is `None`.
#[derive(Debug, Clone)]
pub struct SupplyStore {
    items: Vec<SupplyItem>,
    next_id: Option<SupplyId>,
}

impl Default for SupplyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SupplyStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: Some(SupplyId::FIRST),
        }
    }

    /// Rebuild a store from a previously listed collection.
    ///
    /// # Errors
    ///
    /// See [`from_parts`](Self::from_parts).
    pub fn from_items(items: Vec<SupplyItem>) -> Result<Self> {
        Self::from_parts(items, Some(SupplyId::FIRST))
    }

    /// Rebuild a store from a collection and a saved next-id mark.
    ///
    /// The effective next id is the larger of `next_id` and one past the
    /// highest id in `items`. A `None` mark, or an item holding `u32::MAX`,
    /// leaves the store exhausted.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` when two items share an id, or the first
    /// record invariant an item breaks (see [`SupplyItem::check`]).
    pub fn from_parts(items: Vec<SupplyItem>, next_id: Option<SupplyId>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(SupplyError::DuplicateId { id: item.id });
            }
            item.check()?;
        }
        let next_id = match (next_id, seen.last()) {
            (Some(mark), Some(max)) => max.next().map(|past_max| mark.max(past_max)),
            (mark, _) => mark,
        };
        Ok(Self { items, next_id })
    }

    /// Append a new item with a freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns the first record invariant `candidate` breaks (see
    /// [`SupplyItemInput::check`]), or `IdsExhausted` once every `u32` id
    /// has been used. The store is unchanged on error.
    pub fn add(&mut self, candidate: SupplyItemInput) -> Result<SupplyItem> {
        candidate.check()?;
        let id = self.next_id.ok_or(SupplyError::IdsExhausted)?;
        self.next_id = id.next();
        let item = SupplyItem::new(id, candidate);
        debug!(id = %item.id, status = %item.status(), "supply item added");
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replace every field of the item with `id` except the id itself.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no item has `id`, or the first record
    /// invariant `fields` breaks; the item is unchanged on error.
    pub fn update(&mut self, id: SupplyId, fields: SupplyItemInput) -> Result<SupplyItem> {
        fields.check()?;
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(SupplyError::NotFound { id })?;
        item.apply(fields);
        debug!(id = %item.id, status = %item.status(), "supply item updated");
        Ok(item.clone())
    }

    /// Remove the item with `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no item has `id`; the collection is unchanged.
    pub fn remove(&mut self, id: SupplyId) -> Result<SupplyItem> {
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(SupplyError::NotFound { id })?;
        let removed = self.items.remove(index);
        debug!(id = %removed.id, "supply item removed");
        Ok(removed)
    }

    /// Items in insertion order.
    pub fn list(&self) -> &[SupplyItem] {
        &self.items
    }

    pub fn get(&self, id: SupplyId) -> Option<&SupplyItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: SupplyId) -> bool {
        self.get(id).is_some()
    }

    /// The id the next [`add`](Self::add) will assign, `None` once exhausted.
    pub fn next_id(&self) -> Option<SupplyId> {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take the collection out of the store.
    pub fn into_items(self) -> Vec<SupplyItem> {
        self.items
    }
}
