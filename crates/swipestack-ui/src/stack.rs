//! Fixed-size carousel of items with a cyclic front index.

use std::collections::HashSet;
use std::rc::Rc;

use swipestack_core::{ReadOnlyValue, SharedValue};
use swipestack_ui_graphics::Color;

use crate::error::DeckError;

pub type ItemId = u64;

/// Opaque handle to card imagery; resolved by whoever renders the card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub label: String,
    pub color: Color,
    pub image: ImageRef,
}

impl Item {
    pub fn new(id: ItemId, label: impl Into<String>, color: Color, image: ImageRef) -> Self {
        Self {
            id,
            label: label.into(),
            color,
            image,
        }
    }
}

/// Cyclic distance from `front` to `index` in a stack of `total` cards.
pub fn relative_position(index: usize, front: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (index % total + total - front % total) % total
}

/// Items plus the front index. Cloning shares the front index.
#[derive(Clone)]
pub struct CardStack {
    items: Rc<[Item]>,
    front: SharedValue<usize>,
}

impl CardStack {
    pub fn new(items: Vec<Item>) -> Result<Self, DeckError> {
        if items.is_empty() {
            return Err(DeckError::EmptyStack);
        }
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(duplicate) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(DeckError::DuplicateItemId(duplicate.id));
        }
        Ok(Self {
            items: items.into(),
            front: SharedValue::new(0),
        })
    }

    pub fn total_cards(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn front_index(&self) -> usize {
        self.front.get()
    }

    pub fn front_item(&self) -> &Item {
        &self.items[self.front_index()]
    }

    /// Observable front index; every advance is a write, even on a one-card stack.
    pub fn front_index_value(&self) -> ReadOnlyValue<usize> {
        self.front.read_only()
    }

    pub fn relative_position(&self, index: usize) -> usize {
        relative_position(index, self.front_index(), self.total_cards())
    }

    pub fn index_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Move the front to the next item, wrapping around. Nothing else changes.
    pub fn advance(&self) {
        let total = self.total_cards();
        let next = self.front.update(|front| {
            *front = (*front + 1) % total;
            *front
        });
        log::debug!("stack: front -> {next} of {total}");
    }
}

impl std::fmt::Debug for CardStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardStack")
            .field("total_cards", &self.total_cards())
            .field("front", &self.front_index())
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/stack_tests.rs"]
mod tests;
