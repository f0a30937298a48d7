//! Board module - the ordered list of shelves
//!
//! A board for level `n` holds `3 * n` shelves. Slots are addressed by
//! [`SlotId`] (shelf index plus slot index), so the owning shelf of any slot
//! is known without searching.

use tracing::debug;

use crate::error::{BoardError, Result};
use crate::presenter::Presenter;
use crate::shelf::Shelf;
use crate::slot::Slot;
use crate::types::{ItemId, ShelfId, SlotId, SHELVES_PER_LEVEL};

#[derive(Debug, Default)]
pub struct Board {
    shelves: Vec<Shelf>,
}

impl Board {
    /// Create a board with no shelves
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the `3 * level` empty shelves for a level
    pub fn generate(level: u8, cascaded_color_multiplier: f32, presenter: &mut dyn Presenter) -> Result<Self> {
        let count = SHELVES_PER_LEVEL * usize::from(level);
        let shelves = (0..count)
            .map(|index| Shelf::empty(ShelfId(index), cascaded_color_multiplier, &mut *presenter))
            .collect::<Result<Vec<_>>>()?;
        debug!(level, shelves = shelves.len(), "generated board");
        Ok(Self { shelves })
    }

    pub fn len(&self) -> usize {
        self.shelves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shelves.is_empty()
    }

    pub fn shelves(&self) -> &[Shelf] {
        &self.shelves
    }

    pub fn shelf(&self, id: ShelfId) -> Option<&Shelf> {
        self.shelves.get(id.0)
    }

    pub fn shelf_mut(&mut self, id: ShelfId) -> Option<&mut Shelf> {
        self.shelves.get_mut(id.0)
    }

    /// Shelf lookup that reports a missing shelf as an error
    pub fn require_shelf(&self, id: ShelfId) -> Result<&Shelf> {
        self.shelf(id).ok_or(BoardError::NoShelf { shelf: id })
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.shelf(id.shelf)?.slot(id.index)
    }

    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut Slot> {
        self.shelf_mut(id.shelf)?.slot_mut(id.index)
    }

    /// Every empty slot across every shelf, in board order
    pub fn empty_slots(&self) -> Vec<SlotId> {
        self.shelves
            .iter()
            .flat_map(|shelf| {
                shelf
                    .slots()
                    .iter()
                    .enumerate()
                    .filter(|(_, slot)| slot.is_empty())
                    .map(move |(index, _)| shelf.slot_id(index))
            })
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.shelves.iter().map(Shelf::item_count).sum()
    }

    /// Where `item` currently sits
    pub fn find_item(&self, item: ItemId) -> Option<SlotId> {
        self.shelves.iter().find_map(|shelf| {
            shelf
                .slots()
                .iter()
                .position(|slot| slot.item_id() == Some(item))
                .map(|index| shelf.slot_id(index))
        })
    }

    /// Destroy every item on the board; shelves stay
    pub fn clear(&mut self, presenter: &mut dyn Presenter) {
        for shelf in &mut self.shelves {
            shelf.clear(presenter);
        }
    }
}
