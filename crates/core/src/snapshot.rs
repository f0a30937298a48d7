//! Serializable view of a running game, for dumps and assertions.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::scoring::Session;
use crate::shelf::Shelf;
use crate::slot::Slot;
use crate::types::SlotRole;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub role: String,
    pub item: Option<u32>,
    pub tag: Option<String>,
}

impl From<&Slot> for SlotSnapshot {
    fn from(slot: &Slot) -> Self {
        Self {
            role: slot.role().as_str().to_string(),
            item: slot.item_id().map(|id| id.0),
            tag: slot.item_tag().map(|tag| tag.as_str().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfSnapshot {
    pub id: usize,
    pub slots: Vec<SlotSnapshot>,
}

impl From<&Shelf> for ShelfSnapshot {
    fn from(shelf: &Shelf) -> Self {
        Self {
            id: shelf.id().0,
            slots: shelf.slots().iter().map(SlotSnapshot::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub level: u8,
    pub score: u32,
    pub combo_multiplier: f32,
    pub match_counter: u32,
    pub shelves: Vec<ShelfSnapshot>,
}

impl BoardSnapshot {
    pub fn capture(board: &Board, session: &Session) -> Self {
        Self {
            level: session.level(),
            score: session.score(),
            combo_multiplier: session.combo_multiplier(),
            match_counter: session.match_counter(),
            shelves: board.shelves().iter().map(ShelfSnapshot::from).collect(),
        }
    }

    /// Items still on the board
    pub fn item_count(&self) -> usize {
        self.shelves
            .iter()
            .flat_map(|shelf| &shelf.slots)
            .filter(|slot| slot.item.is_some())
            .count()
    }

    /// Occupied slots of the given role
    pub fn occupied(&self, role: SlotRole) -> usize {
        self.shelves
            .iter()
            .flat_map(|shelf| &shelf.slots)
            .filter(|slot| slot.role == role.as_str() && slot.item.is_some())
            .count()
    }
}
