//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the board engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, presentation layers, tooling).
//!
//! # Board Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SLOTS_PER_SHELF` | 6 | Slots owned by every shelf |
//! | `PRIMARY_SLOTS` | 3 | Visible, interactive slots (indices 0-2) |
//! | `CASCADED_SLOTS` | 3 | Reserve slots (indices 3-5) |
//! | `MATCH_LENGTH` | 3 | Width of the match window |
//! | `SHELVES_PER_LEVEL` | 3 | Shelves generated per level |
//! | `ITEMS_PER_LEVEL` | 12 | Templates consumed per level |
//! | `MATCHES_PER_LEVEL` | 4 | Matches needed to complete a level |
//! | `MAX_LEVEL` | 5 | Level cap; completing it wraps back to 1 |
//!
//! # Examples
//!
//! ```
//! use shelf_match_types::{next_level, ItemTag, SlotRole, SlotId, ShelfId};
//!
//! assert_eq!(SlotRole::for_index(0), SlotRole::Primary);
//! assert_eq!(SlotRole::for_index(4), SlotRole::Cascaded);
//!
//! let tag = ItemTag::new("apple");
//! assert_eq!(tag.as_str(), "apple");
//!
//! let slot = SlotId::new(ShelfId(2), 5);
//! assert_eq!(slot.shelf, ShelfId(2));
//!
//! assert_eq!(next_level(5), 1);
//! ```

use std::fmt;

/// Slots owned by every shelf
pub const SLOTS_PER_SHELF: usize = 6;

/// Primary (visible, interactive) slots per shelf
pub const PRIMARY_SLOTS: usize = 3;

/// Cascaded (reserve) slots per shelf
pub const CASCADED_SLOTS: usize = SLOTS_PER_SHELF - PRIMARY_SLOTS;

/// Number of contiguous primary slots that must share a tag to match
pub const MATCH_LENGTH: usize = 3;

/// Shelves generated per level (board size is `SHELVES_PER_LEVEL * level`)
pub const SHELVES_PER_LEVEL: usize = 3;

/// Item templates consumed per level
pub const ITEMS_PER_LEVEL: usize = 12;

/// Matches required per level before it is complete
pub const MATCHES_PER_LEVEL: u32 = 4;

/// Highest level; completing it wraps back to level 1
pub const MAX_LEVEL: u8 = 5;

/// Working-set items placed one per shelf into the first three shelves
pub const SEED_SHELVES: usize = 3;

/// Working-set items (indices 3 and 4) paired onto shelf 0
pub const SEED_PAIR: [usize; 2] = [3, 4];

/// Default points awarded per cleared match (before the combo multiplier)
pub const DEFAULT_SCORE_PER_MATCH: u32 = 10;

/// Default combo window in milliseconds
pub const DEFAULT_COMBO_DURATION_MS: u64 = 5000;

/// Default color multiplier applied to items resting in cascaded slots
pub const DEFAULT_CASCADED_COLOR_MULTIPLIER: f32 = 0.6;

/// Default RNG seed
pub const DEFAULT_SEED: u32 = 1;

/// Advance a level, wrapping from [`MAX_LEVEL`] back to 1.
pub fn next_level(level: u8) -> u8 {
    if level >= MAX_LEVEL {
        1
    } else {
        level + 1
    }
}

/// Role of a slot inside its shelf
///
/// - **Primary**: player-visible, interactive, eligible for match detection
/// - **Cascaded**: reserve position feeding promoted items into primary slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotRole {
    #[default]
    Primary,
    Cascaded,
}

impl SlotRole {
    /// Role assigned to the slot at `index` within a shelf
    pub fn for_index(index: usize) -> Self {
        if index < PRIMARY_SLOTS {
            SlotRole::Primary
        } else {
            SlotRole::Cascaded
        }
    }

    /// Items in primary slots can be dragged; cascaded ones cannot
    pub fn is_interactive(&self) -> bool {
        matches!(self, SlotRole::Primary)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotRole::Primary => "primary",
            SlotRole::Cascaded => "cascaded",
        }
    }
}

/// Match category of an item
///
/// Two items match when their tags are equal; identity is tracked separately
/// by [`ItemId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemTag(String);

impl ItemTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty tag never takes part in a match
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ItemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Unique identity of an instantiated item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Handle to the presentation-side visuals of an item
///
/// Resolved once when the item is created; the engine hands it back to the
/// presenter whenever the item's role context changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualBinding(pub u32);

/// Index of a shelf in board order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShelfId(pub usize);

impl fmt::Display for ShelfId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shelf#{}", self.0)
    }
}

/// Address of a slot: owning shelf plus index 0..6 within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId {
    pub shelf: ShelfId,
    pub index: usize,
}

impl SlotId {
    pub fn new(shelf: ShelfId, index: usize) -> Self {
        Self { shelf, index }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/slot#{}", self.shelf, self.index)
    }
}

/// Events carried by the board's event bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// An item became the occupant of a slot through a move or promotion
    ItemPlaced(SlotId),
    /// A shelf cleared at least one match window
    MatchCleared(ShelfId),
}

impl BoardEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            BoardEvent::ItemPlaced(_) => EventKind::ItemPlaced,
            BoardEvent::MatchCleared(_) => EventKind::MatchCleared,
        }
    }
}

/// Discriminant used to subscribe to one family of [`BoardEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ItemPlaced,
    MatchCleared,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::ItemPlaced => "item_placed",
            EventKind::MatchCleared => "match_cleared",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_constants() {
        assert_eq!(SLOTS_PER_SHELF, 6);
        assert_eq!(PRIMARY_SLOTS + CASCADED_SLOTS, SLOTS_PER_SHELF);
        assert!(MATCH_LENGTH <= PRIMARY_SLOTS);
        assert_eq!(ITEMS_PER_LEVEL, 12);
    }

    #[test]
    fn test_roles_by_index() {
        let roles: Vec<SlotRole> = (0..SLOTS_PER_SHELF).map(SlotRole::for_index).collect();
        assert_eq!(
            roles,
            vec![
                SlotRole::Primary,
                SlotRole::Primary,
                SlotRole::Primary,
                SlotRole::Cascaded,
                SlotRole::Cascaded,
                SlotRole::Cascaded,
            ]
        );
        assert!(SlotRole::Primary.is_interactive());
        assert!(!SlotRole::Cascaded.is_interactive());
    }

    #[test]
    fn test_next_level_wraps() {
        assert_eq!(next_level(1), 2);
        assert_eq!(next_level(4), 5);
        assert_eq!(next_level(5), 1);
    }

    #[test]
    fn test_event_kind() {
        let slot = SlotId::new(ShelfId(0), 1);
        assert_eq!(BoardEvent::ItemPlaced(slot).kind(), EventKind::ItemPlaced);
        assert_eq!(
            BoardEvent::MatchCleared(ShelfId(3)).kind(),
            EventKind::MatchCleared
        );
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(SlotId::new(ShelfId(1), 4).to_string(), "shelf#1/slot#4");
        assert_eq!(ItemId(7).to_string(), "item#7");
        assert!(ItemTag::new("").is_blank());
    }
}
