//! Greedy auto-player used by the headless runner.
//!
//! Moves go through [`Game::move_item`], the same entry point a drag layer
//! uses. Each turn the player prefers a move that completes a primary row,
//! then one that joins two lone items of the same tag. It never breaks up a
//! pair, so every move either clears a match or adds a pair, and play stops
//! when neither kind of move is left.

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{required_templates, Board, Game, ItemTemplate, Presenter, Shelf};
use crate::types::{ItemTag, SlotId, SlotRole, VisualBinding, MATCH_LENGTH};

/// Clock advance between two moves
pub const MOVE_INTERVAL_MS: u64 = 1500;

/// Hard stop for a single level
pub const MAX_MOVES_PER_LEVEL: u32 = 10_000;

const TAGS: [&str; 20] = [
    "apple", "banana", "cherry", "grape", "lemon", "lime", "mango", "melon", "orange", "peach",
    "pear", "plum", "kiwi", "fig", "date", "guava", "papaya", "apricot", "coconut", "berry",
];

/// Templates for `level`: consecutive triples of one tag, in tag order.
pub fn template_pool(level: u8) -> Vec<ItemTemplate> {
    (0..required_templates(level))
        .map(|i| {
            let group = i / MATCH_LENGTH;
            ItemTemplate::new(TAGS[group % TAGS.len()]).with_visuals(VisualBinding(group as u32))
        })
        .collect()
}

/// Outcome of one auto-played level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    pub level: u8,
    pub completed: bool,
    pub moves: u32,
    pub score: u32,
    pub matches: u32,
    pub items_left: usize,
}

/// Next move worth making, if any
pub fn next_move(board: &Board) -> Option<(SlotId, SlotId)> {
    completing_move(board).or_else(|| pairing_move(board))
}

/// Play until the level completes, no move is left, or `max_moves` is hit
pub fn play_level<P: Presenter>(game: &mut Game<P>, max_moves: u32) -> LevelSummary {
    let mut moves = 0;
    while !game.is_level_complete() && moves < max_moves {
        let Some((from, to)) = next_move(game.board()) else {
            debug!(moves, "no productive move left");
            break;
        };
        game.tick(MOVE_INTERVAL_MS);
        if !game.move_item(from, to) {
            warn!(%from, %to, "planned move was refused");
            break;
        }
        moves += 1;
    }
    game.log_shelves_state();

    LevelSummary {
        level: game.level(),
        completed: game.is_level_complete(),
        moves,
        score: game.score(),
        matches: game.session().match_counter(),
        items_left: game.board().item_count(),
    }
}

fn primary_count(shelf: &Shelf, tag: &ItemTag) -> usize {
    shelf
        .primary_slots()
        .iter()
        .filter(|slot| slot.item_tag() == Some(tag))
        .count()
}

/// A primary item tagged `tag` outside `exclude`. With `lone_only`, only
/// items that are the sole holder of their tag in their row qualify.
fn find_source(board: &Board, tag: &ItemTag, exclude: &Shelf, lone_only: bool) -> Option<SlotId> {
    board
        .shelves()
        .iter()
        .filter(|shelf| shelf.id() != exclude.id())
        .filter(|shelf| !lone_only || primary_count(shelf, tag) == 1)
        .find_map(|shelf| {
            shelf
                .occupied_indices(SlotRole::Primary)
                .into_iter()
                .find(|&index| shelf.slot(index).and_then(|slot| slot.item_tag()) == Some(tag))
                .map(|index| shelf.slot_id(index))
        })
}

/// Fill the single gap of a row whose other primaries share a tag
fn completing_move(board: &Board) -> Option<(SlotId, SlotId)> {
    board.shelves().iter().find_map(|shelf| {
        let empty = shelf.empty_indices(SlotRole::Primary);
        let [gap] = empty.as_slice() else {
            return None;
        };
        let tag = shelf.primary_slots().iter().find_map(|slot| slot.item_tag())?;
        if primary_count(shelf, tag) + 1 != shelf.primary_slots().len() {
            return None;
        }
        let source = find_source(board, tag, shelf, false)?;
        Some((source, shelf.slot_id(*gap)))
    })
}

/// Join a lone item with another lone item of the same tag
fn pairing_move(board: &Board) -> Option<(SlotId, SlotId)> {
    board.shelves().iter().find_map(|shelf| {
        let occupied = shelf.occupied_indices(SlotRole::Primary);
        let [only] = occupied.as_slice() else {
            return None;
        };
        let gap = shelf.first_empty_primary()?;
        let tag = shelf.slot(*only)?.item_tag()?;
        let source = find_source(board, tag, shelf, true)?;
        Some((source, shelf.slot_id(gap)))
    })
}
