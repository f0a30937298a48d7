//! Initial item distribution
//!
//! Runs once when a level starts:
//!
//! 1. The level needs `12 * level` templates; a smaller pool aborts before
//!    anything is placed.
//! 2. The first `12 * level` templates, in pool order, form the working set.
//! 3. Items 0..3 go into the first empty primary slot of shelves 0..3.
//! 4. Items 3 and 4 go into shelf 0: its empty primary slots if it has two,
//!    otherwise two empty cascaded slots, otherwise the run aborts.
//! 5. Every other item goes into a shuffled pool of all empty slots.
//!
//! Each placed item is draggable iff it landed in a primary slot. Placements
//! here are silent: no `ItemPlaced` is published during distribution.

use tracing::debug;

use crate::board::Board;
use crate::error::{BoardError, Result};
use crate::item::{ItemFactory, ItemTemplate};
use crate::presenter::Presenter;
use crate::rng::{shuffle, RandomSource};
use crate::types::{
    ItemId, ShelfId, SlotId, SlotRole, ITEMS_PER_LEVEL, SEED_PAIR, SEED_SHELVES,
};

/// Templates a level consumes
pub fn required_templates(level: u8) -> usize {
    ITEMS_PER_LEVEL * usize::from(level)
}

pub(crate) struct Distributor<'a> {
    pub board: &'a mut Board,
    pub factory: &'a mut ItemFactory,
    pub rng: &'a mut dyn RandomSource,
    pub presenter: &'a mut dyn Presenter,
    /// Every item placed so far, in placement order
    pub added: &'a mut Vec<ItemId>,
}

impl Distributor<'_> {
    pub fn distribute(&mut self, level: u8, templates: &[ItemTemplate]) -> Result<()> {
        let required = required_templates(level);
        if templates.len() < required {
            return Err(BoardError::TemplatePoolTooSmall {
                required,
                available: templates.len(),
            });
        }
        let working = &templates[..required];

        for (index, template) in working.iter().enumerate().take(SEED_SHELVES) {
            let shelf_id = ShelfId(index);
            let shelf = self.board.require_shelf(shelf_id)?;
            let slot = shelf
                .first_empty_primary()
                .map(|slot| shelf.slot_id(slot))
                .ok_or(BoardError::NoEmptyPrimarySlot { shelf: shelf_id })?;
            self.place(slot, template)?;
        }

        let pair_slots = self.seed_pair_slots()?;
        for (slot, &item) in pair_slots.into_iter().zip(SEED_PAIR.iter()) {
            self.place(slot, &working[item])?;
        }

        let remaining = &working[SEED_PAIR[1] + 1..];
        let mut pool = self.board.empty_slots();
        shuffle(&mut *self.rng, &mut pool);

        for (placed, template) in remaining.iter().enumerate() {
            let Some(&slot) = pool.get(placed) else {
                return Err(BoardError::SlotPoolExhausted {
                    placed,
                    remaining: remaining.len() - placed,
                });
            };
            self.place(slot, template)?;
        }

        debug!(level, placed = self.added.len(), "distribution complete");
        Ok(())
    }

    /// Two slots of shelf 0 for the seed pair, primary row preferred
    fn seed_pair_slots(&self) -> Result<[SlotId; 2]> {
        let shelf = self.board.require_shelf(ShelfId(0))?;

        let primary = shelf.empty_indices(SlotRole::Primary);
        let candidates = if primary.len() >= SEED_PAIR.len() {
            primary
        } else {
            shelf.empty_indices(SlotRole::Cascaded)
        };

        match candidates.as_slice() {
            [first, second, ..] => Ok([shelf.slot_id(*first), shelf.slot_id(*second)]),
            _ => Err(BoardError::NoRoomForSeedPair),
        }
    }

    fn place(&mut self, slot_id: SlotId, template: &ItemTemplate) -> Result<()> {
        let slot = self
            .board
            .slot_mut(slot_id)
            .ok_or(BoardError::NoShelf { shelf: slot_id.shelf })?;

        let item = self.factory.instantiate(template);
        let id = item.id();
        slot.place_item(Some(item), &mut *self.presenter);

        let interactive = slot.role().is_interactive();
        self.presenter.set_interactive(id, interactive);
        self.added.push(id);

        debug!(item = %id, tag = %template.tag, slot = %slot_id, interactive, "distributed item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::{NullPresenter, RecordingPresenter};
    use crate::rng::SimpleRng;
    use crate::slot::Slot;
    use crate::types::{ItemTag, PRIMARY_SLOTS, SLOTS_PER_SHELF};

    fn pool(tags: &[&str]) -> Vec<ItemTemplate> {
        tags.iter().map(|tag| ItemTemplate::new(*tag)).collect()
    }

    fn level_pool(level: u8) -> Vec<ItemTemplate> {
        (0..required_templates(level))
            .map(|i| ItemTemplate::new(format!("T{}", i / 3).as_str()))
            .collect()
    }

    struct Fixture {
        board: Board,
        factory: ItemFactory,
        rng: SimpleRng,
        presenter: RecordingPresenter,
        added: Vec<ItemId>,
    }

    impl Fixture {
        fn new(level: u8) -> Self {
            Self {
                board: Board::generate(level, 0.6, &mut NullPresenter).unwrap(),
                factory: ItemFactory::new(),
                rng: SimpleRng::new(7),
                presenter: RecordingPresenter::new(),
                added: Vec::new(),
            }
        }

        fn run(&mut self, level: u8, templates: &[ItemTemplate]) -> Result<()> {
            Distributor {
                board: &mut self.board,
                factory: &mut self.factory,
                rng: &mut self.rng,
                presenter: &mut self.presenter,
                added: &mut self.added,
            }
            .distribute(level, templates)
        }

        fn tag_at(&self, shelf: usize, index: usize) -> Option<&str> {
            self.board
                .slot(SlotId::new(ShelfId(shelf), index))
                .and_then(Slot::item_tag)
                .map(ItemTag::as_str)
        }
    }

    #[test]
    fn test_small_pool_aborts_before_placing() {
        let mut fx = Fixture::new(1);
        let templates = pool(&["A"; 10]);

        let err = fx.run(1, &templates).unwrap_err();
        assert!(matches!(
            err,
            BoardError::TemplatePoolTooSmall { required: 12, available: 10 }
        ));
        assert!(fx.added.is_empty());
        assert_eq!(fx.board.item_count(), 0);
    }

    #[test]
    fn test_places_whole_working_set() {
        for level in 1..=5u8 {
            let mut fx = Fixture::new(level);
            fx.run(level, &level_pool(level)).unwrap();

            assert_eq!(fx.added.len(), required_templates(level));
            assert_eq!(fx.board.item_count(), required_templates(level));
        }
    }

    #[test]
    fn test_seed_items_are_deterministic() {
        let tags = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];
        let mut fx = Fixture::new(1);
        fx.run(1, &pool(&tags)).unwrap();

        // Item 0 plus the seed pair fill shelf 0's primary row.
        assert_eq!(fx.tag_at(0, 0), Some("A"));
        assert_eq!(fx.tag_at(0, 1), Some("D"));
        assert_eq!(fx.tag_at(0, 2), Some("E"));
        assert_eq!(fx.tag_at(1, 0), Some("B"));
        assert_eq!(fx.tag_at(2, 0), Some("C"));
    }

    #[test]
    fn test_extra_templates_are_ignored() {
        let mut templates = level_pool(1);
        templates.push(ItemTemplate::new("EXTRA"));
        let mut fx = Fixture::new(1);
        fx.run(1, &templates).unwrap();

        assert_eq!(fx.added.len(), 12);
        let extra = fx.board.shelves().iter().any(|shelf| {
            shelf
                .slots()
                .iter()
                .any(|slot| slot.item_tag().map(ItemTag::as_str) == Some("EXTRA"))
        });
        assert!(!extra);
    }

    #[test]
    fn test_interactivity_follows_destination_role() {
        let mut fx = Fixture::new(2);
        fx.run(2, &level_pool(2)).unwrap();

        for &id in &fx.added {
            let slot = fx.board.find_item(id).unwrap();
            let expected = slot.index < PRIMARY_SLOTS;
            assert_eq!(fx.presenter.interactive(id), Some(expected), "{}", slot);
        }
    }

    #[test]
    fn test_seed_pair_falls_back_to_cascaded_row() {
        let mut fx = Fixture::new(1);
        // Pre-fill shelf 0 slot 1 so only one primary slot stays empty after step 3.
        let blocker = fx.factory.instantiate(&ItemTemplate::new("X"));
        fx.board
            .slot_mut(SlotId::new(ShelfId(0), 1))
            .unwrap()
            .place_item(Some(blocker), &mut NullPresenter);

        let tags = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L"];
        fx.run(1, &pool(&tags)).unwrap();

        assert_eq!(fx.tag_at(0, 0), Some("A"));
        assert_eq!(fx.tag_at(0, 3), Some("D"));
        assert_eq!(fx.tag_at(0, 4), Some("E"));
    }

    #[test]
    fn test_seed_pair_without_room_aborts() {
        let mut fx = Fixture::new(1);
        for index in 1..SLOTS_PER_SHELF {
            let item = fx.factory.instantiate(&ItemTemplate::new("X"));
            fx.board
                .slot_mut(SlotId::new(ShelfId(0), index))
                .unwrap()
                .place_item(Some(item), &mut NullPresenter);
        }

        let err = fx.run(1, &level_pool(1)).unwrap_err();
        assert!(matches!(err, BoardError::NoRoomForSeedPair));
        // Items 0..3 were already placed when the run stopped.
        assert_eq!(fx.added.len(), 3);
    }

    #[test]
    fn test_full_shelf_aborts_seed_step() {
        let mut fx = Fixture::new(1);
        for index in 0..PRIMARY_SLOTS {
            let item = fx.factory.instantiate(&ItemTemplate::new("X"));
            fx.board
                .slot_mut(SlotId::new(ShelfId(1), index))
                .unwrap()
                .place_item(Some(item), &mut NullPresenter);
        }

        let err = fx.run(1, &level_pool(1)).unwrap_err();
        assert!(matches!(err, BoardError::NoEmptyPrimarySlot { shelf: ShelfId(1) }));
        assert_eq!(fx.added.len(), 1);
    }

    #[test]
    fn test_exhausted_pool_reports_shortfall() {
        let mut fx = Fixture::new(1);
        // Fill all but four slots so only four of the seven remaining items fit.
        let mut filled = 0;
        for slot in fx.board.empty_slots() {
            let keep_free = (slot.shelf == ShelfId(0) && slot.index < 3)
                || (slot.index == 0 && slot.shelf.0 < 3)
                || filled >= 18 - 5 - 4;
            if keep_free {
                continue;
            }
            let item = fx.factory.instantiate(&ItemTemplate::new("X"));
            fx.board.slot_mut(slot).unwrap().place_item(Some(item), &mut NullPresenter);
            filled += 1;
        }
        let free_after_seeds = fx.board.empty_slots().len() - 5;

        let err = fx.run(1, &level_pool(1)).unwrap_err();
        match err {
            BoardError::SlotPoolExhausted { placed, remaining } => {
                assert_eq!(placed, free_after_seeds);
                assert_eq!(placed + remaining, 7);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(fx.board.empty_slots().len(), 0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let layout = |seed: u32| {
            let mut fx = Fixture::new(2);
            fx.rng = SimpleRng::new(seed);
            fx.run(2, &level_pool(2)).unwrap();
            fx.added
                .iter()
                .map(|id| fx.board.find_item(*id).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(layout(11), layout(11));
    }
}
