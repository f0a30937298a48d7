//! Shelf module - six ordered slots and the match scan
//!
//! Slots 0..3 form the primary row, slots 3..6 the cascaded (reserve) row.
//! Roles are assigned once at construction. Match detection slides a window
//! of [`MATCH_LENGTH`] over the primary row and restarts from the left after
//! every clear, so it stays correct if the primary row ever grows wider than
//! the match window.

use arrayvec::ArrayVec;
use tracing::{debug, error};

use crate::error::{BoardError, Result};
use crate::item::Item;
use crate::presenter::Presenter;
use crate::rng::{shuffle, RandomSource};
use crate::slot::Slot;
use crate::types::{
    ItemId, ShelfId, SlotId, SlotRole, CASCADED_SLOTS, MATCH_LENGTH, PRIMARY_SLOTS,
    SLOTS_PER_SHELF,
};

/// Donor (cascaded index) and recipient (primary index) of one promotion
pub type Promotion = (usize, usize);

#[derive(Debug)]
pub struct Shelf {
    id: ShelfId,
    slots: [Slot; SLOTS_PER_SHELF],
}

impl Shelf {
    /// Build a shelf from exactly six slots, in order.
    ///
    /// Any other count is a configuration error and no shelf is produced.
    pub fn new(id: ShelfId, slots: Vec<Slot>, presenter: &mut dyn Presenter) -> Result<Self> {
        let found = slots.len();
        let slots: [Slot; SLOTS_PER_SHELF] = slots.try_into().map_err(|_| {
            error!(shelf = %id, found, "shelf does not have exactly {} slots", SLOTS_PER_SHELF);
            BoardError::InvalidShelfSize { found }
        })?;

        let mut shelf = Self { id, slots };
        shelf.categorize_slots(presenter);
        Ok(shelf)
    }

    /// Shelf of six empty slots sharing one cascaded dimming factor
    pub fn empty(id: ShelfId, cascaded_color_multiplier: f32, presenter: &mut dyn Presenter) -> Result<Self> {
        let slots = (0..SLOTS_PER_SHELF)
            .map(|_| Slot::with_color_multiplier(cascaded_color_multiplier))
            .collect();
        Self::new(id, slots, presenter)
    }

    fn categorize_slots(&mut self, presenter: &mut dyn Presenter) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            match SlotRole::for_index(index) {
                SlotRole::Primary => slot.set_as_primary(presenter),
                SlotRole::Cascaded => slot.set_as_cascaded(presenter),
            }
        }
    }

    pub fn id(&self) -> ShelfId {
        self.id
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub fn slot_id(&self, index: usize) -> SlotId {
        SlotId::new(self.id, index)
    }

    /// The primary row, in order
    pub fn primary_slots(&self) -> &[Slot] {
        &self.slots[..PRIMARY_SLOTS]
    }

    /// The cascaded row, in order
    pub fn cascaded_slots(&self) -> &[Slot] {
        &self.slots[PRIMARY_SLOTS..]
    }

    /// Indices (0..6) of empty slots with the given role, in order
    pub fn empty_indices(&self, role: SlotRole) -> ArrayVec<usize, SLOTS_PER_SHELF> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.role() == role && slot.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Indices (0..6) of occupied slots with the given role, in order
    pub fn occupied_indices(&self, role: SlotRole) -> ArrayVec<usize, SLOTS_PER_SHELF> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.role() == role && !slot.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn first_empty_primary(&self) -> Option<usize> {
        self.primary_slots().iter().position(Slot::is_empty)
    }

    pub fn all_primary_empty(&self) -> bool {
        self.primary_slots().iter().all(Slot::is_empty)
    }

    pub fn has_cascaded_items(&self) -> bool {
        self.cascaded_slots().iter().any(|slot| !slot.is_empty())
    }

    pub fn occupied_cascaded_count(&self) -> usize {
        self.cascaded_slots().iter().filter(|slot| !slot.is_empty()).count()
    }

    pub fn item_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_empty()).count()
    }

    /// Promotion runs only once the whole primary row is empty and the
    /// reserve row still holds something.
    pub fn needs_promotion(&self) -> bool {
        self.all_primary_empty() && self.has_cascaded_items()
    }

    /// Scan the primary row and clear every matching window.
    ///
    /// Returns true iff at least one window was cleared.
    pub fn check_for_matches(&mut self, presenter: &mut dyn Presenter) -> bool {
        let id = self.id;
        let primary = &mut self.slots[..PRIMARY_SLOTS];
        if primary.len() < MATCH_LENGTH {
            return false;
        }

        let mut match_found = false;
        let mut start = 0;
        while start + MATCH_LENGTH <= primary.len() {
            if window_matches(&primary[start..start + MATCH_LENGTH]) {
                debug!(shelf = %id, from = start, to = start + MATCH_LENGTH - 1, "match found");
                for slot in &mut primary[start..start + MATCH_LENGTH] {
                    slot.clear_slot(presenter);
                }
                match_found = true;
                // A clear can line up a new window further left.
                start = 0;
            } else {
                start += 1;
            }
        }

        match_found
    }

    /// Pair reserve donors with empty primary recipients.
    ///
    /// Both lists are shuffled independently, then zipped; pairing stops when
    /// either side runs out. Empty when promotion is not due.
    pub fn plan_promotions(&self, rng: &mut dyn RandomSource) -> ArrayVec<Promotion, CASCADED_SLOTS> {
        if !self.needs_promotion() {
            return ArrayVec::new();
        }

        let mut donors = self.occupied_indices(SlotRole::Cascaded);
        let mut recipients = self.empty_indices(SlotRole::Primary);
        shuffle(&mut *rng, &mut donors);
        shuffle(&mut *rng, &mut recipients);

        donors
            .into_iter()
            .zip(recipients)
            .take(CASCADED_SLOTS)
            .collect()
    }

    /// Move the occupant of cascaded slot `donor` into primary slot `recipient`.
    ///
    /// Skipped (returns `None`) if the donor has been vacated or the recipient
    /// filled since the promotion was planned.
    pub fn promote(&mut self, (donor, recipient): Promotion, presenter: &mut dyn Presenter) -> Option<ItemId> {
        let donor_ready = self
            .slot(donor)
            .is_some_and(|slot| slot.role() == SlotRole::Cascaded && !slot.is_empty());
        let recipient_ready = self
            .slot(recipient)
            .is_some_and(|slot| slot.role() == SlotRole::Primary && slot.is_empty());
        if !donor_ready || !recipient_ready {
            debug!(shelf = %self.id, donor, recipient, "promotion no longer applicable");
            return None;
        }

        let item: Item = self.slots[donor].take_item()?;
        let id = item.id();
        self.slots[recipient].place_item(Some(item), presenter);
        presenter.set_interactive(id, true);
        debug!(shelf = %self.id, item = %id, donor, recipient, "promoted item");
        Some(id)
    }

    /// Destroy every occupant
    pub fn clear(&mut self, presenter: &mut dyn Presenter) {
        for slot in &mut self.slots {
            slot.clear_slot(presenter);
        }
    }
}

fn window_matches(window: &[Slot]) -> bool {
    let Some(first) = window.first().and_then(Slot::item_tag) else {
        return false;
    };
    if first.is_blank() {
        return false;
    }
    window[1..].iter().all(|slot| slot.item_tag() == Some(first))
}
