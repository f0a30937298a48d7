//! Slot module - a single item-holding position
//!
//! A slot owns at most one [`Item`] and carries a fixed [`SlotRole`]. Placing
//! into an occupied slot destroys the previous occupant first. Slots never
//! publish events themselves; the caller that moved an item decides whether
//! the placement is announced.

use tracing::{debug, warn};

use crate::item::Item;
use crate::presenter::Presenter;
use crate::types::{ItemId, ItemTag, SlotRole, DEFAULT_CASCADED_COLOR_MULTIPLIER};

#[derive(Debug)]
pub struct Slot {
    role: SlotRole,
    occupant: Option<Item>,
    /// Dimming applied to items resting here while the slot is cascaded
    cascaded_color_multiplier: f32,
}

impl Slot {
    /// Create an empty primary slot with the default cascaded dimming
    pub fn new() -> Self {
        Self::with_color_multiplier(DEFAULT_CASCADED_COLOR_MULTIPLIER)
    }

    pub fn with_color_multiplier(cascaded_color_multiplier: f32) -> Self {
        Self {
            role: SlotRole::Primary,
            occupant: None,
            cascaded_color_multiplier,
        }
    }

    pub fn role(&self) -> SlotRole {
        self.role
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Tag of the occupant, `None` when empty
    pub fn item_tag(&self) -> Option<&ItemTag> {
        self.occupant.as_ref().map(Item::tag)
    }

    pub fn item(&self) -> Option<&Item> {
        self.occupant.as_ref()
    }

    pub fn item_id(&self) -> Option<ItemId> {
        self.occupant.as_ref().map(Item::id)
    }

    pub fn cascaded_color_multiplier(&self) -> f32 {
        self.cascaded_color_multiplier
    }

    /// Make `item` the occupant of this slot.
    ///
    /// `None` is a no-op. An existing occupant is destroyed first. The new
    /// occupant gets the visual state matching this slot's role.
    pub fn place_item(&mut self, item: Option<Item>, presenter: &mut dyn Presenter) {
        let Some(item) = item else {
            debug!("place_item called without an item; ignoring");
            return;
        };

        if !self.is_empty() {
            self.clear_slot(presenter);
        }

        self.occupant = Some(item);
        self.apply_role_visuals(presenter);
    }

    /// Destroy the occupant, if any. Idempotent.
    pub fn clear_slot(&mut self, presenter: &mut dyn Presenter) {
        if let Some(item) = self.occupant.take() {
            debug!(item = %item.id(), tag = %item.tag(), "clearing slot");
            presenter.item_destroyed(item.id());
        }
    }

    /// Vacate the slot without destroying the occupant (moves, promotions)
    pub fn take_item(&mut self) -> Option<Item> {
        self.occupant.take()
    }

    pub fn set_as_primary(&mut self, presenter: &mut dyn Presenter) {
        self.role = SlotRole::Primary;
        self.apply_role_visuals(presenter);
    }

    pub fn set_as_cascaded(&mut self, presenter: &mut dyn Presenter) {
        self.role = SlotRole::Cascaded;
        self.apply_role_visuals(presenter);
    }

    /// Re-apply the visual state for the current role to the occupant
    pub fn apply_role_visuals(&self, presenter: &mut dyn Presenter) {
        let Some(item) = self.occupant.as_ref() else {
            return;
        };

        let Some(visuals) = item.visuals() else {
            warn!(item = %item.id(), tag = %item.tag(), "item has no visual binding");
            return;
        };

        match self.role {
            SlotRole::Primary => presenter.apply_primary_visuals(item.id(), visuals),
            SlotRole::Cascaded => {
                presenter.apply_cascaded_visuals(item.id(), visuals, self.cascaded_color_multiplier)
            }
        }
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::new()
    }
}
