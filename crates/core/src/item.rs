//! Items and the factory that instantiates them from templates.

use crate::types::{ItemId, ItemTag, VisualBinding};

/// A placed game item.
///
/// Deliberately not `Clone`: an item is owned by exactly one slot at a time
/// and moves between slots by value.
#[derive(Debug, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    tag: ItemTag,
    visuals: Option<VisualBinding>,
}

impl Item {
    pub fn new(id: ItemId, tag: ItemTag, visuals: Option<VisualBinding>) -> Self {
        Self { id, tag, visuals }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn tag(&self) -> &ItemTag {
        &self.tag
    }

    /// Visual binding resolved at creation; `None` means the presenter has
    /// nothing to update for this item.
    pub fn visuals(&self) -> Option<VisualBinding> {
        self.visuals
    }
}

/// Blueprint an [`Item`] is instantiated from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTemplate {
    pub tag: ItemTag,
    pub visuals: Option<VisualBinding>,
}

impl ItemTemplate {
    pub fn new(tag: impl Into<ItemTag>) -> Self {
        Self {
            tag: tag.into(),
            visuals: None,
        }
    }

    pub fn with_visuals(mut self, visuals: VisualBinding) -> Self {
        self.visuals = Some(visuals);
        self
    }
}

/// Hands out items with monotonically increasing ids
#[derive(Debug, Clone, Default)]
pub struct ItemFactory {
    next_id: u32,
}

impl ItemFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn instantiate(&mut self, template: &ItemTemplate) -> Item {
        let id = ItemId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        Item::new(id, template.tag.clone(), template.visuals)
    }

    /// Number of items created so far
    pub fn issued(&self) -> u32 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_assigns_distinct_ids() {
        let mut factory = ItemFactory::new();
        let template = ItemTemplate::new("A");

        let a = factory.instantiate(&template);
        let b = factory.instantiate(&template);

        assert_eq!(a.tag(), b.tag());
        assert_ne!(a.id(), b.id());
        assert_eq!(factory.issued(), 2);
    }

    #[test]
    fn test_template_visuals_carry_over() {
        let mut factory = ItemFactory::new();
        let item = factory.instantiate(&ItemTemplate::new("B").with_visuals(VisualBinding(9)));
        assert_eq!(item.visuals(), Some(VisualBinding(9)));

        let bare = factory.instantiate(&ItemTemplate::new("B"));
        assert_eq!(bare.visuals(), None);
    }
}
