//! Presenter - the seam to everything the engine does not own
//!
//! Rendering, drag handling, score display and level persistence live outside
//! the core. The engine calls out through [`Presenter`] whenever one of those
//! collaborators needs to react. Every method has a no-op default so hosts
//! only implement what they render.

use crate::types::{ItemId, VisualBinding};

pub trait Presenter {
    /// Item now rests in a primary slot
    fn apply_primary_visuals(&mut self, _item: ItemId, _visuals: VisualBinding) {}

    /// Item now rests in a cascaded slot and should be dimmed by `color_multiplier`
    fn apply_cascaded_visuals(&mut self, _item: ItemId, _visuals: VisualBinding, _color_multiplier: f32) {}

    /// Enable or disable dragging for an item
    fn set_interactive(&mut self, _item: ItemId, _enabled: bool) {}

    /// Item was cleared from its slot and no longer exists
    fn item_destroyed(&mut self, _item: ItemId) {}

    /// Formatted score line, sent on every score change
    fn score_changed(&mut self, _text: &str) {}

    /// Level finished; the host should persist `next_level` and restart
    fn level_completed(&mut self, _next_level: u8) {}
}

/// Presenter that ignores every call (headless use)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}

/// One recorded presenter call
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterCall {
    PrimaryVisuals(ItemId),
    CascadedVisuals(ItemId, f32),
    Interactive(ItemId, bool),
    Destroyed(ItemId),
    Score(String),
    LevelCompleted(u8),
}

/// Presenter that keeps a log of every call, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    calls: Vec<PresenterCall>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[PresenterCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Last interactivity value sent for `item`
    pub fn interactive(&self, item: ItemId) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            PresenterCall::Interactive(id, enabled) if *id == item => Some(*enabled),
            _ => None,
        })
    }

    /// Whether the latest visual state applied to `item` is the primary one
    pub fn shows_primary(&self, item: ItemId) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            PresenterCall::PrimaryVisuals(id) if *id == item => Some(true),
            PresenterCall::CascadedVisuals(id, _) if *id == item => Some(false),
            _ => None,
        })
    }

    pub fn destroyed(&self) -> Vec<ItemId> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PresenterCall::Destroyed(id) => Some(*id),
                _ => None,
            })
            .collect()
    }

    pub fn last_score_text(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            PresenterCall::Score(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn level_completions(&self) -> Vec<u8> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PresenterCall::LevelCompleted(level) => Some(*level),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn apply_primary_visuals(&mut self, item: ItemId, _visuals: VisualBinding) {
        self.calls.push(PresenterCall::PrimaryVisuals(item));
    }

    fn apply_cascaded_visuals(&mut self, item: ItemId, _visuals: VisualBinding, color_multiplier: f32) {
        self.calls
            .push(PresenterCall::CascadedVisuals(item, color_multiplier));
    }

    fn set_interactive(&mut self, item: ItemId, enabled: bool) {
        self.calls.push(PresenterCall::Interactive(item, enabled));
    }

    fn item_destroyed(&mut self, item: ItemId) {
        self.calls.push(PresenterCall::Destroyed(item));
    }

    fn score_changed(&mut self, text: &str) {
        self.calls.push(PresenterCall::Score(text.to_string()));
    }

    fn level_completed(&mut self, next_level: u8) {
        self.calls.push(PresenterCall::LevelCompleted(next_level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_presenter_queries() {
        let mut p = RecordingPresenter::new();
        p.apply_cascaded_visuals(ItemId(1), VisualBinding(1), 0.6);
        p.set_interactive(ItemId(1), false);
        p.apply_primary_visuals(ItemId(1), VisualBinding(1));
        p.set_interactive(ItemId(1), true);
        p.score_changed("Score: 10");

        assert_eq!(p.shows_primary(ItemId(1)), Some(true));
        assert_eq!(p.interactive(ItemId(1)), Some(true));
        assert_eq!(p.interactive(ItemId(2)), None);
        assert_eq!(p.last_score_text(), Some("Score: 10"));
    }
}
