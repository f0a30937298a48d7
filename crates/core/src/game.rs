//! Game module - the board orchestrator
//!
//! [`Game`] is the composition root of a session. It owns the board, the
//! session score state, the event bus, the random source and the presenter,
//! and it is the only code that mutates the board once a level is running.
//!
//! # Reaction chain
//!
//! Every event goes through [`Game::publish`]. Observers on the bus see it
//! first, then the game reacts:
//!
//! - `ItemPlaced(slot)`: the owning shelf scans its primary row; a clear
//!   publishes `MatchCleared(shelf)`.
//! - `MatchCleared(shelf)`: combo and score are updated, reserve items are
//!   promoted into the emptied primary row (each promotion publishes
//!   `ItemPlaced` and runs its own chain to completion before the next one),
//!   then the match counter advances and the win condition is checked.
//!
//! Dispatch is synchronous and reentrant. The chain terminates because each
//! promotion empties a cascaded slot and nothing refills one mid-chain.

use tracing::{debug, error, info};

use crate::board::Board;
use crate::bus::EventBus;
use crate::config::GameConfig;
use crate::distribution::Distributor;
use crate::error::{BoardError, Result};
use crate::item::{Item, ItemFactory, ItemTemplate};
use crate::presenter::{NullPresenter, Presenter};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::{score_text, Session};
use crate::snapshot::BoardSnapshot;
use crate::types::{BoardEvent, ItemId, ShelfId, SlotId, SlotRole, MAX_LEVEL};

pub struct Game<P: Presenter = NullPresenter> {
    config: GameConfig,
    board: Board,
    session: Session,
    bus: EventBus,
    presenter: P,
    rng: Box<dyn RandomSource>,
    factory: ItemFactory,
    /// Items placed by the last distribution, in placement order
    added_items: Vec<ItemId>,
    /// Monotonic session clock, advanced by `tick`
    now_ms: u64,
    /// Level to restart at once the current one is complete
    pending_level: Option<u8>,
    dispatch_depth: usize,
    peak_dispatch_depth: usize,
}

impl<P: Presenter> Game<P> {
    /// Create a game with no board yet, seeded from `config.seed`
    pub fn new(config: GameConfig, presenter: P) -> Self {
        let rng = Box::new(SimpleRng::new(config.seed));
        Self::with_rng(config, presenter, rng)
    }

    /// Create a game drawing randomness from `rng`
    pub fn with_rng(config: GameConfig, presenter: P, rng: Box<dyn RandomSource>) -> Self {
        Self {
            config,
            board: Board::new(),
            session: Session::new(1),
            bus: EventBus::new(),
            presenter,
            rng,
            factory: ItemFactory::new(),
            added_items: Vec::new(),
            now_ms: 0,
            pending_level: None,
            dispatch_depth: 0,
            peak_dispatch_depth: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access; edits made here publish nothing
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn level(&self) -> u8 {
        self.session.level()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn added_items(&self) -> &[ItemId] {
        &self.added_items
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Set once the level is complete, until the next (re)start
    pub fn pending_level(&self) -> Option<u8> {
        self.pending_level
    }

    pub fn is_level_complete(&self) -> bool {
        self.pending_level.is_some()
    }

    /// Deepest nesting of event dispatch seen so far
    pub fn peak_dispatch_depth(&self) -> usize {
        self.peak_dispatch_depth
    }

    /// Advance the session clock
    pub fn tick(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
    }

    /// Generate the board for `level` and distribute the first `12 * level`
    /// templates onto it.
    ///
    /// Any previous board is destroyed and session state starts over. A
    /// distribution failure leaves the shelves in place with whatever items
    /// were placed before the abort.
    pub fn initialize(&mut self, level: u8, templates: &[ItemTemplate]) -> Result<()> {
        if !(1..=MAX_LEVEL).contains(&level) {
            let err = BoardError::InvalidLevel { level, max: MAX_LEVEL };
            error!(error = %err, "cannot initialize board");
            return Err(err);
        }

        self.board.clear(&mut self.presenter);
        self.added_items.clear();
        self.pending_level = None;

        self.board = Board::generate(level, self.config.cascaded_color_multiplier, &mut self.presenter)?;
        self.session = Session::new(level);
        self.presenter.score_changed(&score_text(self.session.score()));
        info!(level, shelves = self.board.len(), templates = templates.len(), "initializing board");

        let result = Distributor {
            board: &mut self.board,
            factory: &mut self.factory,
            rng: self.rng.as_mut(),
            presenter: &mut self.presenter,
            added: &mut self.added_items,
        }
        .distribute(level, templates);

        if let Err(err) = &result {
            error!(level, placed = self.added_items.len(), error = %err, "distribution aborted");
        }
        result
    }

    /// Start over at the level reached by the last completion, or replay the
    /// current one.
    pub fn restart_level(&mut self, templates: &[ItemTemplate]) -> Result<()> {
        let level = self.pending_level.unwrap_or(self.session.level());
        info!(level, "restarting level");
        self.initialize(level, templates)
    }

    /// Create an item with a fresh identity
    pub fn instantiate(&mut self, template: &ItemTemplate) -> Item {
        self.factory.instantiate(template)
    }

    /// Place `item` into `slot` and publish `ItemPlaced`.
    ///
    /// Returns false, destroying the item, if the slot does not exist.
    pub fn place_item(&mut self, slot_id: SlotId, item: Item) -> bool {
        let id = item.id();
        let Some(slot) = self.board.slot_mut(slot_id) else {
            debug!(item = %id, slot = %slot_id, "no such slot; dropping item");
            self.presenter.item_destroyed(id);
            return false;
        };

        slot.place_item(Some(item), &mut self.presenter);
        let interactive = slot.role().is_interactive();
        self.presenter.set_interactive(id, interactive);
        debug!(item = %id, slot = %slot_id, "placed item");

        self.publish(BoardEvent::ItemPlaced(slot_id));
        true
    }

    /// Drag-and-drop of an item from one primary slot to an empty primary
    /// slot. Anything else is refused and leaves the board untouched.
    pub fn move_item(&mut self, from: SlotId, to: SlotId) -> bool {
        if from == to {
            debug!(slot = %from, "move onto the same slot ignored");
            return false;
        }

        let source_ready = self
            .board
            .slot(from)
            .is_some_and(|slot| slot.role().is_interactive() && !slot.is_empty());
        let target_ready = self
            .board
            .slot(to)
            .is_some_and(|slot| slot.role() == SlotRole::Primary && slot.is_empty());
        if !source_ready || !target_ready {
            debug!(%from, %to, source_ready, target_ready, "move refused");
            return false;
        }

        let Some(item) = self.board.slot_mut(from).and_then(|slot| slot.take_item()) else {
            return false;
        };
        debug!(item = %item.id(), %from, %to, "moving item");
        self.place_item(to, item)
    }

    /// Deliver `event` to observers, then run the reaction chain.
    pub fn publish(&mut self, event: BoardEvent) {
        self.dispatch_depth += 1;
        self.peak_dispatch_depth = self.peak_dispatch_depth.max(self.dispatch_depth);

        self.bus.publish(&event);
        match event {
            BoardEvent::ItemPlaced(slot) => self.on_item_placed(slot),
            BoardEvent::MatchCleared(shelf) => self.on_match_cleared(shelf),
        }

        self.dispatch_depth -= 1;
    }

    fn on_item_placed(&mut self, slot: SlotId) {
        let Some(shelf) = self.board.shelf_mut(slot.shelf) else {
            debug!(%slot, "placement on unknown shelf ignored");
            return;
        };

        if shelf.check_for_matches(&mut self.presenter) {
            self.publish(BoardEvent::MatchCleared(slot.shelf));
        }
    }

    fn on_match_cleared(&mut self, shelf_id: ShelfId) {
        let award = self.session.register_match(
            self.now_ms,
            self.config.combo_duration_ms,
            self.config.score_per_match,
        );
        info!(
            shelf = %shelf_id,
            combo = award.combo_multiplier,
            points = award.points,
            score = award.score,
            "match cleared"
        );
        self.presenter.score_changed(&score_text(award.score));

        self.cascade(shelf_id);

        if self.session.record_match() {
            let next = self.session.next_level();
            info!(level = self.session.level(), next, score = self.session.score(), "level complete");
            self.pending_level = Some(next);
            self.presenter.level_completed(next);
        }
    }

    /// Promote reserve items of `shelf_id` into its emptied primary row
    fn cascade(&mut self, shelf_id: ShelfId) {
        let plan = match self.board.shelf(shelf_id) {
            Some(shelf) => shelf.plan_promotions(self.rng.as_mut()),
            None => return,
        };
        if plan.is_empty() {
            return;
        }
        debug!(shelf = %shelf_id, promotions = plan.len(), "cascading");

        for promotion in plan {
            let Some(shelf) = self.board.shelf_mut(shelf_id) else {
                return;
            };
            let recipient = shelf.slot_id(promotion.1);
            if shelf.promote(promotion, &mut self.presenter).is_some() {
                self.publish(BoardEvent::ItemPlaced(recipient));
            }
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(&self.board, &self.session)
    }

    /// Dump every slot's occupant at debug level
    pub fn log_shelves_state(&self) {
        for shelf in self.board.shelves() {
            let row = shelf
                .slots()
                .iter()
                .map(|slot| slot.item_tag().map_or("-", |tag| tag.as_str()))
                .collect::<Vec<_>>()
                .join(" ");
            debug!(shelf = %shelf.id(), slots = %row, "shelf state");
        }
    }
}
