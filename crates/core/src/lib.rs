//! Core board logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the shelf board: slots and shelves, match
//! detection, cascade promotion, initial distribution, combo scoring and the
//! event chain that sequences them. Rendering, input and persistence stay
//! outside, behind the [`Presenter`] trait.
//!
//! - **Deterministic**: randomness goes through [`RandomSource`]; the same
//!   seed yields the same board
//! - **Single actor**: one [`Game`] owns the board and is the only code that
//!   mutates it
//! - **Synchronous**: publishing an event runs its whole reaction chain
//!   before returning
//!
//! # Module Structure
//!
//! - [`slot`]: single item-holding position with a fixed role
//! - [`shelf`]: six slots, match detection over the primary row, promotion
//! - [`board`]: the ordered shelves of a level
//! - [`distribution`]: initial placement of a level's items
//! - [`scoring`]: combo window, score and win condition
//! - [`bus`]: publish/subscribe for board events
//! - [`game`]: the orchestrator tying it all together
//!
//! # Example
//!
//! ```
//! use shelf_match_core::{Game, GameConfig, ItemTemplate, NullPresenter};
//!
//! let pool: Vec<ItemTemplate> = ["A", "A", "A", "B", "B", "B", "C", "C", "C", "D", "D", "D"]
//!     .into_iter()
//!     .map(ItemTemplate::new)
//!     .collect();
//!
//! let mut game = Game::new(GameConfig::default(), NullPresenter);
//! game.initialize(1, &pool).unwrap();
//!
//! assert_eq!(game.board().len(), 3);
//! assert_eq!(game.added_items().len(), 12);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod bus;
pub mod config;
pub mod distribution;
pub mod error;
pub mod game;
pub mod item;
pub mod presenter;
pub mod rng;
pub mod scoring;
pub mod shelf;
pub mod slot;
pub mod snapshot;

pub use shelf_match_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use bus::{EventBus, SubscriptionId};
pub use config::GameConfig;
pub use distribution::required_templates;
pub use error::{BoardError, Result};
pub use game::Game;
pub use item::{Item, ItemFactory, ItemTemplate};
pub use presenter::{NullPresenter, Presenter, PresenterCall, RecordingPresenter};
pub use rng::{shuffle, RandomSource, SimpleRng};
pub use scoring::{match_points, score_text, MatchAward, Session};
pub use shelf::{Promotion, Shelf};
pub use slot::Slot;
pub use snapshot::{BoardSnapshot, ShelfSnapshot, SlotSnapshot};
