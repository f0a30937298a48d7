use thiserror::Error;

use crate::types::ShelfId;

/// Configuration and initialization failures.
///
/// None of these corrupt board invariants: the operation that raised one
/// aborts and leaves the board partially initialized but consistent.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("shelf must own exactly 6 slots, found {found}")]
    InvalidShelfSize { found: usize },

    #[error("level {level} is outside 1..={max}")]
    InvalidLevel { level: u8, max: u8 },

    #[error("template pool holds {available} items, level requires {required}")]
    TemplatePoolTooSmall { required: usize, available: usize },

    #[error("{shelf} does not exist on the board")]
    NoShelf { shelf: ShelfId },

    #[error("{shelf} has no empty primary slot")]
    NoEmptyPrimarySlot { shelf: ShelfId },

    #[error("shelf#0 has no room for the seed pair")]
    NoRoomForSeedPair,

    #[error("ran out of empty slots after placing {placed} items, {remaining} left unplaced")]
    SlotPoolExhausted { placed: usize, remaining: usize },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
