//! Headless session driver: plays a number of levels back to back.

use anyhow::Result;
use tracing::{info, trace, warn};

use crate::autoplay::{play_level, template_pool, LevelSummary, MAX_MOVES_PER_LEVEL};
use crate::cli::RunArgs;
use crate::core::{Game, GameConfig, Presenter};
use crate::types::{ItemId, VisualBinding};

/// Presenter that reports to the log instead of a screen
#[derive(Debug, Default)]
pub struct LogPresenter {
    score_line: String,
    completed: Vec<u8>,
}

impl LogPresenter {
    pub fn score_line(&self) -> &str {
        &self.score_line
    }

    /// Levels announced as next, oldest first
    pub fn completed(&self) -> &[u8] {
        &self.completed
    }
}

impl Presenter for LogPresenter {
    fn apply_primary_visuals(&mut self, item: ItemId, visuals: VisualBinding) {
        trace!(%item, visuals = visuals.0, "primary visuals");
    }

    fn apply_cascaded_visuals(&mut self, item: ItemId, visuals: VisualBinding, color_multiplier: f32) {
        trace!(%item, visuals = visuals.0, color_multiplier, "cascaded visuals");
    }

    fn set_interactive(&mut self, item: ItemId, enabled: bool) {
        trace!(%item, enabled, "interactive");
    }

    fn item_destroyed(&mut self, item: ItemId) {
        trace!(%item, "destroyed");
    }

    fn score_changed(&mut self, text: &str) {
        self.score_line = text.to_string();
    }

    fn level_completed(&mut self, next_level: u8) {
        info!(next_level, "level complete, next level saved");
        self.completed.push(next_level);
    }
}

/// Play `args.levels` levels starting at `args.level`.
///
/// A completed level advances to the next one; a stuck level is replayed.
pub fn run(config: GameConfig, args: &RunArgs) -> Result<Vec<LevelSummary>> {
    let mut game = Game::new(config, LogPresenter::default());
    game.initialize(args.level, &template_pool(args.level))?;

    let mut summaries = Vec::new();
    for round in 0..args.levels {
        let summary = play_level(&mut game, MAX_MOVES_PER_LEVEL);
        if summary.completed {
            info!(
                level = summary.level,
                moves = summary.moves,
                score = summary.score,
                "{}",
                game.presenter().score_line()
            );
        } else {
            warn!(
                level = summary.level,
                moves = summary.moves,
                matches = summary.matches,
                items_left = summary.items_left,
                "level stuck"
            );
        }

        if args.json {
            println!("{}", serde_json::to_string(&game.snapshot())?);
        }
        summaries.push(summary);

        if round + 1 < args.levels {
            let next = game.pending_level().unwrap_or(game.level());
            game.restart_level(&template_pool(next))?;
        }
    }

    Ok(summaries)
}
