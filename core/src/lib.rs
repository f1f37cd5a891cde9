use serde::{Deserialize, Serialize};

pub use color::*;
pub use controller::*;
pub use error::*;
pub use layout::*;
pub use random::*;
pub use scene::*;
pub use screens::*;
pub use tile::*;
pub use types::*;

mod color;
mod controller;
mod error;
mod layout;
mod random;
mod scene;
mod screens;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub difficulty_ceiling: Level,
    pub initial_grid_size: GridSize,
    /// The grid grows whenever the difficulty becomes a multiple of this.
    pub grid_growth_interval: Level,
    pub gutter: f64,
}

impl GameConfig {
    pub const DEFAULT_CEILING: Level = 30;
    pub const DEFAULT_GRID_SIZE: GridSize = 4;
    pub const DEFAULT_GROWTH_INTERVAL: Level = 4;
    pub const DEFAULT_GUTTER: f64 = 10.0;
    pub const MAX_CANVAS_WIDTH: f64 = 500.0;
    pub const VIEWPORT_MARGIN: f64 = 10.0;

    pub const fn new_unchecked(canvas_width: f64, difficulty_ceiling: Level) -> Self {
        Self {
            canvas_width,
            difficulty_ceiling,
            initial_grid_size: Self::DEFAULT_GRID_SIZE,
            grid_growth_interval: Self::DEFAULT_GROWTH_INTERVAL,
            gutter: Self::DEFAULT_GUTTER,
        }
    }

    pub fn new(canvas_width: f64, difficulty_ceiling: Level) -> Self {
        Self::new_unchecked(canvas_width, difficulty_ceiling.max(1))
    }

    /// Square play area that fits the viewport, capped at 500px.
    pub fn for_viewport(viewport_width: f64) -> Self {
        Self::new(
            Self::canvas_width_for(viewport_width),
            Self::DEFAULT_CEILING,
        )
    }

    pub fn canvas_width_for(viewport_width: f64) -> f64 {
        (viewport_width - Self::VIEWPORT_MARGIN).min(Self::MAX_CANVAS_WIDTH)
    }

    pub fn with_ceiling(self, difficulty_ceiling: Level) -> Self {
        Self {
            difficulty_ceiling: difficulty_ceiling.max(1),
            ..self
        }
    }

    pub fn with_grid(self, initial_grid_size: GridSize, grid_growth_interval: Level) -> Self {
        Self {
            initial_grid_size: initial_grid_size.max(1),
            grid_growth_interval: grid_growth_interval.max(1),
            ..self
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(Self::MAX_CANVAS_WIDTH, Self::DEFAULT_CEILING)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Playing,
    GameOver,
    Won,
}

impl Phase {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver | Self::Won)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub difficulty: Level,
    pub difficulty_ceiling: Level,
    pub grid_size: GridSize,
    pub phase: Phase,
}

impl GameState {
    pub const fn new(config: &GameConfig) -> Self {
        Self {
            difficulty: 1,
            difficulty_ceiling: config.difficulty_ceiling,
            grid_size: config.initial_grid_size,
            phase: Phase::Playing,
        }
    }

    /// Rounds cleared so far.
    pub const fn score(&self) -> Level {
        self.difficulty.saturating_sub(1)
    }

    pub const fn tile_count(&self) -> usize {
        (self.grid_size as usize).saturating_mul(self.grid_size as usize)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActivateOutcome {
    Ignored,
    NextRound,
    GameOver { score: Level },
    Won,
    Restarted,
}

impl ActivateOutcome {
    pub const fn has_update(self) -> bool {
        use ActivateOutcome::*;
        match self {
            Ignored => false,
            NextRound => true,
            GameOver { .. } => true,
            Won => true,
            Restarted => true,
        }
    }

    /// Whether an end screen was put up by this activation.
    pub const fn is_finish(self) -> bool {
        matches!(self, Self::GameOver { .. } | Self::Won)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn narrow_viewport_game_plays_to_game_over() {
        let config = GameConfig::for_viewport(320.0);
        assert_eq!(config.canvas_width, 310.0);

        let mut game = RoundController::new(config, 42, Scene::square(config.canvas_width));
        assert_eq!(game.tiles().len(), 16);

        let correct = game.correct_index();
        assert_eq!(game.activate_tile(correct), Ok(ActivateOutcome::NextRound));
        let wrong = (game.correct_index() + 1) % game.state().tile_count();
        assert_eq!(
            game.activate_tile(wrong),
            Ok(ActivateOutcome::GameOver { score: 1 })
        );
        assert_eq!(game.renderer().top_layer(), Some(Layer::GameOver));
        assert_eq!(game.restart(), ActivateOutcome::Restarted);
    }
}
