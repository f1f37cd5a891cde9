use ndarray::Array2;
use rand::prelude::*;

use crate::*;

/// Owns one game session: state, the current round's tiles and the renderer
/// they are drawn on.
#[derive(Clone, Debug)]
pub struct RoundController<R> {
    config: GameConfig,
    state: GameState,
    tiles: Array2<Tile>,
    correct_index: usize,
    rng: SmallRng,
    renderer: R,
}

impl<R: Renderer> RoundController<R> {
    /// Creates the controller and immediately starts a new game.
    pub fn new(config: GameConfig, seed: u64, renderer: R) -> Self {
        let mut controller = Self {
            config,
            state: GameState::new(&config),
            tiles: Array2::default((0, 0)),
            correct_index: 0,
            rng: SmallRng::seed_from_u64(seed),
            renderer,
        };
        controller.start_new_game();
        controller
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Current round's tiles, indexed `[row, column]`.
    pub fn tiles(&self) -> &Array2<Tile> {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<Tile> {
        let size = self.tiles.ncols();
        if size == 0 {
            return None;
        }
        self.tiles.get([index / size, index % size]).copied()
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn layout(&self) -> GridLayout {
        GridLayout::new(
            self.config.canvas_width,
            self.state.grid_size,
            self.config.gutter,
        )
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Resets the session, removes every tile and end screen, and deals the
    /// first round.
    pub fn start_new_game(&mut self) {
        self.state = GameState::new(&self.config);
        self.renderer.clear(Layer::GameOver);
        self.renderer.clear(Layer::Win);
        log::info!("new game, ceiling {}", self.state.difficulty_ceiling);
        self.deal_round();
    }

    /// Deals a fresh round for the current difficulty.
    pub fn start_round(&mut self) -> Result<()> {
        if !self.state.phase.is_playing() {
            return Err(GameError::NotPlaying);
        }
        self.deal_round();
        Ok(())
    }

    /// Handles a pointer-down or touch-start on tile `index`.
    ///
    /// Outside of [`Phase::Playing`] this does nothing.
    pub fn activate_tile(&mut self, index: usize) -> Result<ActivateOutcome> {
        if !self.state.phase.is_playing() {
            log::trace!("tile {} ignored while {:?}", index, self.state.phase);
            return Ok(ActivateOutcome::Ignored);
        }

        let tile = self.tile(index).ok_or(GameError::InvalidTile)?;
        if tile.is_correct {
            Ok(self.level_up())
        } else {
            Ok(self.game_over())
        }
    }

    /// Handles an activation anywhere on an end screen.
    pub fn restart(&mut self) -> ActivateOutcome {
        if !self.state.phase.is_finished() {
            log::trace!("restart ignored while playing");
            return ActivateOutcome::Ignored;
        }
        self.start_new_game();
        ActivateOutcome::Restarted
    }

    pub fn dispatch(&mut self, action: Action) -> Result<ActivateOutcome> {
        match action {
            Action::ActivateTile(index) => self.activate_tile(index),
            Action::Restart => Ok(self.restart()),
        }
    }

    fn level_up(&mut self) -> ActivateOutcome {
        self.state.difficulty += 1;

        if self.state.difficulty > self.state.difficulty_ceiling {
            self.state.phase = Phase::Won;
            log::info!("won after {} rounds", self.state.score());
            EndScreen::Won.render(&mut self.renderer, self.config.canvas_width);
            return ActivateOutcome::Won;
        }

        if self.state.difficulty.checked_rem(self.config.grid_growth_interval) == Some(0) {
            self.state.grid_size += 1;
        }
        self.deal_round();
        ActivateOutcome::NextRound
    }

    fn game_over(&mut self) -> ActivateOutcome {
        let score = self.state.score();
        self.state.phase = Phase::GameOver;
        log::info!("game over, score {}", score);
        EndScreen::GameOver { score }.render(&mut self.renderer, self.config.canvas_width);
        ActivateOutcome::GameOver { score }
    }

    fn deal_round(&mut self) {
        let GameState {
            difficulty,
            difficulty_ceiling,
            grid_size,
            ..
        } = self.state;

        let colors = ColorSample::generate(difficulty, difficulty_ceiling, &mut self.rng);
        let layout = self.layout();
        let count = self.state.tile_count();
        let correct_index = random_range(&mut self.rng, 0.0, count as f64) as usize;

        self.renderer.clear(Layer::Level);

        let side = grid_size as usize;
        self.tiles = Array2::from_shape_fn((side, side), |(row, col)| {
            Tile::at_index(row * side + col, grid_size, correct_index)
        });
        self.correct_index = correct_index;

        log::debug!(
            "round {}: {}x{} grid, correct tile {}, offset {}",
            difficulty,
            grid_size,
            grid_size,
            correct_index,
            colors.channel_offset()
        );

        for (index, tile) in self.tiles.iter().enumerate() {
            let (x, y) = layout.origin(tile.cell());
            self.renderer.add(
                Layer::Level,
                Node::Rect(Rect {
                    x,
                    y,
                    width: layout.tile_side(),
                    height: layout.tile_side(),
                    fill: Fill::Rgb(colors.for_tile(tile.is_correct)),
                    on_activate: Some(Action::ActivateTile(index)),
                    hover_cursor: true,
                }),
            );
        }
        self.renderer.draw();
    }
}
