//! Game state module - the turn controller
//!
//! Owns the grid, the score, the won/over flags and the random source. All
//! mutation goes through [`GameState::handle_command`] (or the underlying
//! [`GameState::move_tiles`] / [`GameState::restart`]), one command at a time.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::grid::Grid;
use crate::resolver::{resolve_move, MoveOutcome};
use crate::snapshot::GameSnapshot;
use crate::spawner::spawn_one;
use crate::types::{Command, Direction, DEFAULT_GRID_SIZE, START_TILES};

/// Coarse lifecycle state derived from the won/over flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Won,
    Over,
}

#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: StdRng,
    /// Seed the random source was created from (reported in snapshots).
    seed: u64,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    score: u32,
    /// Score gained by the most recent effective move.
    last_gain: u32,
    won: bool,
    over: bool,
}

impl GameState {
    /// Set up a new game on a `size` x `size` grid with two starting tiles
    pub fn new(size: u8, seed: u64) -> Self {
        let mut state = Self::with_grid(Grid::new(size), seed);
        state.add_start_tiles();
        log::info!("new {size}x{size} game (seed {seed})");
        state
    }

    /// Start from a prepared grid without spawning anything.
    ///
    /// The over flag is evaluated immediately so a stuck grid starts as Over.
    pub fn with_grid(grid: Grid, seed: u64) -> Self {
        let over = !grid.moves_available();
        Self {
            grid,
            rng: StdRng::seed_from_u64(seed),
            seed,
            episode_id: 0,
            score: 0,
            last_gain: 0,
            won: false,
            over,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.over {
            GameStatus::Over
        } else {
            GameStatus::Active
        }
    }

    /// Moves are accepted only while neither won nor over
    pub fn playable(&self) -> bool {
        !self.won && !self.over
    }

    pub fn moves_available(&self) -> bool {
        self.grid.moves_available()
    }

    fn add_start_tiles(&mut self) {
        for _ in 0..START_TILES {
            spawn_one(&mut self.grid, &mut self.rng);
        }
    }

    /// Slide the tiles in `direction`.
    ///
    /// Returns the resolver outcome when the move changed the grid, `None`
    /// when it was ignored (game finished) or had no effect.
    pub fn move_tiles(&mut self, direction: Direction) -> Option<MoveOutcome> {
        if !self.playable() {
            return None;
        }

        let outcome = resolve_move(&mut self.grid, direction);
        if !outcome.moved {
            return None;
        }

        self.score += outcome.score_gained;
        self.last_gain = outcome.score_gained;
        if outcome.reached_win_value {
            self.won = true;
            log::info!("reached the winning tile (score {})", self.score);
        }

        spawn_one(&mut self.grid, &mut self.rng);

        if !self.grid.moves_available() {
            self.over = true;
            log::info!("game over (score {})", self.score);
        }

        log::debug!(
            "moved {}: +{} (score {})",
            direction.as_str(),
            outcome.score_gained,
            self.score
        );
        Some(outcome)
    }

    /// Throw away the current game and set up a fresh one.
    ///
    /// The random source keeps running, so consecutive games differ.
    pub fn restart(&mut self) {
        self.grid = Grid::new(self.grid.size());
        self.score = 0;
        self.last_gain = 0;
        self.won = false;
        self.over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.add_start_tiles();
        log::info!("restarted (episode {})", self.episode_id);
    }

    /// Apply one command, returning the snapshot it emits.
    ///
    /// Restart always emits; a move emits only when it changed the grid.
    pub fn handle_command(&mut self, command: Command) -> Option<GameSnapshot> {
        match command {
            Command::Move(direction) => self.move_tiles(direction).map(|_| self.snapshot()),
            Command::Restart => {
                self.restart();
                Some(self.snapshot())
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.write_grid(&self.grid);
        out.score = self.score;
        out.score_gained = self.last_gain;
        out.won = self.won;
        out.over = self.over;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, 1)
    }
}
