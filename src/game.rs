//! Match flow: screens, turn sequencing, statistics, win detection.

use crate::ai::Opponent;
use crate::board::Board;
use crate::common::{GameError, ShotOutcome};
use crate::config::Settings;
use crate::ship::Orientation;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Screens of the match state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    PlacingChoice,
    Placing,
    Playing,
    GameOver,
}

/// Outcome of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    PlayerWon,
    OpponentWon,
}

/// Player-side shot statistics. Repeat shots never register here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub shots: u32,
    pub hits: u32,
    pub misses: u32,
    pub consecutive_misses: u32,
}

impl Stats {
    fn record(&mut self, hit: bool) {
        self.shots += 1;
        if hit {
            self.hits += 1;
            self.consecutive_misses = 0;
        } else {
            self.misses += 1;
            self.consecutive_misses += 1;
        }
    }

    /// Hit percentage, if any shot has been fired.
    pub fn accuracy(&self) -> Option<f64> {
        if self.shots == 0 {
            None
        } else {
            Some(100.0 * f64::from(self.hits) / f64::from(self.shots))
        }
    }
}

/// One shot fired by the opponent engine during an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotEvent {
    pub cell: (usize, usize),
    pub outcome: ShotOutcome,
}

/// Everything that happened in response to one player shot: the player's
/// outcome and, if the turn passed, the opponent's full volley.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub player: ShotOutcome,
    pub opponent_shots: Vec<ShotEvent>,
    pub status: GameStatus,
}

/// Match controller. Owns both boards, the opponent engine, and the
/// manual-placement cursor; all mutation flows through its methods.
pub struct Game {
    settings: Settings,
    player_board: Board,
    opponent_board: Board,
    opponent: Opponent,
    screen: Screen,
    status: GameStatus,
    stats: Stats,
    pending_ships: Vec<usize>,
    next_ship: usize,
}

impl Game {
    /// Create a controller on the menu screen with validated settings.
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;
        let size = settings.grid_size;
        Ok(Game {
            settings,
            player_board: Board::empty(true, size),
            opponent_board: Board::empty(false, size),
            opponent: Opponent::new(),
            screen: Screen::Menu,
            status: GameStatus::InProgress,
            stats: Stats::default(),
            pending_ships: Vec::new(),
            next_ship: 0,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn opponent_board(&self) -> &Board {
        &self.opponent_board
    }

    /// Length of the next ship to place manually, if any remain.
    pub fn current_ship(&self) -> Option<usize> {
        self.pending_ships.get(self.next_ship).copied()
    }

    /// Ships still waiting for manual placement.
    pub fn remaining_to_place(&self) -> usize {
        self.pending_ships.len() - self.next_ship
    }

    /// Menu -> placement choice.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.expect_screen(Screen::Menu)?;
        self.screen = Screen::PlacingChoice;
        Ok(())
    }

    /// Place both fleets at random and start the battle.
    pub fn choose_random_placement<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.expect_screen(Screen::PlacingChoice)?;
        let staging = Board::new(false, &self.settings, rng)?;
        let opponent_board = Board::new(false, &self.settings, rng)?;
        self.reset_match(opponent_board);
        self.player_board.clone_placement_from(&staging);
        self.next_ship = self.pending_ships.len();
        self.screen = Screen::Playing;
        log::debug!("random placement chosen, battle started");
        Ok(())
    }

    /// Start manual placement on an empty player board.
    pub fn choose_manual_placement<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.expect_screen(Screen::PlacingChoice)?;
        let opponent_board = Board::new(false, &self.settings, rng)?;
        self.reset_match(opponent_board);
        self.screen = Screen::Placing;
        Ok(())
    }

    /// Try to place the next pending ship at the given anchor. Returns
    /// whether the placement was accepted; a rejected anchor leaves the
    /// cursor where it was.
    pub fn place_current_ship(
        &mut self,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<bool, GameError> {
        self.expect_screen(Screen::Placing)?;
        let Some(length) = self.current_ship() else {
            return Ok(false);
        };
        if !self.player_board.can_place(x, y, length, orientation) {
            return Ok(false);
        }
        self.player_board.place(x, y, length, orientation)?;
        self.next_ship += 1;
        Ok(true)
    }

    /// Replace any manual progress with a full random placement.
    pub fn randomize_placement<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.expect_screen(Screen::Placing)?;
        let staging = Board::new(false, &self.settings, rng)?;
        self.player_board.clone_placement_from(&staging);
        self.next_ship = self.pending_ships.len();
        Ok(())
    }

    /// Drop all manual progress and start placing from the first ship.
    pub fn clear_placement(&mut self) -> Result<(), GameError> {
        self.expect_screen(Screen::Placing)?;
        self.player_board.clear();
        self.next_ship = 0;
        Ok(())
    }

    /// Placing -> playing. The whole fleet must have been consumed.
    pub fn begin_battle(&mut self) -> Result<(), GameError> {
        self.expect_screen(Screen::Placing)?;
        let remaining = self.remaining_to_place();
        if remaining > 0 {
            return Err(GameError::FleetIncomplete { remaining });
        }
        self.screen = Screen::Playing;
        log::debug!("manual placement complete, battle started");
        Ok(())
    }

    /// Resolve one player shot and, if the turn passes, the opponent's
    /// entire volley. The opponent fires in a loop until it fails to hit or
    /// the match ends; win is checked after every shot and ends the match
    /// immediately, even mid-volley.
    pub fn fire<R: Rng>(
        &mut self,
        x: usize,
        y: usize,
        rng: &mut R,
    ) -> Result<Exchange, GameError> {
        self.expect_screen(Screen::Playing)?;
        let player = self.opponent_board.receive_shot(x, y);
        if player == ShotOutcome::Repeat {
            // already-resolved cell: no statistics, turn retained
            return Ok(Exchange {
                player,
                opponent_shots: Vec::new(),
                status: self.status,
            });
        }
        self.stats.record(player.is_hit());
        let mut opponent_shots = Vec::new();
        if self.opponent_board.all_sunk() {
            self.status = GameStatus::PlayerWon;
            self.screen = Screen::GameOver;
            log::info!("player wins after {} shots", self.stats.shots);
        } else if !player.is_hit() {
            opponent_shots = self.opponent_volley(rng);
        }
        Ok(Exchange {
            player,
            opponent_shots,
            status: self.status,
        })
    }

    /// Return to the menu from any screen.
    pub fn to_menu(&mut self) {
        self.screen = Screen::Menu;
    }

    /// Swap in new settings; only possible on the menu screen.
    pub fn apply_settings(&mut self, settings: Settings) -> Result<(), GameError> {
        self.expect_screen(Screen::Menu)?;
        settings.validate()?;
        let size = settings.grid_size;
        self.settings = settings;
        self.player_board = Board::empty(true, size);
        self.opponent_board = Board::empty(false, size);
        Ok(())
    }

    fn opponent_volley<R: Rng>(&mut self, rng: &mut R) -> Vec<ShotEvent> {
        let mut events = Vec::new();
        loop {
            let (x, y) = self
                .opponent
                .get_move(rng, &self.player_board, self.settings.difficulty);
            let outcome = self.player_board.receive_shot(x, y);
            events.push(ShotEvent {
                cell: (x, y),
                outcome,
            });
            if self.player_board.all_sunk() {
                self.status = GameStatus::OpponentWon;
                self.screen = Screen::GameOver;
                log::info!("opponent wins after a {}-shot volley", events.len());
                break;
            }
            if !outcome.is_hit() {
                break;
            }
        }
        events
    }

    /// Fresh boards, cleared targeting state, zeroed statistics.
    fn reset_match(&mut self, opponent_board: Board) {
        self.player_board = Board::empty(true, self.settings.grid_size);
        self.opponent_board = opponent_board;
        self.opponent.reset();
        self.stats = Stats::default();
        self.status = GameStatus::InProgress;
        self.pending_ships = self.settings.ship_set.clone();
        self.next_ship = 0;
    }

    fn expect_screen(&self, screen: Screen) -> Result<(), GameError> {
        if self.screen == screen {
            Ok(())
        } else {
            Err(GameError::Screen {
                current: self.screen,
            })
        }
    }
}
