//! Game session: the mutable state machine.
//!
//! ## GameSession
//!
//! Owns the board and sequences rule checks into state transitions. A session
//! is created fresh per game, mutated only through [`place`], [`select`] and
//! [`move_selected`] (or the [`click`]/[`apply`] routers), and reports every
//! transition as an [`Outcome`] for the presentation layer to render.
//!
//! The session is single-owner and synchronous: every operation runs to
//! completion or rejects, and no operation blocks. Embedding in a concurrent
//! host requires external synchronization.
//!
//! [`place`]: GameSession::place
//! [`select`]: GameSession::select
//! [`move_selected`]: GameSession::move_selected
//! [`click`]: GameSession::click
//! [`apply`]: GameSession::apply

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::core::{
    Coord, GameConfig, GamePhase, MoveViolation, PlacementViolation, PlayerId, PlayerPair,
    RuleError,
};
use crate::rules;

/// What the caller wants to do with a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Place a stone (placement phase).
    Place,
    /// Select one of the current player's stones (movement phase).
    Select,
    /// Move the selected stone (movement phase).
    Move,
}

/// The result of an accepted action.
///
/// Rejections are reported as [`RuleError`] values instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A stone was placed.
    Placed {
        at: Coord,
        /// The placement completed a pair and control passed to the opponent.
        turn_passed: bool,
        /// Both allotments are now exhausted; the game entered the movement
        /// phase. Reported exactly once per game.
        phase_changed: bool,
    },
    /// A stone of the current player is now selected.
    Selected { at: Coord },
    /// The clicked cell holds no stone of the current player; nothing
    /// changed. Not an error — the UI may re-click freely.
    SelectionIgnored { at: Coord },
    /// The selected stone slid from `from` to `to`, capturing at most one
    /// opponent stone.
    Moved {
        from: Coord,
        to: Coord,
        captured: Option<Coord>,
    },
    /// The move dropped the opponent to the loss threshold. The session is
    /// terminal; no turn was taken.
    GameOver {
        winner: PlayerId,
        from: Coord,
        to: Coord,
        captured: Option<Coord>,
    },
}

/// Mutable game state for one Bolotudu game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    current_player: PlayerId,
    phase: GamePhase,
    stones_on_board: PlayerPair<u32>,
    remaining_pairs: PlayerPair<u32>,
    stones_left_this_turn: u32,
    selected: Option<Coord>,
    winner: Option<PlayerId>,
}

impl GameSession {
    /// Create a fresh session. The first player places first.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            board: Board::new(config.rows, config.cols),
            current_player: PlayerId::new(0),
            phase: GamePhase::Placement,
            stones_on_board: PlayerPair::with_value(0),
            remaining_pairs: PlayerPair::with_value(config.pairs_per_player),
            stones_left_this_turn: config.stones_per_turn,
            selected: None,
            winner: None,
            config,
        }
    }

    /// Reset every field for a new game with the same configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The stone pending a move, if any. Always one of the current player's
    /// stones while set.
    #[must_use]
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// The winner, once the session is terminal.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Live stones a player has on the board.
    #[must_use]
    pub fn stones_on_board(&self, player: PlayerId) -> u32 {
        self.stones_on_board[player]
    }

    /// Placement pairs a player has left.
    #[must_use]
    pub fn remaining_pairs(&self, player: PlayerId) -> u32 {
        self.remaining_pairs[player]
    }

    /// Stones still to place before the current placement turn ends.
    #[must_use]
    pub fn stones_left_this_turn(&self) -> u32 {
        self.stones_left_this_turn
    }

    /// Cells where the current player could legally place a stone.
    #[must_use]
    pub fn legal_placements(&self) -> Vec<Coord> {
        rules::legal_placements(&self.board, self.current_player, self.config.line_length)
    }

    /// Legal (from, to) slides for the current player.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(Coord, Coord)> {
        rules::legal_moves(&self.board, self.current_player)
    }

    // === Guards ===

    fn ensure_live(&self) -> Result<(), RuleError> {
        match self.winner {
            Some(winner) => Err(RuleError::SessionOver { winner }),
            None => Ok(()),
        }
    }

    fn ensure_phase(&self, expected: GamePhase) -> Result<(), RuleError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(RuleError::PhaseMismatch {
                expected,
                actual: self.phase,
            })
        }
    }

    // === Operations ===

    /// Place a stone for the current player.
    ///
    /// Rejects (mutating nothing) when the cell is occupied, the player's
    /// allotment is exhausted, or the stone would complete a line. A turn
    /// passes once the player has placed a full pair; the game enters the
    /// movement phase as soon as both allotments reach zero.
    pub fn place(&mut self, at: Coord) -> Result<Outcome, RuleError> {
        self.ensure_live()?;
        self.ensure_phase(GamePhase::Placement)?;

        let player = self.current_player;
        let cell = self.board.get(at)?;
        if !cell.is_empty() {
            return Err(RuleError::InvalidPlacement {
                at,
                reason: PlacementViolation::CellOccupied,
            });
        }
        if self.remaining_pairs[player] == 0 {
            return Err(RuleError::InvalidPlacement {
                at,
                reason: PlacementViolation::NoPairsRemaining,
            });
        }
        if !rules::no_three_in_line(&self.board, at, player, self.config.line_length) {
            return Err(RuleError::InvalidPlacement {
                at,
                reason: PlacementViolation::WouldFormLine,
            });
        }

        self.board.set(at, Cell::Stone(player))?;
        self.stones_on_board[player] += 1;
        self.stones_left_this_turn -= 1;

        let mut turn_passed = false;
        if self.stones_left_this_turn == 0 {
            self.remaining_pairs[player] -= 1;
            self.stones_left_this_turn = self.config.stones_per_turn;
            self.next_turn();
            turn_passed = true;
        }

        let mut phase_changed = false;
        if self.remaining_pairs.total() == 0 {
            self.phase = GamePhase::Movement;
            phase_changed = true;
        }

        Ok(Outcome::Placed {
            at,
            turn_passed,
            phase_changed,
        })
    }

    /// Select one of the current player's stones to move.
    ///
    /// Selecting a cell that does not hold a current-player stone is a no-op,
    /// not an error. Selecting a different own stone re-selects.
    pub fn select(&mut self, at: Coord) -> Result<Outcome, RuleError> {
        self.ensure_live()?;
        self.ensure_phase(GamePhase::Movement)?;

        let cell = self.board.get(at)?;
        if cell.stone() == Some(self.current_player) {
            self.selected = Some(at);
            Ok(Outcome::Selected { at })
        } else {
            Ok(Outcome::SelectionIgnored { at })
        }
    }

    /// Move the selected stone to `to`.
    ///
    /// The destination must be empty and adjacent along a row or column.
    /// A rejected move consumes the pending selection (an out-of-bounds
    /// destination is the exception: a pure no-op). On success the stone
    /// slides; if the slide completed a line that did not exist through the
    /// destination before the move, the first opponent stone beyond the
    /// line's endpoints (start side first) is captured — at most one stone
    /// per move. The session turns terminal the instant the opponent's
    /// count reaches the loss threshold.
    pub fn move_selected(&mut self, to: Coord) -> Result<Outcome, RuleError> {
        self.ensure_live()?;
        self.ensure_phase(GamePhase::Movement)?;
        self.board.get(to)?;

        let Some(from) = self.selected else {
            return Err(RuleError::InvalidMove {
                to,
                reason: MoveViolation::NothingSelected,
            });
        };

        if !rules::is_adjacent_move(&self.board, from, to) {
            self.selected = None;
            let reason = if self.board.is_empty(to) {
                MoveViolation::NotAdjacent
            } else {
                MoveViolation::DestinationOccupied
            };
            return Err(RuleError::InvalidMove { to, reason });
        }

        let player = self.current_player;
        let snapshot = self.board.clone();

        self.board.set(from, Cell::Empty)?;
        self.board.set(to, Cell::Stone(player))?;
        self.selected = None;

        let mut captured = None;
        if let Some(line) = rules::line_through(&self.board, to, self.config.line_length) {
            // Capture only when the line is newly formed by this move.
            if rules::line_through(&snapshot, to, self.config.line_length).is_none() {
                let candidates = rules::adjacent_opponent_stones(&self.board, to, line.axis);
                if let Some(&victim) = candidates.first() {
                    self.board.set(victim, Cell::Empty)?;
                    self.stones_on_board[player.opponent()] -= 1;
                    captured = Some(victim);
                }
            }
        }

        if self.stones_on_board[player.opponent()] <= self.config.loss_threshold {
            self.winner = Some(player);
            return Ok(Outcome::GameOver {
                winner: player,
                from,
                to,
                captured,
            });
        }

        self.next_turn();
        Ok(Outcome::Moved { from, to, captured })
    }

    /// Route a raw cell click: placement clicks place; movement clicks
    /// select when nothing is selected and otherwise attempt the move.
    pub fn click(&mut self, at: Coord) -> Result<Outcome, RuleError> {
        match self.phase {
            GamePhase::Placement => self.place(at),
            GamePhase::Movement => {
                if self.selected.is_none() {
                    self.select(at)
                } else {
                    self.move_selected(at)
                }
            }
        }
    }

    /// Dispatch an explicit intent, for UIs that track it themselves.
    pub fn apply(&mut self, intent: Intent, at: Coord) -> Result<Outcome, RuleError> {
        match intent {
            Intent::Place => self.place(at),
            Intent::Select => self.select(at),
            Intent::Move => self.move_selected(at),
        }
    }

    /// Flip the current player. Called exactly once per completed
    /// placement pair or completed move, never on a rejected action.
    fn next_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}
