//! Core engine types: players, coordinates, configuration, errors.
//!
//! This module contains the fundamental building blocks the board, rules,
//! and session layers share. Rule parameters live in `GameConfig` rather
//! than constants so collaborators can configure variants.

pub mod config;
pub mod coord;
pub mod error;
pub mod player;

pub use config::{GameConfig, GamePhase};
pub use coord::Coord;
pub use error::{MoveViolation, PlacementViolation, RuleError};
pub use player::{PlayerId, PlayerPair};
