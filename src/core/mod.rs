//! Core types: players, game state contract, RNG, errors.
//!
//! This module contains the game-agnostic building blocks the search is
//! written against. Concrete games live outside the crate and plug in
//! through the `GameState` trait.

pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use error::SearchError;
pub use player::PlayerId;
pub use rng::SearchRng;
pub use state::GameState;
