//! Game state contract for UCT search.
//!
//! Games implement `GameState` to define their rules:
//! - What moves are legal
//! - How a move modifies the position
//! - The terminal result for each player
//!
//! The search never inspects state internals; it only calls this contract.

use std::fmt::Debug;

use crate::core::error::SearchError;
use crate::core::player::PlayerId;

/// Abstract two-player, alternating-turn, perfect-information game position.
///
/// The search works against value-semantics copies: `Clone` must produce an
/// independent state whose mutation never affects the original. Moves are
/// applied in place on such copies.
///
/// ## Implementation Notes
///
/// - `legal_moves`: return an empty vec exactly when the position is
///   terminal; the order must be stable for a fixed state
/// - `apply_move`: reject moves outside the current legal set with
///   `SearchError::InvalidMove`; must be deterministic
/// - `result`: only meaningful at terminal positions; 1.0 means `player`
///   won, 0.0 lost, 0.5 a draw
pub trait GameState: Clone {
    /// The type representing one move of the game.
    type Move: Clone + PartialEq + Debug;

    /// All legal moves from this position. Empty iff the position is terminal.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Apply a move in place, advancing to the successor position.
    fn apply_move(&mut self, mv: &Self::Move) -> Result<(), SearchError<Self::Move>>;

    /// Terminal result in [0.0, 1.0] from `player`'s perspective.
    fn result(&self, player: PlayerId) -> f64;

    /// The player who made the most recent move into this position.
    fn player_just_moved(&self) -> PlayerId;

    /// Whether the position is terminal (no legal moves remain).
    fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }
}
