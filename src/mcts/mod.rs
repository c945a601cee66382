//! Monte Carlo Tree Search with UCB-based selection (UCT).
//!
//! ## Overview
//!
//! The driver repeatedly runs four phases against one tree rooted at the
//! current position:
//!
//! - **Selection**: descend through fully expanded nodes by UCB score
//! - **Expansion**: turn one random untried move into a new child
//! - **Simulation**: random playout from the new position to a terminal one
//! - **Backpropagation**: score the outcome at every level from that
//!   level's own mover's perspective
//!
//! After the iteration budget is spent, the root move with the most visits
//! is returned.
//!
//! ## Usage
//!
//! ```rust
//! use uct_search::core::{GameState, PlayerId, SearchError};
//! use uct_search::mcts::{SearchConfig, UctSearch};
//!
//! // Single-pile Nim: take 1-3 chips, taking the last chip wins.
//! #[derive(Clone, Debug)]
//! struct Nim {
//!     chips: u32,
//!     just_moved: PlayerId,
//! }
//!
//! impl GameState for Nim {
//!     type Move = u32;
//!
//!     fn legal_moves(&self) -> Vec<u32> {
//!         (1..=3).filter(|&n| n <= self.chips).collect()
//!     }
//!
//!     fn apply_move(&mut self, mv: &u32) -> Result<(), SearchError<u32>> {
//!         if !self.legal_moves().contains(mv) {
//!             return Err(SearchError::InvalidMove(*mv));
//!         }
//!         self.chips -= mv;
//!         self.just_moved = self.just_moved.opponent();
//!         Ok(())
//!     }
//!
//!     fn result(&self, player: PlayerId) -> f64 {
//!         if self.just_moved == player { 1.0 } else { 0.0 }
//!     }
//!
//!     fn player_just_moved(&self) -> PlayerId {
//!         self.just_moved
//!     }
//! }
//!
//! let state = Nim { chips: 10, just_moved: PlayerId::new(1) };
//!
//! let mut search = UctSearch::new(SearchConfig::default().with_seed(7));
//! let best = search.search(&state, 1000)?;
//!
//! assert!(state.legal_moves().contains(&best));
//! # Ok::<(), SearchError<u32>>(())
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::SearchConfig;
pub use node::{NodeId, UctNode};
pub use search::{uct_search, UctSearch};
pub use stats::SearchStats;
pub use tree::{SearchTree, TreeStats};
