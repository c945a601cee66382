//! # uct-search
//!
//! A generic UCT (Upper Confidence bound applied to Trees) Monte Carlo tree
//! search engine for two-player, alternating-turn, perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: the engine only sees the `GameState` contract.
//!    Board representations, rendering, and play loops live outside.
//!
//! 2. **Deterministic**: every randomized choice draws from an explicit
//!    seeded RNG, so a search is reproducible from its config.
//!
//! 3. **Strict Ownership**: the tree is an arena of nodes with index-based
//!    parent/child links; no reference counting, no ownership cycles.
//!
//! ## Modules
//!
//! - `core`: player identity, game state contract, RNG, errors
//! - `mcts`: search tree, UCT driver, configuration, diagnostics

pub mod core;
pub mod mcts;

// Re-export commonly used types
pub use crate::core::{GameState, PlayerId, SearchError, SearchRng};

pub use crate::mcts::{
    uct_search, NodeId, SearchConfig, SearchStats, SearchTree, TreeStats, UctNode, UctSearch,
};
