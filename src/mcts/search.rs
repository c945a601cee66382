//! Core UCT search algorithm.
//!
//! Each iteration runs the four phases in order: selection down the tree,
//! expansion of one untried move, a random rollout to a terminal position,
//! and backpropagation of the terminal result along the path to the root.
//! The tree lives only for the duration of one `search` call.

use std::time::Instant;

use log::debug;

use crate::core::{GameState, SearchError, SearchRng};

use super::config::SearchConfig;
use super::node::UctNode;
use super::stats::SearchStats;
use super::tree::SearchTree;

/// UCT search context.
///
/// Owns the configuration, the RNG, and per-call statistics. The search
/// tree itself is rebuilt from scratch on every `search` call and dropped
/// when the call returns.
pub struct UctSearch {
    /// Search configuration.
    config: SearchConfig,

    /// RNG for expansion picks and rollouts.
    rng: SearchRng,

    /// Statistics from the most recent search.
    stats: SearchStats,
}

impl UctSearch {
    /// Create a new search context. The RNG is seeded from the config.
    pub fn new(config: SearchConfig) -> Self {
        let rng = SearchRng::new(config.seed);
        Self {
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Run UCT for exactly `iterations` iterations from `root_state` and
    /// return the most-visited root move.
    ///
    /// `root_state` is never mutated; every iteration works on a clone.
    ///
    /// Fails with `SearchError::NoMoveAvailable` when the root position has
    /// no legal moves, or when `iterations` is zero and the root therefore
    /// never gained a child.
    pub fn search<S: GameState>(
        &mut self,
        root_state: &S,
        iterations: u32,
    ) -> Result<S::Move, SearchError<S::Move>> {
        let tree = self.run(root_state, iterations)?;
        let best = tree
            .best_move()
            .cloned()
            .ok_or(SearchError::NoMoveAvailable)?;

        debug!(
            "uct search: {} iterations, {} nodes, best move {:?} ({:.0} iter/s)",
            self.stats.iterations,
            tree.len(),
            best,
            self.stats.iterations_per_second(),
        );
        Ok(best)
    }

    /// Build the search tree for `iterations` iterations.
    ///
    /// Split out from `search` so tests can inspect the finished tree
    /// before it is dropped.
    fn run<S: GameState>(
        &mut self,
        root_state: &S,
        iterations: u32,
    ) -> Result<SearchTree<S::Move>, SearchError<S::Move>> {
        let start = Instant::now();
        self.stats.reset();

        let root_moves = root_state.legal_moves();
        if root_moves.is_empty() {
            return Err(SearchError::NoMoveAvailable);
        }

        let root = UctNode::root(root_state.player_just_moved(), root_moves);
        // At most one node is added per iteration.
        let mut tree = SearchTree::with_capacity(root, iterations as usize + 1);

        for _ in 0..iterations {
            self.iteration(&mut tree, root_state)?;
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        Ok(tree)
    }

    /// One select/expand/simulate/backpropagate cycle.
    fn iteration<S: GameState>(
        &mut self,
        tree: &mut SearchTree<S::Move>,
        root_state: &S,
    ) -> Result<(), SearchError<S::Move>> {
        let mut node = tree.root();
        let mut scratch = root_state.clone();
        let mut depth = 0u16;

        // Selection: descend while every move is expanded and children exist.
        while tree.get(node).is_fully_expanded() && tree.get(node).has_children() {
            node = tree.select_child(node, self.config.exploration_constant);
            depth += 1;

            let mv = tree
                .get(node)
                .mv
                .clone()
                .expect("selected child carries its incoming move");
            scratch.apply_move(&mv)?;
        }

        // Expansion: pick one untried move uniformly at random.
        let untried_count = tree.get(node).untried_moves.len();
        if untried_count > 0 {
            let idx = self.rng.gen_range_usize(0..untried_count);
            let mv = tree.get(node).untried_moves[idx].clone();
            scratch.apply_move(&mv)?;

            node = tree.add_child(node, idx, scratch.player_just_moved(), scratch.legal_moves());
            depth += 1;
            self.stats.nodes_expanded += 1;
        }

        if depth > self.stats.max_depth {
            self.stats.max_depth = depth;
        }

        // Simulation: random playout to a terminal position.
        // This phase never touches the tree.
        let mut rollout_rng = self.rng.fork();
        loop {
            let moves = scratch.legal_moves();
            let Some(mv) = rollout_rng.choose(&moves) else {
                break;
            };
            scratch.apply_move(mv)?;
        }
        self.stats.simulations += 1;

        // Backpropagation: walk up to and including the root, scoring the
        // terminal outcome from each level's own mover's perspective.
        let mut current = node;
        loop {
            let just_moved = tree.get(current).player_just_moved;
            tree.get_mut(current).update(scratch.result(just_moved));

            let parent = tree.get(current).parent;
            if parent.is_none() {
                break;
            }
            current = parent;
        }

        Ok(())
    }

    /// Statistics from the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Run a UCT search with the default configuration.
///
/// Convenience wrapper around [`UctSearch::search`].
pub fn uct_search<S: GameState>(
    root_state: &S,
    iterations: u32,
) -> Result<S::Move, SearchError<S::Move>> {
    UctSearch::new(SearchConfig::default()).search(root_state, iterations)
}
