//! Search tree node.
//!
//! Uses arena-based allocation with index references (NodeId): nodes are
//! owned by the tree's arena, and parent links are plain indices, so the
//! tree is a strict ownership forest with no cyclic ownership.

use smallvec::SmallVec;

use crate::core::PlayerId;

/// Index into the SearchTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// One explored or frontier position in the search tree.
///
/// `wins` is always from the viewpoint of `player_just_moved`: the player
/// who made the move into this node. Backpropagation scores the same
/// terminal outcome from each level's own mover's perspective, which is
/// what makes minimax-like behavior emerge from per-node statistics.
#[derive(Clone, Debug)]
pub struct UctNode<M> {
    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// The move that led from the parent to this node (None for the root).
    pub mv: Option<M>,

    /// The player who made `mv`. For the root: the player who moved to
    /// reach the initial position.
    pub player_just_moved: PlayerId,

    /// Number of backpropagation updates received.
    pub visits: u32,

    /// Accumulated result mass from `player_just_moved`'s perspective.
    pub wins: f64,

    /// Legal moves from this position not yet expanded into children.
    pub untried_moves: Vec<M>,

    /// Child node indices, in creation order.
    /// SmallVec optimizes for typical branching factor < 8.
    pub children: SmallVec<[NodeId; 8]>,
}

impl<M> UctNode<M> {
    /// Create a root node from the initial position's mover and legal moves.
    pub fn root(player_just_moved: PlayerId, untried_moves: Vec<M>) -> Self {
        Self {
            parent: NodeId::NONE,
            mv: None,
            player_just_moved,
            visits: 0,
            wins: 0.0,
            untried_moves,
            children: SmallVec::new(),
        }
    }

    /// Create a child node for `mv`, capturing the resulting position's
    /// mover and legal-move set.
    pub fn child(parent: NodeId, mv: M, player_just_moved: PlayerId, untried_moves: Vec<M>) -> Self {
        Self {
            parent,
            mv: Some(mv),
            player_just_moved,
            visits: 0,
            wins: 0.0,
            untried_moves,
            children: SmallVec::new(),
        }
    }

    /// UCB score: `wins/visits + exploration * sqrt(ln(parent_visits) / visits)`.
    ///
    /// Requires `visits > 0` and `parent_visits > 0`; the phase ordering of
    /// the search guarantees both before any selection happens.
    #[must_use]
    pub fn ucb(&self, parent_visits: u32, exploration: f64) -> f64 {
        debug_assert!(self.visits > 0, "UCB evaluated on an unvisited node");
        debug_assert!(parent_visits > 0, "UCB evaluated under an unvisited parent");

        let visits = self.visits as f64;
        self.wins / visits + exploration * ((parent_visits as f64).ln() / visits).sqrt()
    }

    /// Record one backpropagation update. Pure bookkeeping; `result` range
    /// is the caller's responsibility.
    pub fn update(&mut self, result: f64) {
        self.visits += 1;
        self.wins += result;
    }

    /// Mean result for this node's mover. Requires `visits > 0`.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        debug_assert!(self.visits > 0, "win rate of an unvisited node");
        self.wins / self.visits as f64
    }

    /// Check if every legal move has been expanded into a child.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        self.untried_moves.is_empty()
    }

    /// Check if any children exist.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
