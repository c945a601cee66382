//! Shared Nim fixture for integration tests.
//!
//! Single pile, take 1-3 chips per turn. Normal play: the player taking the
//! last chip wins. Misere play: the player taking the last chip loses.

use uct_search::core::{GameState, PlayerId, SearchError};

#[derive(Clone, Debug, PartialEq)]
pub struct NimState {
    pub chips: u32,
    pub just_moved: PlayerId,
    last_chip_wins: bool,
}

impl NimState {
    /// Normal-play Nim with player 0 to move.
    pub fn new(chips: u32) -> Self {
        Self {
            chips,
            just_moved: PlayerId::new(1),
            last_chip_wins: true,
        }
    }

    /// Misere Nim: taking the last chip loses.
    pub fn misere(chips: u32) -> Self {
        Self {
            chips,
            just_moved: PlayerId::new(1),
            last_chip_wins: false,
        }
    }
}

impl GameState for NimState {
    type Move = u32;

    fn legal_moves(&self) -> Vec<u32> {
        (1..=3).filter(|&n| n <= self.chips).collect()
    }

    fn apply_move(&mut self, mv: &u32) -> Result<(), SearchError<u32>> {
        if *mv < 1 || *mv > 3 || *mv > self.chips {
            return Err(SearchError::InvalidMove(*mv));
        }
        self.chips -= mv;
        self.just_moved = self.just_moved.opponent();
        Ok(())
    }

    fn result(&self, player: PlayerId) -> f64 {
        let winner = if self.last_chip_wins {
            self.just_moved
        } else {
            self.just_moved.opponent()
        };
        if winner == player {
            1.0
        } else {
            0.0
        }
    }

    fn player_just_moved(&self) -> PlayerId {
        self.just_moved
    }
}
