//! Search error taxonomy.
//!
//! Both variants are caller-visible failures, never silent no-ops. A negative
//! iteration budget is unrepresentable: the budget is a `u32`.

use std::fmt::Debug;

use thiserror::Error;

/// Errors produced by a UCT search or by a `GameState` implementation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError<M: Debug> {
    /// The root position has no legal moves, or no move was ever explored
    /// (an iteration budget of zero leaves the root childless).
    #[error("no move available from the root position")]
    NoMoveAvailable,

    /// `apply_move` was called with a move that is not legal in the current
    /// position. Produced by `GameState` implementations.
    #[error("move {0:?} is not legal in the current position")]
    InvalidMove(M),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: SearchError<u8> = SearchError::NoMoveAvailable;
        assert_eq!(
            format!("{}", err),
            "no move available from the root position"
        );

        let err = SearchError::InvalidMove(7u8);
        assert_eq!(format!("{}", err), "move 7 is not legal in the current position");
    }

    #[test]
    fn test_error_eq() {
        assert_eq!(
            SearchError::<u8>::NoMoveAvailable,
            SearchError::NoMoveAvailable
        );
        assert_ne!(SearchError::InvalidMove(1u8), SearchError::InvalidMove(2u8));
    }
}
