//! Errors used throughout the board tracker.
//!
//! This module defines the canonical error type returned by the state
//! service. The enum `ChessErrors` is used as the single error type across
//! the crate to simplify propagation and matching. Variants carry
//! contextual information where appropriate to aid diagnostics and
//! user-facing error messages.
//!
//! Note that an attempted move from an empty square is not an error: the
//! free-placement contract reports it as a recoverable `Ok(false)` from
//! `BoardState::move_piece`, and the caller simply re-prompts.

use std::fmt;

use crate::board_location::BoardLocation;

/// Unified error type for the board tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChessErrors {
    /// A coordinate pair outside the 8x8 board was supplied.
    ///
    /// Payload: the offending `(row, col)` location.
    OutOfBounds(BoardLocation),
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds((row, col)) => {
                write!(f, "location ({},{}) is outside the 8x8 board", row, col)
            }
        }
    }
}

impl std::error::Error for ChessErrors {}

#[cfg(test)]
mod tests {
    use super::ChessErrors;

    #[test]
    fn out_of_bounds_message_names_the_location() {
        let rendered = ChessErrors::OutOfBounds((8, 3)).to_string();
        assert_eq!(rendered, "location (8,3) is outside the 8x8 board");
    }
}
