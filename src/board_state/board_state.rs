//! Free-placement board service: move application and history bookkeeping.
//!
//! `BoardState` is the central model of the crate. It owns the board grid
//! and the capped move log, and exposes the two mutating operations the
//! front-end drives: `move_piece` and `reset`. No chess rules are applied
//! anywhere; any piece may be dropped on any square.

use chrono::Local;
use log::{debug, info};

use crate::board_location::validate_board_location;
use crate::board_state::board::Board;
use crate::board_state::move_history::{MoveHistory, MoveRecord};
use crate::chess_errors::ChessErrors;

/// Owned board + history pair with single-writer semantics.
///
/// Every operation runs to completion synchronously; there is no internal
/// locking. Sharing one instance across threads requires external
/// synchronization by the integrator (a `Mutex` around the whole state, or
/// a single-owner task receiving commands).
#[derive(Debug, Clone)]
pub struct BoardState {
    board: Board,
    history: MoveHistory,
}

impl BoardState {
    /// Fresh state: standard starting layout, empty history.
    pub fn new() -> Self {
        BoardState {
            board: Board::starting_position(),
            history: MoveHistory::new(),
        }
    }

    /// Read access to the live board. Mutation goes through `move_piece`.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Read access to the live history, most recent move first.
    #[inline]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Relocates whatever piece sits on `(from_row, from_col)` to
    /// `(to_row, to_col)`, unconditionally overwriting the destination.
    ///
    /// There is no legality checking of any kind: captures of either color
    /// are accepted, and moving a piece onto its own square succeeds (and
    /// is still recorded). Every applied move prepends a record to the
    /// history, which is then trimmed to its 50-entry cap.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the piece was relocated and recorded.
    /// * `Ok(false)` - the source square was empty; nothing changed.
    /// * `Err(ChessErrors::OutOfBounds)` - a coordinate was outside `0..=7`;
    ///   nothing changed.
    pub fn move_piece(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> Result<bool, ChessErrors> {
        let from = validate_board_location((from_row, from_col))?;
        let to = validate_board_location((to_row, to_col))?;

        let piece = match self.board.take_piece(from) {
            Some(piece) => piece,
            None => {
                debug!("ignored move from empty square ({},{})", from.0, from.1);
                return Ok(false);
            }
        };

        let replaced = self.board.place_piece(to, piece);

        let record = MoveRecord {
            piece_name: piece.display_name(),
            from,
            to,
            replaced_name: replaced.map(|taken| taken.display_name()),
            time: Local::now().format("%H:%M:%S").to_string(),
        };
        info!("{}", record);
        self.history.record(record);

        Ok(true)
    }

    /// Restores the standard starting layout and clears the history.
    pub fn reset(&mut self) {
        debug!("board reset");
        self.board = Board::starting_position();
        self.history.clear();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
