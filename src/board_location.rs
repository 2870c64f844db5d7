use crate::chess_errors::ChessErrors;

/// Zero-based `(row, col)` position on the 8x8 grid. Row 0 is black's back
/// rank, row 7 is white's.
pub type BoardLocation = (usize, usize);

/// Checks that a location lies on the board.
///
/// # Arguments
///
/// * `x` - The `(row, col)` location to validate.
///
/// # Returns
///
/// * `Result<BoardLocation, ChessErrors>` - Returns the location unchanged if
///   within bounds, otherwise returns an error.
pub fn validate_board_location(x: BoardLocation) -> Result<BoardLocation, ChessErrors> {
    if (x.0 > 7) | (x.1 > 7) {
        Err(ChessErrors::OutOfBounds(x))
    } else {
        Ok(x)
    }
}
