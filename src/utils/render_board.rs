//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of the board grid for the terminal
//! front-ends, tests, and diagnostics in text environments.

use crate::board_state::board::Board;

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 (black's back rank) is printed at the top, matching the grid
/// orientation the front-end presents. Rows and columns are labeled with
/// the `(row, col)` indices that `move` commands use.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for (row, cells) in board.rows().iter().enumerate() {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            match cell {
                Some(piece) => out.push(piece.symbol),
                None => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board_state::board::Board;

    #[test]
    fn starting_position_renders_all_ranks() {
        let rendered = render_board(&Board::starting_position());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], "0 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 0");
        assert_eq!(lines[2], "1 ♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟ 1");
        assert_eq!(lines[3], "2 · · · · · · · · 2");
        assert_eq!(lines[7], "6 ♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙ 6");
        assert_eq!(lines[8], "7 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 7");
    }
}
