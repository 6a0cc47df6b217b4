use super::{BoardState, Player, ROWS};

/// Shift distances for vertical, horizontal, diagonal `/` and diagonal `\`.
pub const DIRECTIONS: [usize; 4] = [1, ROWS + 1, ROWS + 2, ROWS];

/// Returns the mask of one completed line of four in `bb`, if any.
///
/// `bb & (bb >> d)` marks pairs; AND-ing that with itself shifted by `2d`
/// leaves the lowest cell of every run of four. The mask is rebuilt by
/// shifting that start bit back up by `0, d, 2d, 3d`.
pub fn winning_mask(bb: u64) -> Option<u64> {
    for &d in DIRECTIONS.iter() {
        let m = bb & (bb >> d);
        if m & (m >> (2 * d)) == 0 { continue; }
        let starts = bb & (bb >> d) & (bb >> (2 * d)) & (bb >> (3 * d));
        if starts != 0 {
            // keep a single line even if several overlap
            let start = starts & starts.wrapping_neg();
            return Some(start | (start << d) | (start << (2 * d)) | (start << (3 * d)));
        }
    }
    None
}

#[inline]
pub fn has_four(bb: u64) -> bool {
    DIRECTIONS.iter().any(|&d| {
        let m = bb & (bb >> d);
        m & (m >> (2 * d)) != 0
    })
}

/// Whether `player` owns a line of four on `board`.
#[inline]
pub fn check_win(board: &BoardState, player: Player) -> bool {
    has_four(board.bitboard(player))
}
