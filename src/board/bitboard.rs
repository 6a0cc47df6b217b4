use super::{Cell, Player, COLS, COL_BITS, ROWS};

/// Bit-packed occupancy for both players.
///
/// Cell `(row, col)` lives at bit `col * (ROWS + 1) + row` with row 0 at the
/// bottom. The top bit of every column is a sentinel that is never set, so a
/// shifted run can not wrap from one column into the next.
/// `heights[col]` holds the absolute bit index of the next free cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    pub(crate) bitboards: [u64; 2],
    pub(crate) heights: [usize; COLS],
}

impl Default for BoardState {
    fn default() -> Self { Self::new() }
}

impl BoardState {
    pub fn new() -> Self {
        let mut heights = [0usize; COLS];
        for (col, h) in heights.iter_mut().enumerate() { *h = Self::base(col); }
        Self { bitboards: [0, 0], heights }
    }

    #[inline]
    pub fn base(col: usize) -> usize { col * COL_BITS }

    #[inline]
    pub fn bit_index(row: usize, col: usize) -> usize { col * COL_BITS + row }

    #[inline]
    pub fn bitboard(&self, player: Player) -> u64 { self.bitboards[player.index()] }

    #[inline]
    pub fn occupied(&self) -> u64 { self.bitboards[0] | self.bitboards[1] }

    pub fn heights(&self) -> [usize; COLS] { self.heights }

    /// Pieces already dropped into `col`.
    #[inline]
    pub fn fill(&self, col: usize) -> usize { self.heights[col] - Self::base(col) }

    #[inline]
    pub fn is_playable(&self, col: usize) -> bool {
        col < COLS && self.heights[col] < Self::base(col) + ROWS
    }

    pub fn playable_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&c| self.is_playable(c)).collect()
    }

    pub fn is_full(&self) -> bool { (0..COLS).all(|c| !self.is_playable(c)) }

    /// Toggles `player`'s bit at the top of `col` and advances the fill pointer.
    /// Caller must have checked `is_playable(col)`.
    pub(crate) fn drop_piece(&mut self, col: usize, player: Player) {
        let bit = 1u64 << self.heights[col];
        self.bitboards[player.index()] ^= bit;
        self.heights[col] += 1;
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        if row >= ROWS || col >= COLS { return Cell::Empty; }
        let mask = 1u64 << Self::bit_index(row, col);
        if self.bitboards[0] & mask != 0 {
            Cell::Occupied(Player::One)
        } else if self.bitboards[1] & mask != 0 {
            Cell::Occupied(Player::Two)
        } else {
            Cell::Empty
        }
    }

    /// Dense `[row][col]` view, row 0 at the bottom.
    pub fn to_grid(&self) -> [[Cell; COLS]; ROWS] {
        let mut grid = [[Cell::Empty; COLS]; ROWS];
        for (row, line) in grid.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() { *cell = self.cell(row, col); }
        }
        grid
    }

    pub fn piece_count(&self) -> usize { self.occupied().count_ones() as usize }

    /// Pieces of `player` in column `col`.
    pub fn column_count(&self, player: Player, col: usize) -> u32 {
        let mask = ((1u64 << ROWS) - 1) << Self::base(col);
        (self.bitboard(player) & mask).count_ones()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_stacks_from_the_bottom() {
        let mut b = BoardState::new();
        b.drop_piece(2, Player::One);
        b.drop_piece(2, Player::Two);
        assert_eq!(b.cell(0, 2), Cell::Occupied(Player::One));
        assert_eq!(b.cell(1, 2), Cell::Occupied(Player::Two));
        assert_eq!(b.cell(2, 2), Cell::Empty);
        assert_eq!(b.fill(2), 2);
        assert_eq!(b.heights()[2], 2 * COL_BITS + 2);
    }

    #[test]
    fn full_column_is_not_playable() {
        let mut b = BoardState::new();
        for i in 0..ROWS {
            let p = if i % 2 == 0 { Player::One } else { Player::Two };
            b.drop_piece(0, p);
        }
        assert!(!b.is_playable(0));
        assert_eq!(b.playable_columns(), vec![1, 2, 3, 4, 5, 6]);
        // sentinel bit stays clear
        assert_eq!(b.occupied() & (1u64 << (COL_BITS - 1)), 0);
    }

    #[test]
    fn out_of_range_column_is_not_playable() {
        let b = BoardState::new();
        assert!(!b.is_playable(COLS));
        assert!(!b.is_playable(usize::MAX));
    }
}
