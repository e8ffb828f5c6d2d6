use std::ops::Deref;

/// `(row, col)` steps to the six hexes around a hex, in the order they are examined:
/// left, right, up, down, up-left and down-right.
///
/// The board is a rhombus stored as a square, so the two remaining hex
/// directions are the diagonal pair `(-1, -1)` / `(+1, +1)`.
pub const HEX_OFFSETS: [(isize, isize); 6] = [(0, -1), (0, 1), (-1, 0), (1, 0), (-1, -1), (1, 1)];

/// Iterates over the in-bounds hexes adjacent to `(row, col)` on a board
/// with the given side length.
pub fn hex_neighbors(
    side_length: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    HEX_OFFSETS.into_iter().filter_map(move |(d_row, d_col)| {
        let row = row.checked_add_signed(d_row).filter(|&r| r < side_length)?;
        let col = col.checked_add_signed(d_col).filter(|&c| c < side_length)?;
        Some((row, col))
    })
}

/// Up to six flat cell indices, stored inline.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Neighbors {
    indices: [usize; 6],
    len: usize,
}

impl Neighbors {
    pub(crate) fn push(&mut self, index: usize) {
        self.indices[self.len] = index;
        self.len += 1;
    }
}

impl Deref for Neighbors {
    type Target = [usize];

    fn deref(&self) -> &Self::Target {
        &self.indices[..self.len]
    }
}
