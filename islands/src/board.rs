mod counting;
mod neighbors;

pub use neighbors::*;

use crate::{Color, DisjointSet};
use counting::{count_connections, island_delta};

/// A Hex board: an `N x N` rhombus of hexes, each empty or holding a stone.
///
/// Besides the stones, the board tracks which stones are connected and how
/// many islands (maximal connected groups of one color) each color has.
/// Both are updated incrementally as stones are placed.
///
/// Hexes are addressed by `(row, col)` or by their flat index
/// `row * side_length + col`. No method validates its coordinates; passing
/// coordinates outside the board panics.
#[derive(Clone, Debug)]
pub struct Board {
    side_length: usize,
    /// One entry per hex, indexed by flat index.
    cells: Vec<Option<Color>>,
    /// Stones are only ever joined with adjacent stones of the same color,
    /// so every empty hex stays a singleton.
    forest: DisjointSet,
    white_islands: usize,
    black_islands: usize,
}

impl Board {
    /// Creates an empty board with `side_length * side_length` hexes.
    pub fn new(side_length: usize) -> Self {
        let num_cells = side_length * side_length;
        Self {
            side_length,
            cells: vec![None; num_cells],
            forest: DisjointSet::new(num_cells),
            white_islands: 0,
            black_islands: 0,
        }
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    /// The flat index of the hex at `(row, col)`.
    pub fn cell_index(&self, row: usize, col: usize) -> usize {
        row * self.side_length + col
    }

    pub fn color_of(&self, row: usize, col: usize) -> Option<Color> {
        self.cells[self.cell_index(row, col)]
    }

    /// Places a stone and joins it with the adjacent stones of the same color.
    ///
    /// The hex must be empty; this is not checked.
    pub fn set_color(&mut self, row: usize, col: usize, color: Color) {
        let cell = self.cell_index(row, col);
        self.cells[cell] = Some(color);

        let neighbors = self.same_color_neighbors(row, col, color);

        // A single neighbor only grows its island, and five or six neighbors
        // always belong to one island already.
        if neighbors.len() != 1 && neighbors.len() < 5 {
            // Must be measured before any of the unions below
            let connections = count_connections(&self.forest, &neighbors);
            let islands = self.islands_mut(color);
            *islands = islands.saturating_add_signed(island_delta(neighbors.len(), connections));
        }

        for &neighbor in neighbors.iter() {
            self.forest.union(cell, neighbor);
        }
    }

    /// Whether the two hexes (by flat index) are part of the same group.
    ///
    /// An empty hex is only connected to itself.
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.forest.connected(a, b)
    }

    /// The representative hex of the group containing the hex at flat index `cell`.
    pub fn find(&self, cell: usize) -> usize {
        self.forest.find(cell)
    }

    /// The number of hexes in the group containing the hex at flat index `cell`.
    pub fn group_size(&self, cell: usize) -> usize {
        self.forest.weight(cell)
    }

    /// The number of distinct groups on the board, counting every empty hex
    /// as a group of its own.
    pub fn group_count(&self) -> usize {
        self.forest.count()
    }

    /// The number of islands of the given color.
    pub fn island_count(&self, color: Color) -> usize {
        match color {
            Color::White => self.white_islands,
            Color::Black => self.black_islands,
        }
    }

    /// Overrides the island count of the given color.
    ///
    /// Later updates are relative to this value.
    pub fn set_island_count(&mut self, color: Color, islands: usize) {
        *self.islands_mut(color) = islands;
    }

    fn islands_mut(&mut self, color: Color) -> &mut usize {
        match color {
            Color::White => &mut self.white_islands,
            Color::Black => &mut self.black_islands,
        }
    }

    fn same_color_neighbors(&self, row: usize, col: usize, color: Color) -> Neighbors {
        let mut neighbors = Neighbors::default();
        for (n_row, n_col) in hex_neighbors(self.side_length, row, col) {
            let idx = self.cell_index(n_row, n_col);
            if self.cells.get(idx) == Some(&Some(color)) {
                neighbors.push(idx);
            }
        }
        neighbors
    }
}
