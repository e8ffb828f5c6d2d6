use quickcheck::{Arbitrary, Gen};

use crate::Color;

/// Stones to place one after the other on an empty board, each on a
/// distinct hex.
#[derive(Clone, Debug)]
pub struct MoveSequence {
    pub side_length: usize,
    pub moves: Vec<(usize, usize, Color)>,
}

impl Arbitrary for MoveSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let side_length = usize::from(u8::arbitrary(g) % 8) + 1;
        let num_cells = side_length * side_length;

        // Partial Fisher-Yates shuffle of the hexes, so that none is played twice
        let mut cells: Vec<usize> = (0..num_cells).collect();
        let num_moves = usize::arbitrary(g) % (num_cells + 1);
        for idx in 0..num_moves {
            let other = idx + usize::arbitrary(g) % (num_cells - idx);
            cells.swap(idx, other);
        }

        let moves = cells[..num_moves]
            .iter()
            .map(|&cell| (cell / side_length, cell % side_length, Color::arbitrary(g)))
            .collect();

        MoveSequence { side_length, moves }
    }
}

impl Arbitrary for Color {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Color::ALL).unwrap()
    }
}
