use serde::{Deserialize, Serialize};

use crate::*;

/// One cell of the current round's grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub grid_x: GridSize,
    pub grid_y: GridSize,
    pub is_correct: bool,
}

impl Tile {
    /// Tile for cell `index` of a `size` by `size` grid, counting row by row.
    pub const fn at_index(index: usize, size: GridSize, correct_index: usize) -> Self {
        let size = size as usize;
        Self {
            grid_x: (index % size) as GridSize,
            grid_y: (index / size) as GridSize,
            is_correct: index == correct_index,
        }
    }

    pub const fn cell(&self) -> Cell2 {
        (self.grid_x, self.grid_y)
    }
}
