use serde::{Deserialize, Serialize};

use crate::*;

/// Pixel geometry of one round's grid.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    size: GridSize,
    pitch: f64,
    gutter: f64,
}

impl GridLayout {
    /// Spreads `size` tiles per side over `canvas_width`.
    ///
    /// The pitch is `round(canvas_width / size) - gutter / size`; very large
    /// grids can make it non-positive, which is left as is.
    pub fn new(canvas_width: f64, size: GridSize, gutter: f64) -> Self {
        let cells = f64::from(size.max(1));
        Self {
            size,
            pitch: round_half_up(canvas_width / cells) - gutter / cells,
            gutter,
        }
    }

    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Distance between the origins of two neighboring tiles.
    pub const fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Rendered side of a tile, the pitch minus one gutter.
    pub fn tile_side(&self) -> f64 {
        self.pitch - self.gutter
    }

    /// Top-left corner of the tile at `(column, row)`.
    pub fn origin(&self, (x, y): Cell2) -> (f64, f64) {
        (
            f64::from(x) * self.pitch + self.gutter,
            f64::from(y) * self.pitch + self.gutter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_canvas_four_by_four() {
        let layout = GridLayout::new(500.0, 4, 10.0);
        assert_eq!(layout.pitch(), 122.5);
        assert_eq!(layout.tile_side(), 112.5);
        assert_eq!(layout.origin((0, 0)), (10.0, 10.0));
        assert_eq!(layout.origin((3, 1)), (377.5, 132.5));
    }

    #[test]
    fn pitch_rounds_before_subtracting_gutter() {
        // 350 / 6 = 58.33 rounds to 58
        let layout = GridLayout::new(350.0, 6, 10.0);
        assert_eq!(layout.pitch(), 58.0 - 10.0 / 6.0);
    }

    #[test]
    fn huge_grid_keeps_degenerate_width() {
        let layout = GridLayout::new(20.0, 100, 10.0);
        assert!(layout.tile_side() <= 0.0);
    }
}
