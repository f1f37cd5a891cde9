/// Difficulty level, also used for the difficulty ceiling.
pub type Level = u32;

/// Number of tiles along one side of the square grid.
pub type GridSize = u32;

/// Color channel value, may fall outside `0..=255` at low difficulty.
pub type Channel = i32;

/// Red, green and blue channels.
pub type Rgb = [Channel; 3];

/// Cell position `(column, row)`.
pub type Cell2 = (GridSize, GridSize);

/// Rounds `value` with halves going towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_matches_browser_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(125.0), 125.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }
}
