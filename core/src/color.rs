use core::fmt;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Smallest per-channel distance between the base and variant colors.
pub const MIN_CHANNEL_OFFSET: Channel = 10;

/// Upper bound (exclusive) for sampled base channels.
pub const CHANNEL_CEIL: f64 = 255.0;

/// Base and variant colors for one round.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorSample {
    level: Level,
    max_level: Level,
    base: Rgb,
    variant: Rgb,
}

impl ColorSample {
    /// Samples a base color with every channel in `[max_level, 255)` and
    /// derives the variant by shifting each channel down by
    /// [`channel_offset`](Self::channel_offset).
    ///
    /// Inputs are not validated, a `level` above `max_level` simply shrinks
    /// the offset further.
    pub fn generate(level: Level, max_level: Level, rng: &mut SmallRng) -> Self {
        let base: Rgb = core::array::from_fn(|_| {
            saturate(random_range(rng, f64::from(max_level), CHANNEL_CEIL))
        });
        Self::from_base(level, max_level, base)
    }

    pub fn from_base(level: Level, max_level: Level, base: Rgb) -> Self {
        let offset = Self::offset_for(level, max_level);
        let variant = base.map(|channel| channel.saturating_sub(offset));
        Self {
            level,
            max_level,
            base,
            variant,
        }
    }

    fn offset_for(level: Level, max_level: Level) -> Channel {
        saturate(i64::from(MIN_CHANNEL_OFFSET) + i64::from(max_level) - i64::from(level))
    }

    pub const fn level(&self) -> Level {
        self.level
    }

    pub const fn max_level(&self) -> Level {
        self.max_level
    }

    pub const fn base(&self) -> Rgb {
        self.base
    }

    pub const fn variant(&self) -> Rgb {
        self.variant
    }

    pub fn channel_offset(&self) -> Channel {
        Self::offset_for(self.level, self.max_level)
    }

    /// Color for a tile, the variant only for the correct one.
    pub const fn for_tile(&self, is_correct: bool) -> Rgb {
        if is_correct { self.variant } else { self.base }
    }
}

fn saturate(value: i64) -> Channel {
    value.clamp(Channel::MIN.into(), Channel::MAX.into()) as Channel
}

/// CSS wrapper for a channel triple, `rgb(r,g,b)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CssRgb(pub Rgb);

impl fmt::Display for CssRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({r},{g},{b})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_is_offset_from_base_on_every_channel() {
        let mut rng = SmallRng::seed_from_u64(1);
        for max_level in [1, 5, 30, 100] {
            for level in 1..=max_level {
                let sample = ColorSample::generate(level, max_level, &mut rng);
                let offset = 10 + max_level as Channel - level as Channel;
                assert_eq!(sample.channel_offset(), offset);
                assert!(offset >= MIN_CHANNEL_OFFSET);
                for i in 0..3 {
                    assert_eq!(sample.variant()[i], sample.base()[i] - offset);
                }
            }
        }
    }

    #[test]
    fn base_channels_stay_in_sampling_range() {
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..500 {
            let sample = ColorSample::generate(3, 30, &mut rng);
            for channel in sample.base() {
                assert!((30..255).contains(&channel), "{channel} out of range");
            }
        }
    }

    #[test]
    fn offset_reaches_floor_at_max_level() {
        let sample = ColorSample::from_base(30, 30, [100, 150, 200]);
        assert_eq!(sample.channel_offset(), MIN_CHANNEL_OFFSET);
        assert_eq!(sample.variant(), [90, 140, 190]);
    }

    #[test]
    fn first_level_has_widest_offset() {
        let sample = ColorSample::from_base(1, 30, [30, 40, 50]);
        assert_eq!(sample.channel_offset(), 39);
        assert_eq!(sample.variant(), [-9, 1, 11]);
    }

    #[test]
    fn out_of_range_level_is_not_rejected() {
        let sample = ColorSample::from_base(40, 30, [100, 100, 100]);
        assert_eq!(sample.channel_offset(), 0);
        assert_eq!(sample.variant(), sample.base());
    }

    #[test]
    fn huge_ceiling_saturates_instead_of_overflowing() {
        let sample = ColorSample::from_base(1, Level::MAX, [100, 150, 200]);
        assert_eq!(sample.channel_offset(), Channel::MAX);
        assert_eq!(sample.variant()[0], 100 - Channel::MAX);

        let sample = ColorSample::from_base(Level::MAX, 0, [-5, 0, 5]);
        assert_eq!(sample.channel_offset(), Channel::MIN);
        assert_eq!(sample.variant(), [Channel::MAX - 4, Channel::MAX, Channel::MAX]);

        let mut rng = SmallRng::seed_from_u64(3);
        let max_level = i32::MAX as Level;
        let sample = ColorSample::generate(1, max_level, &mut rng);
        assert_eq!(sample.channel_offset(), Channel::MAX);
        for channel in sample.base() {
            assert!((255..=Channel::MAX).contains(&channel), "{channel} out of range");
        }
    }

    #[test]
    fn tile_color_picks_variant_only_for_correct_tile() {
        let sample = ColorSample::from_base(2, 30, [50, 60, 70]);
        assert_eq!(sample.for_tile(false), [50, 60, 70]);
        assert_eq!(sample.for_tile(true), [12, 22, 32]);
    }

    #[test]
    fn css_formatting_joins_without_spaces() {
        assert_eq!(CssRgb([1, 22, 255]).to_string(), "rgb(1,22,255)");
        assert_eq!(CssRgb([-9, 1, 11]).to_string(), "rgb(-9,1,11)");
    }
}
