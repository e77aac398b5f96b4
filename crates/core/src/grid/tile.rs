//! Per-tile fire state
//!
//! A tile is either holding fuel, burning, or burnt out. The fuel a tile holds
//! becomes its own burning intensity when a neighbor ignites it, so a tile with
//! little fuel burns weakly however it was lit.

use serde::{Deserialize, Serialize};

/// Remaining intensity at or below which a decaying tile counts as burnt out.
///
/// Repeated `f32` subtraction of the decay rate leaves a residue under 1e-6
/// after a full burn; snapping it to zero keeps a full-intensity tile burning
/// for exactly `1 / decay_rate` generations. Anything larger is real fuel and
/// buys one more generation.
pub const BURNOUT_EPSILON: f32 = 1e-5;

/// State of one grid tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Tile {
    /// Not burning; holds fuel in [0, 1] to be granted on ignition
    Unburnt {
        /// Stored fuel
        fuel: f32,
    },
    /// Burning with intensity in (0, 1]
    Burning {
        /// Current burning strength
        intensity: f32,
    },
    /// Burnt out; permanently inert
    Exhausted,
}

impl Default for Tile {
    fn default() -> Self {
        Self::Unburnt { fuel: 0.0 }
    }
}

impl Tile {
    /// Fuel available to a neighbor-triggered ignition.
    #[inline]
    pub fn fuel_buffer(&self) -> f32 {
        match *self {
            Self::Unburnt { fuel } => fuel,
            Self::Burning { .. } | Self::Exhausted => 0.0,
        }
    }

    /// Burning intensity; 0 when not burning.
    #[inline]
    pub fn intensity(&self) -> f32 {
        match *self {
            Self::Burning { intensity } => intensity,
            Self::Unburnt { .. } | Self::Exhausted => 0.0,
        }
    }

    #[inline]
    pub fn is_burning(&self) -> bool {
        matches!(self, Self::Burning { .. })
    }

    /// Whether a neighbor can still set this tile alight.
    #[inline]
    pub fn is_ignitable(&self) -> bool {
        matches!(self, Self::Unburnt { .. })
    }

    /// Tile after a neighbor ignites it.
    ///
    /// Stored fuel becomes intensity. Burning and exhausted tiles are
    /// unaffected, and an empty fuel store burns out immediately.
    #[inline]
    pub fn ignite(self) -> Self {
        match self {
            Self::Unburnt { fuel } if fuel > 0.0 => Self::Burning { intensity: fuel },
            Self::Unburnt { .. } => Self::Exhausted,
            other => other,
        }
    }

    /// Tile after its fuel store is moved into its intensity, whatever its state.
    ///
    /// This is the row-major sweep's ignition rule. A burning tile has an empty
    /// store, so a successful roll against it puts it out.
    #[inline]
    pub fn transfer_fuel(self) -> Self {
        match self {
            Self::Unburnt { fuel } if fuel > 0.0 => Self::Burning { intensity: fuel },
            _ => Self::Exhausted,
        }
    }

    /// Tile after one generation of burning at `rate`.
    #[inline]
    pub fn decay(self, rate: f32) -> Self {
        match self {
            Self::Burning { intensity } => {
                let remaining = intensity - rate;
                if remaining <= BURNOUT_EPSILON {
                    Self::Exhausted
                } else {
                    Self::Burning {
                        intensity: remaining,
                    }
                }
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_views() {
        let unburnt = Tile::Unburnt { fuel: 0.7 };
        assert_eq!((unburnt.fuel_buffer(), unburnt.intensity()), (0.7, 0.0));

        let burning = Tile::Burning { intensity: 0.4 };
        assert_eq!((burning.fuel_buffer(), burning.intensity()), (0.0, 0.4));

        assert_eq!(
            (Tile::Exhausted.fuel_buffer(), Tile::Exhausted.intensity()),
            (0.0, 0.0)
        );
    }

    #[test]
    fn test_ignite_uses_own_fuel() {
        assert_eq!(
            Tile::Unburnt { fuel: 0.55 }.ignite(),
            Tile::Burning { intensity: 0.55 }
        );
        assert_eq!(Tile::Unburnt { fuel: 0.0 }.ignite(), Tile::Exhausted);
    }

    #[test]
    fn test_ignite_leaves_burning_and_exhausted_alone() {
        let burning = Tile::Burning { intensity: 0.3 };
        assert_eq!(burning.ignite(), burning);
        assert_eq!(Tile::Exhausted.ignite(), Tile::Exhausted);
    }

    #[test]
    fn test_transfer_fuel_puts_out_burning_tiles() {
        assert_eq!(
            Tile::Unburnt { fuel: 0.55 }.transfer_fuel(),
            Tile::Burning { intensity: 0.55 }
        );
        assert_eq!(Tile::Unburnt { fuel: 0.0 }.transfer_fuel(), Tile::Exhausted);
        assert_eq!(Tile::Burning { intensity: 0.9 }.transfer_fuel(), Tile::Exhausted);
        assert_eq!(Tile::Exhausted.transfer_fuel(), Tile::Exhausted);
    }

    #[test]
    fn test_decay() {
        let tile = Tile::Burning { intensity: 1.0 }.decay(0.005);
        assert_eq!(tile, Tile::Burning { intensity: 1.0 - 0.005 });

        assert_eq!(Tile::Burning { intensity: 0.003 }.decay(0.005), Tile::Exhausted);
        assert_eq!(Tile::Unburnt { fuel: 0.9 }.decay(0.005), Tile::Unburnt { fuel: 0.9 });
    }

    #[test]
    fn test_full_intensity_burns_exactly_two_hundred_generations() {
        let mut tile = Tile::Burning { intensity: 1.0 };
        for generation in 1..=200 {
            assert!(tile.is_burning(), "burnt out early at generation {generation}");
            tile = tile.decay(0.005);
        }
        assert_eq!(tile, Tile::Exhausted);
    }

    #[test]
    fn test_small_remainder_still_burns() {
        // 100 decays leave about 8e-5, which is fuel, not rounding residue
        let mut tile = Tile::Burning { intensity: 0.50008 };
        for generation in 1..=101 {
            assert!(tile.is_burning(), "burnt out early at generation {generation}");
            tile = tile.decay(0.005);
        }
        assert_eq!(tile, Tile::Exhausted);
    }
}
