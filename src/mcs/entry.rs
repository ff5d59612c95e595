use bincode::{Decode, Encode};

/// Inclusive value band. Point rows from the delimited-text encoding become
/// degenerate bands with `min == max`.
#[derive(Copy, Clone, Debug, PartialEq, Encode, Decode)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    pub const fn point(value: f64) -> Self {
        Self { min: value, max: value }
    }

    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn width(self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Distance from the value to the nearest band boundary, zero inside.
    pub fn distance_to(self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

/// One row of the canonical in-memory reference table.
#[derive(Clone, Debug, PartialEq, Encode, Decode)]
pub struct Entry {
    pub occupancy_days: u8,
    pub occupancy_normalized: f64,

    /// Present when the source encoding was label-keyed.
    pub occupancy_label: Option<String>,

    pub consumption: Band,
    pub generation: Band,
    pub battery_size: f64,
    pub percentage: f64,
    pub pv_to_consumption: f64,
    pub battery_to_consumption: f64,
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn band_distance() {
        let band = Band { min: 600.0, max: 800.0 };
        assert_relative_eq!(band.distance_to(700.0), 0.0);
        assert_relative_eq!(band.distance_to(500.0), 100.0);
        assert_relative_eq!(band.distance_to(1000.0), 200.0);
        assert!(band.contains(600.0));
        assert!(band.contains(800.0));
        assert!(!band.contains(800.1));
    }

    #[test]
    fn point_band_is_degenerate() {
        let band = Band::point(1750.0);
        assert_relative_eq!(band.width(), 0.0);
        assert!(band.contains(1750.0));
        assert!(!band.contains(1750.5));
    }
}
