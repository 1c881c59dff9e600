//! Planar coordinate type and movement primitives.
//!
//! Coordinates are latitude/longitude degrees, but all distance math is a
//! flat-plane Euclidean approximation.  Proximity thresholds and speeds are
//! expressed in the same degree units.

use rand::Rng;

/// Distance (in degrees) at or below which a nurse counts as "at" a location.
pub const DEFAULT_PROXIMITY: f64 = 1.0;

/// Minimum distance kept from the region edge after a reflection.
const BOUNDARY_INSET: f64 = 1e-9;

// ── Position ──────────────────────────────────────────────────────────────────

/// A point in the simulation plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

impl Position {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Euclidean distance in degree units.
    #[inline]
    pub fn distance(self, other: Position) -> f64 {
        let d_lat = other.lat - self.lat;
        let d_lon = other.lon - self.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }

    /// `true` when `other` is within `threshold` (inclusive).
    #[inline]
    pub fn is_close(self, other: Position, threshold: f64) -> bool {
        self.distance(other) <= threshold
    }

    /// Move at most `speed` units toward `target`.
    ///
    /// Snaps exactly onto `target` when it is closer than `speed`, so a nurse
    /// never oscillates around its destination.
    pub fn step_toward(self, target: Position, speed: f64) -> Position {
        let distance = self.distance(target);
        if distance < speed {
            return target;
        }
        let ratio = speed / distance;
        Position {
            lat: self.lat + (target.lat - self.lat) * ratio,
            lon: self.lon + (target.lon - self.lon) * ratio,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Velocity ──────────────────────────────────────────────────────────────────

/// Per-tick displacement used while patrolling.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Velocity {
    pub d_lat: f64,
    pub d_lon: f64,
}

impl Velocity {
    #[inline]
    pub fn new(d_lat: f64, d_lon: f64) -> Self {
        Self { d_lat, d_lon }
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle the simulation lives in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Bounds {
    /// The default region: `[60, 70] × [-133, -93]`.
    pub const REGION: Bounds = Bounds {
        lat_min: 60.0,
        lat_max: 70.0,
        lon_min: -133.0,
        lon_max: -93.0,
    };

    /// `true` if `pos` lies strictly inside the rectangle.
    #[inline]
    pub fn contains_strict(&self, pos: Position) -> bool {
        pos.lat > self.lat_min
            && pos.lat < self.lat_max
            && pos.lon > self.lon_min
            && pos.lon < self.lon_max
    }

    /// `true` if both axes have positive extent.
    pub fn is_valid(&self) -> bool {
        self.lat_min < self.lat_max && self.lon_min < self.lon_max
    }

    /// Uniformly distributed point in `[min, max)` on both axes.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position {
            lat: rng.gen_range(self.lat_min..self.lat_max),
            lon: rng.gen_range(self.lon_min..self.lon_max),
        }
    }

    /// Advance `pos` by `vel`, bouncing off the edges.
    ///
    /// When the tentative step touches or crosses an edge on an axis, that
    /// axis' velocity component is negated and the step is recomputed from
    /// `pos`.  The recomputed coordinate is then clamped strictly inside, so
    /// a position that already started outside is pulled back in.
    pub fn reflect(&self, pos: Position, vel: Velocity) -> (Position, Velocity) {
        let (lat, d_lat) = reflect_axis(pos.lat, vel.d_lat, self.lat_min, self.lat_max);
        let (lon, d_lon) = reflect_axis(pos.lon, vel.d_lon, self.lon_min, self.lon_max);
        (Position { lat, lon }, Velocity { d_lat, d_lon })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::REGION
    }
}

fn reflect_axis(x: f64, d: f64, min: f64, max: f64) -> (f64, f64) {
    let next = x + d;
    if next > min && next < max {
        return (next, d);
    }
    let d = -d;
    let inset = d.abs().max(BOUNDARY_INSET).min((max - min) * 0.5);
    let (lo, hi) = (min + inset, max - inset);
    // A step wider than half the region collapses the window; rounding can
    // leave `lo > hi`, so fall back to the midpoint.
    if lo <= hi {
        ((x + d).clamp(lo, hi), d)
    } else {
        ((min + max) * 0.5, d)
    }
}
