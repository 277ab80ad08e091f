//! Table geometry: integer coordinates and the inclusive rectangle the robot may occupy.

use crate::error::ConfigError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the table, rendered as `"x,y"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Offsets this coordinate by `delta`.
    ///
    /// Returns `None` if either axis would overflow `i32`; such a cell can never be
    /// on a table, so callers treat it like any other off-grid step.
    pub fn step(self, delta: IVec2) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(delta.x)?,
            y: self.y.checked_add(delta.y)?,
        })
    }
}

impl From<IVec2> for Coordinate {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Coordinate> for IVec2 {
    fn from(c: Coordinate) -> Self {
        c.as_ivec2()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The inclusive rectangle of valid coordinates.
///
/// Bounds are fixed at construction. The default table spans (0,0) to (5,5).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    min: IVec2,
    max: IVec2,
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            min: IVec2::ZERO,
            max: IVec2::splat(5),
        }
    }
}

impl Grid {
    /// Builds a grid spanning `min` to `max` inclusive.
    ///
    /// Fails with [`ConfigError::InvalidBounds`] if `min` exceeds `max` on either axis.
    pub fn new(min: Coordinate, max: Coordinate) -> Result<Self, ConfigError> {
        if min.x > max.x || min.y > max.y {
            return Err(ConfigError::InvalidBounds {
                min_x: min.x,
                min_y: min.y,
                max_x: max.x,
                max_y: max.y,
            });
        }
        Ok(Self {
            min: min.as_ivec2(),
            max: max.as_ivec2(),
        })
    }

    pub fn min(&self) -> Coordinate {
        self.min.into()
    }

    pub fn max(&self) -> Coordinate {
        self.max.into()
    }

    /// Number of columns. Widened to `i64` so the full `i32` range fits.
    pub fn width(&self) -> i64 {
        i64::from(self.max.x) - i64::from(self.min.x) + 1
    }

    pub fn height(&self) -> i64 {
        i64::from(self.max.y) - i64::from(self.min.y) + 1
    }

    /// True iff `c` lies within the bounds, edges included.
    pub fn contains(&self, c: Coordinate) -> bool {
        let v = c.as_ivec2();
        v.cmpge(self.min).all() && v.cmple(self.max).all()
    }
}
