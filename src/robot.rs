//! Robot state and the operations it supports.

use crate::grid::Coordinate;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction the robot faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// Clockwise order. Turning right advances one slot, turning left goes back one.
    pub const CYCLE: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// The orientation one quarter turn clockwise.
    pub fn right(self) -> Self {
        Self::CYCLE[(self.index() + 1) % Self::CYCLE.len()]
    }

    /// The orientation one quarter turn counter-clockwise.
    pub fn left(self) -> Self {
        Self::CYCLE[(self.index() + Self::CYCLE.len() - 1) % Self::CYCLE.len()]
    }

    /// Unit step in this direction. North is `+y`.
    pub fn forward(self) -> IVec2 {
        match self {
            Orientation::North => IVec2::Y,
            Orientation::East => IVec2::X,
            Orientation::South => IVec2::NEG_Y,
            Orientation::West => IVec2::NEG_X,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::North => "NORTH",
            Orientation::East => "EAST",
            Orientation::South => "SOUTH",
            Orientation::West => "WEST",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names none of the four orientations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOrientation;

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    /// Case-insensitive match against `NORTH`, `EAST`, `SOUTH` and `WEST`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s))
            .ok_or(UnknownOrientation)
    }
}

/// Whether the robot is on the table.
///
/// Position and orientation are set together or not at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    #[default]
    Unplaced,
    Placed {
        position: Coordinate,
        orientation: Orientation,
    },
}

/// The robot itself.
///
/// It knows nothing about the table; bounds are enforced by the
/// [`Simulator`](crate::Simulator) before any mutation reaches it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Robot {
    placement: Placement,
}

impl Robot {
    /// A robot that has not been placed yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.placement, Placement::Placed { .. })
    }

    pub fn position(&self) -> Option<Coordinate> {
        match self.placement {
            Placement::Placed { position, .. } => Some(position),
            Placement::Unplaced => None,
        }
    }

    pub fn orientation(&self) -> Option<Orientation> {
        match self.placement {
            Placement::Placed { orientation, .. } => Some(orientation),
            Placement::Unplaced => None,
        }
    }

    /// Sets position and orientation unconditionally.
    pub fn place(&mut self, position: Coordinate, orientation: Orientation) {
        self.placement = Placement::Placed {
            position,
            orientation,
        };
    }

    /// Relocates the robot, keeping its orientation. Ignored while unplaced.
    pub fn move_to(&mut self, target: Coordinate) {
        if let Placement::Placed { position, .. } = &mut self.placement {
            *position = target;
        }
    }

    /// Quarter turn counter-clockwise. Ignored while unplaced.
    pub fn turn_left(&mut self) {
        if let Placement::Placed { orientation, .. } = &mut self.placement {
            *orientation = orientation.left();
        }
    }

    /// Quarter turn clockwise. Ignored while unplaced.
    pub fn turn_right(&mut self) {
        if let Placement::Placed { orientation, .. } = &mut self.placement {
            *orientation = orientation.right();
        }
    }

    /// The cell one step ahead, without moving.
    ///
    /// `None` while unplaced, or if the step would leave the `i32` range.
    pub fn peek_forward(&self) -> Option<Coordinate> {
        match self.placement {
            Placement::Placed {
                position,
                orientation,
            } => position.step(orientation.forward()),
            Placement::Unplaced => None,
        }
    }

    /// `"x,y,ORIENTATION"` while placed.
    pub fn report(&self) -> Option<String> {
        match self.placement {
            Placement::Placed {
                position,
                orientation,
            } => Some(format!("{position},{orientation}")),
            Placement::Unplaced => None,
        }
    }
}
