//! Interpreter that applies command lines to a [`Robot`] on a [`Grid`].
//!
//! The entry point is [`RobotInterpreter`]. Build it from a [`RobotConfig`] (or use
//! [`RobotInterpreter::default`] for the standard 6x6 table), then feed it lines with
//! [`RobotInterpreter::execute`]. Only `REPORT` on a placed robot produces output;
//! every other line, valid or not, is silently absorbed.

use crate::command::Command;
use crate::error::ConfigError;
use crate::grid::{Coordinate, Grid};
use crate::robot::Robot;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, trace};

/// Table bounds for a simulation, inclusive on both ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotConfig {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            min_x: 0,
            min_y: 0,
            max_x: 5,
            max_y: 5,
        }
    }
}

impl RobotConfig {
    /// Parses a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates the bounds into a [`Grid`].
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(
            Coordinate::new(self.min_x, self.min_y),
            Coordinate::new(self.max_x, self.max_y),
        )
    }
}

/// Owns one robot and the table it lives on.
///
/// Not meant to be shared: each session gets its own interpreter.
#[derive(Clone, Debug, Default)]
pub struct RobotInterpreter {
    grid: Grid,
    robot: Robot,
}

impl RobotInterpreter {
    /// Creates an interpreter with an unplaced robot on the configured table.
    pub fn new(config: &RobotConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_grid(config.grid()?))
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            robot: Robot::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// Parses and applies one line, returning the output line if there is one.
    pub fn execute(&mut self, line: &str) -> Option<String> {
        let command = Command::parse(line);
        if !command.is_valid() {
            trace!(line, "discarding unparseable line");
            return None;
        }
        self.apply(command)
    }

    /// Applies an already parsed command.
    ///
    /// Commands that would put the robot off the table, and any command other than
    /// an oriented `PLACE` while the robot is unplaced, leave the state untouched.
    pub fn apply(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Place { x, y, orientation } => {
                let target = Coordinate::new(x, y);
                if self.grid.contains(target) {
                    debug!(%target, %orientation, "placing robot");
                    self.robot.place(target, orientation);
                } else {
                    debug!(%target, "ignoring PLACE outside the table");
                }
                None
            }
            Command::PlaceAt { x, y } => {
                if !self.placed_or_skip(&command) {
                    return None;
                }
                let target = Coordinate::new(x, y);
                if self.grid.contains(target) {
                    debug!(%target, "relocating robot");
                    self.robot.move_to(target);
                } else {
                    debug!(%target, "ignoring PLACE outside the table");
                }
                None
            }
            Command::Move => {
                if !self.placed_or_skip(&command) {
                    return None;
                }
                match self.robot.peek_forward() {
                    Some(next) if self.grid.contains(next) => {
                        debug!(%next, "moving robot");
                        self.robot.move_to(next);
                    }
                    _ => debug!("MOVE would leave the table, holding position"),
                }
                None
            }
            Command::Left => {
                if self.placed_or_skip(&command) {
                    self.robot.turn_left();
                }
                None
            }
            Command::Right => {
                if self.placed_or_skip(&command) {
                    self.robot.turn_right();
                }
                None
            }
            Command::Report => {
                if !self.placed_or_skip(&command) {
                    return None;
                }
                self.robot.report()
            }
            Command::Invalid => None,
        }
    }

    /// Executes `lines` in order and collects every output produced.
    pub fn run<I, S>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.execute(line.as_ref()))
            .collect()
    }

    fn placed_or_skip(&self, command: &Command) -> bool {
        let placed = self.robot.is_placed();
        if !placed {
            debug!(?command, "ignoring command before the robot is placed");
        }
        placed
    }
}
