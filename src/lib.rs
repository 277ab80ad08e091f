//! # toy-robot
//!
//! A toy robot on a rectangular table, driven one text command at a time.
//!
//! Lines such as `PLACE 1,2,EAST`, `MOVE`, `LEFT`, `RIGHT` and `REPORT` are parsed into
//! a [`Command`] and applied by a [`RobotInterpreter`], which keeps the [`Robot`] inside
//! its [`Grid`]. Malformed or illegal commands are dropped without output; only `REPORT`
//! on a placed robot yields a line such as `"3,3,NORTH"`.

pub mod command;
pub mod error;
pub mod grid;
pub mod interpreter;
pub mod robot;

pub use command::*;
pub use error::*;
pub use grid::*;
pub use interpreter::*;
pub use robot::*;
