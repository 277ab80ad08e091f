//! Parsing of single command lines.

use crate::robot::Orientation;

/// A command parsed from one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Put the robot on the table facing a direction (`PLACE x,y,DIRECTION`).
    Place {
        x: i32,
        y: i32,
        orientation: Orientation,
    },
    /// Relocate an already placed robot, keeping its orientation (`PLACE x,y`).
    PlaceAt { x: i32, y: i32 },
    /// Step one cell forward (`MOVE`).
    Move,
    /// Quarter turn counter-clockwise (`LEFT`).
    Left,
    /// Quarter turn clockwise (`RIGHT`).
    Right,
    /// Print position and orientation (`REPORT`).
    Report,
    /// Anything that does not match the grammar.
    Invalid,
}

impl Command {
    /// Parses one line. Never fails: unrecognised input yields [`Command::Invalid`].
    ///
    /// Verbs and orientation names are case-insensitive and tokens may be separated by
    /// any run of whitespace. `MOVE`, `LEFT`, `RIGHT` and `REPORT` ignore trailing tokens.
    /// `PLACE` takes exactly one argument token holding two or three comma-separated
    /// fields; empty fields are skipped and each field is trimmed. Coordinates may be
    /// negative here, bounds are checked on execution.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return Command::Invalid;
        };

        let is = |name: &str| verb.eq_ignore_ascii_case(name);
        if is("PLACE") {
            match (tokens.next(), tokens.next()) {
                (Some(args), None) => parse_place_args(args),
                _ => Command::Invalid,
            }
        } else if is("MOVE") {
            Command::Move
        } else if is("LEFT") {
            Command::Left
        } else if is("RIGHT") {
            Command::Right
        } else if is("REPORT") {
            Command::Report
        } else {
            Command::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Command::Invalid)
    }
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        Command::parse(line)
    }
}

fn parse_place_args(args: &str) -> Command {
    let fields: Vec<&str> = args
        .split(',')
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .collect();

    let (x, y) = match fields.as_slice() {
        [x, y] | [x, y, _] => match (x.parse::<i32>(), y.parse::<i32>()) {
            (Ok(x), Ok(y)) => (x, y),
            _ => return Command::Invalid,
        },
        _ => return Command::Invalid,
    };

    match fields.get(2) {
        None => Command::PlaceAt { x, y },
        Some(name) => match name.parse::<Orientation>() {
            Ok(orientation) => Command::Place { x, y, orientation },
            Err(_) => Command::Invalid,
        },
    }
}
