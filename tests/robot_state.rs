// tests/robot_state.rs
use glam::IVec2;
use toy_robot::{Coordinate, Grid, Orientation, Placement, Robot};

fn placed(x: i32, y: i32, orientation: Orientation) -> Robot {
    let mut robot = Robot::new();
    robot.place(Coordinate::new(x, y), orientation);
    robot
}

#[test]
fn test_new_robot_is_unplaced() {
    let robot = Robot::new();
    assert!(!robot.is_placed());
    assert_eq!(robot.placement(), Placement::Unplaced);
    assert_eq!(robot.position(), None);
    assert_eq!(robot.orientation(), None);
    assert_eq!(robot.peek_forward(), None);
    assert_eq!(robot.report(), None, "unplaced robot has nothing to report");
}

#[test]
fn test_unplaced_robot_ignores_mutations() {
    let mut robot = Robot::new();
    robot.move_to(Coordinate::new(1, 1));
    robot.turn_left();
    robot.turn_right();
    assert_eq!(robot.placement(), Placement::Unplaced);
}

#[test]
fn test_place_sets_both_fields() {
    let robot = placed(2, 3, Orientation::West);
    assert!(robot.is_placed());
    assert_eq!(robot.position(), Some(Coordinate::new(2, 3)));
    assert_eq!(robot.orientation(), Some(Orientation::West));
    assert_eq!(robot.report().as_deref(), Some("2,3,WEST"));
}

#[test]
fn test_move_to_keeps_orientation() {
    let mut robot = placed(0, 0, Orientation::South);
    robot.move_to(Coordinate::new(4, 1));
    assert_eq!(robot.report().as_deref(), Some("4,1,SOUTH"));
}

#[test]
fn test_rotation_cycles() {
    let mut robot = placed(0, 0, Orientation::North);

    robot.turn_right();
    assert_eq!(robot.orientation(), Some(Orientation::East));
    robot.turn_right();
    assert_eq!(robot.orientation(), Some(Orientation::South));
    robot.turn_right();
    assert_eq!(robot.orientation(), Some(Orientation::West));
    robot.turn_right();
    assert_eq!(robot.orientation(), Some(Orientation::North));

    robot.turn_left();
    assert_eq!(robot.orientation(), Some(Orientation::West));
    robot.turn_left();
    assert_eq!(robot.orientation(), Some(Orientation::South));
}

#[test]
fn test_four_turns_restore_orientation() {
    for start in Orientation::CYCLE {
        assert_eq!(start.left().left().left().left(), start);
        assert_eq!(start.right().right().right().right(), start);
        assert_eq!(start.left().right(), start);
    }
}

#[test]
fn test_peek_forward_does_not_move() {
    let cases = [
        (Orientation::North, Coordinate::new(2, 3)),
        (Orientation::East, Coordinate::new(3, 2)),
        (Orientation::South, Coordinate::new(2, 1)),
        (Orientation::West, Coordinate::new(1, 2)),
    ];
    for (orientation, expected) in cases {
        let robot = placed(2, 2, orientation);
        assert_eq!(robot.peek_forward(), Some(expected), "facing {orientation}");
        assert_eq!(robot.position(), Some(Coordinate::new(2, 2)));
    }
}

#[test]
fn test_peek_forward_overflow() {
    let robot = placed(i32::MAX, 0, Orientation::East);
    assert_eq!(robot.peek_forward(), None);
}

#[test]
fn test_orientation_names() {
    assert_eq!("north".parse::<Orientation>(), Ok(Orientation::North));
    assert_eq!("East".parse::<Orientation>(), Ok(Orientation::East));
    assert!("up".parse::<Orientation>().is_err());
    assert_eq!(Orientation::South.to_string(), "SOUTH");
    assert_eq!(Orientation::West.forward(), IVec2::NEG_X);
}

#[test]
fn test_grid_containment() {
    let grid = Grid::default();
    assert_eq!(grid.width(), 6);
    assert_eq!(grid.height(), 6);

    assert!(grid.contains(Coordinate::new(0, 0)));
    assert!(grid.contains(Coordinate::new(5, 5)));
    assert!(grid.contains(Coordinate::new(0, 5)));
    assert!(!grid.contains(Coordinate::new(-1, 0)));
    assert!(!grid.contains(Coordinate::new(0, 6)));
    assert!(!grid.contains(Coordinate::new(6, 6)));
}

#[test]
fn test_custom_grid_bounds() {
    let grid = Grid::new(Coordinate::new(-2, -3), Coordinate::new(2, 3)).unwrap();
    assert_eq!(grid.min(), Coordinate::new(-2, -3));
    assert_eq!(grid.max(), Coordinate::new(2, 3));
    assert_eq!(grid.width(), 5);
    assert_eq!(grid.height(), 7);
    assert!(grid.contains(Coordinate::new(-2, 3)));
    assert!(!grid.contains(Coordinate::new(3, 0)));

    // A single cell is a valid table.
    let point = Grid::new(Coordinate::new(1, 1), Coordinate::new(1, 1)).unwrap();
    assert!(point.contains(Coordinate::new(1, 1)));
}

#[test]
fn test_empty_grid_is_rejected() {
    let err = Grid::new(Coordinate::new(3, 0), Coordinate::new(2, 5)).unwrap_err();
    assert!(err.to_string().contains("invalid grid bounds"), "{err}");
    assert!(Grid::new(Coordinate::new(0, 1), Coordinate::new(5, 0)).is_err());
}

#[test]
fn test_coordinate_display() {
    assert_eq!(Coordinate::new(-1, 4).to_string(), "-1,4");
    assert_eq!(Coordinate::from(IVec2::new(3, 2)), Coordinate::new(3, 2));
}
