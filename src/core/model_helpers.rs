use std::ops::{Add, Neg};
use crate::core::{PlayerAction, Vec2};

pub const DIRECTIONS: [Vec2; 4] = [
    Vec2 { x: -1, y: 0 },
    Vec2 { x: 0, y: -1 },
    Vec2 { x: 0, y: 1 },
    Vec2 { x: 1, y: 0 },
];

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Vec2 {
        Vec2 { x, y }
    }

    /// Facing after a 90 degree turn to the left, in screen coordinates (y grows downwards)
    pub fn rotate_left(self) -> Vec2 {
        Vec2 { x: self.y, y: -self.x }
    }

    pub fn rotate_right(self) -> Vec2 {
        Vec2 { x: -self.y, y: self.x }
    }

    pub fn is_unit_direction(self) -> bool {
        DIRECTIONS.contains(&self)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2 { x: -self.x, y: -self.y }
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Vec2 { x, y }
    }
}

/// Decodes a facing char. Unknown chars map to the zero vector, which is never a legal facing.
pub fn char_to_direction(ch: char) -> Vec2 {
    match ch {
        '<' => Vec2::new(-1, 0),
        '^' => Vec2::new(0, -1),
        'V' => Vec2::new(0, 1),
        '>' => Vec2::new(1, 0),
        _ => Vec2::ZERO,
    }
}

pub fn direction_to_char(direction: Vec2) -> char {
    match (direction.x, direction.y) {
        (-1, 0) => '<',
        (0, -1) => '^',
        (0, 1) => 'V',
        (1, 0) => '>',
        _ => '?',
    }
}

impl PlayerAction {
    pub fn all_actions() -> [PlayerAction; 4] {
        [
            PlayerAction::Forward,
            PlayerAction::Backward,
            PlayerAction::TurnLeft,
            PlayerAction::TurnRight,
        ]
    }
}
