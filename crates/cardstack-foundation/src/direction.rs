//! Swipe directions and direction sets.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// The four cardinal swipe directions. Screen coordinates: `y` grows down.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left = 0,
    Right = 1,
    Up = 2,
    Down = 3,
}

impl SwipeDirection {
    pub const ALL: [SwipeDirection; 4] = [
        SwipeDirection::Left,
        SwipeDirection::Right,
        SwipeDirection::Up,
        SwipeDirection::Down,
    ];

    pub fn axis(self) -> Axis {
        match self {
            SwipeDirection::Left | SwipeDirection::Right => Axis::Horizontal,
            SwipeDirection::Up | SwipeDirection::Down => Axis::Vertical,
        }
    }

    /// `+1.0` for directions pointing along the positive axis.
    pub fn sign(self) -> f32 {
        match self {
            SwipeDirection::Right | SwipeDirection::Down => 1.0,
            SwipeDirection::Left | SwipeDirection::Up => -1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            SwipeDirection::Left => SwipeDirection::Right,
            SwipeDirection::Right => SwipeDirection::Left,
            SwipeDirection::Up => SwipeDirection::Down,
            SwipeDirection::Down => SwipeDirection::Up,
        }
    }

    /// Direction of a signed component along `axis`.
    pub fn from_axis(axis: Axis, value: f32) -> Self {
        match (axis, value >= 0.0) {
            (Axis::Horizontal, true) => SwipeDirection::Right,
            (Axis::Horizontal, false) => SwipeDirection::Left,
            (Axis::Vertical, true) => SwipeDirection::Down,
            (Axis::Vertical, false) => SwipeDirection::Up,
        }
    }
}

/// Bit set of allowed swipe directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<SwipeDirection>", into = "Vec<SwipeDirection>")]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b1111);
    pub const HORIZONTAL: Self =
        Self((1 << SwipeDirection::Left as u8) | (1 << SwipeDirection::Right as u8));
    pub const VERTICAL: Self =
        Self((1 << SwipeDirection::Up as u8) | (1 << SwipeDirection::Down as u8));

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, direction: SwipeDirection) -> Self {
        self.insert(direction);
        self
    }

    pub fn insert(&mut self, direction: SwipeDirection) {
        self.0 |= 1 << (direction as u8);
    }

    pub fn remove(&mut self, direction: SwipeDirection) {
        self.0 &= !(1 << (direction as u8));
    }

    pub fn contains(&self, direction: SwipeDirection) -> bool {
        (self.0 & (1 << (direction as u8))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = SwipeDirection> + '_ {
        SwipeDirection::ALL
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Vec<SwipeDirection>> for DirectionSet {
    fn from(directions: Vec<SwipeDirection>) -> Self {
        directions
            .into_iter()
            .fold(Self::NONE, |set, direction| set.with(direction))
    }
}

impl From<DirectionSet> for Vec<SwipeDirection> {
    fn from(set: DirectionSet) -> Self {
        set.iter().collect()
    }
}
