use std::collections::HashSet;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PlayerAction {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

/// Grill counters of one sausage segment. `bottom` is always the face currently resting on the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct GrillCount {
    pub bottom: u8,
    pub top: u8,
}

/// Immutable classification of the board, shared by every state of one run.
#[derive(Debug)]
pub struct Grid {
    pub(crate) rows: Vec<String>,
    pub(crate) grill_cells: HashSet<Vec2>,
    pub(crate) support_cells: HashSet<Vec2>,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Sausage {
    pub(crate) cells: Vec<Vec2>,
    pub(crate) grilled: Vec<GrillCount>,
}

#[derive(Clone, Debug)]
pub struct GameState<'g> {
    pub(crate) grid: &'g Grid,
    pub(crate) sausages: Vec<Sausage>,
    pub(crate) player: Vec2,
    pub(crate) facing: Vec2,
}
