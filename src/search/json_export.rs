use serde::{Deserialize, Serialize};
use crate::core::{GameState, PlayerAction};
use crate::search::Solution;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonSolution {
    pub depth: usize,
    pub actions: Vec<String>,
    pub steps: Vec<JsonStep>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonStep {
    pub player: (i32, i32),
    pub facing: char,
    pub sausages: Vec<JsonSausage>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct JsonSausage {
    pub cells: Vec<(i32, i32)>,
    /// `(bottom, top)` per cell
    pub grilled: Vec<(u8, u8)>,
}

impl From<&GameState<'_>> for JsonStep {
    fn from(state: &GameState<'_>) -> Self {
        JsonStep {
            player: (state.player().x, state.player().y),
            facing: state.facing_char(),
            sausages: state.sausages().iter().map(|s| JsonSausage {
                cells: s.cells().iter().map(|c| (c.x, c.y)).collect(),
                grilled: s.grilled().iter().map(|g| (g.bottom, g.top)).collect(),
            }).collect(),
        }
    }
}

pub fn action_name(action: PlayerAction) -> &'static str {
    match action {
        PlayerAction::Forward => "forward",
        PlayerAction::Backward => "backward",
        PlayerAction::TurnLeft => "turn_left",
        PlayerAction::TurnRight => "turn_right",
    }
}

pub fn solution_to_json_data(solution: &Solution) -> JsonSolution {
    JsonSolution {
        depth: solution.depth,
        actions: solution.actions.iter().map(|&a| action_name(a).to_string()).collect(),
        steps: solution.path.iter().map(JsonStep::from).collect(),
    }
}

pub fn solution_to_json(solution: &Solution) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&solution_to_json_data(solution))
}
