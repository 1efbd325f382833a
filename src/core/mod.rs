mod error;
mod game_state;
mod grid;
mod model_helpers;
mod models;
mod sausage;
mod update;

pub use error::GameError;
pub use model_helpers::{char_to_direction, direction_to_char, DIRECTIONS};
pub use models::{GameState, Grid, GrillCount, PlayerAction, Sausage, Vec2};
pub use update::step;
