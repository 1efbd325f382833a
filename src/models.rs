use crate::core::{GameState, PlayerAction};

pub struct GameRenderState<'g> {
    pub game: GameState<'g>,
    pub won: bool,
    pub lost: bool,
    pub moves: usize,
    pub last_action: Option<PlayerAction>,
}
