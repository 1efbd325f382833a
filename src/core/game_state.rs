use std::hash::{Hash, Hasher};
use crate::core::{direction_to_char, GameError, GameState, Grid, Sausage, Vec2};

impl<'g> GameState<'g> {
    pub fn new(grid: &'g Grid, sausages: Vec<Sausage>, player: Vec2, facing: Vec2) -> Result<GameState<'g>, GameError> {
        if !facing.is_unit_direction() {
            return Err(GameError::InvalidDirection(facing));
        }
        Ok(GameState { grid, sausages, player, facing })
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn sausages(&self) -> &[Sausage] {
        &self.sausages
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    pub fn facing_char(&self) -> char {
        direction_to_char(self.facing)
    }

    pub fn is_winning(&self) -> bool {
        self.sausages.iter().all(|s| s.is_ready())
    }

    pub fn is_losing(&self) -> bool {
        let any_sausage_lost = self.sausages.iter()
            .any(|s| s.is_burned() || !self.grid.is_sausage_supported(s));
        any_sausage_lost || !self.grid.is_player_position_valid(&self.player)
    }
}

// Every state of a run borrows the same grid, so it takes no part in identity.
impl Hash for GameState<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sausages.hash(state);
        self.player.hash(state);
        self.facing.hash(state);
    }
}

impl Eq for GameState<'_> {}
impl PartialEq<Self> for GameState<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.sausages == other.sausages
            && self.player == other.player
            && self.facing == other.facing
    }
}
