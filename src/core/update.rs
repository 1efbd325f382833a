use std::collections::HashSet;
use tracing::trace;
use crate::core::{GameState, PlayerAction, Vec2};

/// Produces the state reached by `action`. The source state is never touched.
pub fn step<'g>(game: &GameState<'g>, action: PlayerAction) -> GameState<'g> {
    let mut next = game.clone();
    let forward = game.facing;
    let backward = -forward;

    match action {
        PlayerAction::Forward => {
            next.player = next.player + forward;
            let seed = next.player + forward;
            next.push_wave(seed, forward);
        }
        PlayerAction::Backward => {
            next.player = next.player + backward;
            let seed = next.player;
            next.push_wave(seed, backward);
        }
        PlayerAction::TurnLeft => {
            next.turn(forward.rotate_left(), forward);
        }
        PlayerAction::TurnRight => {
            next.turn(forward.rotate_right(), forward);
        }
    }

    next
}

impl<'g> GameState<'g> {
    /// One successor per action, in `PlayerAction::all_actions` order.
    pub fn expand(&self) -> [GameState<'g>; 4] {
        PlayerAction::all_actions().map(|action| step(self, action))
    }

    pub fn apply(&self, action: PlayerAction) -> GameState<'g> {
        step(self, action)
    }

    // The fork sweeps through the corner ahead of the player into the new side,
    // while whatever sits beside the player gets knocked backwards.
    fn turn(&mut self, side: Vec2, forward: Vec2) {
        self.facing = side;
        let corner = self.player + forward + side;
        self.push_wave(corner, side);
        let beside = self.player + side;
        self.push_wave(beside, -forward);
    }

    fn push_wave(&mut self, seed: Vec2, direction: Vec2) {
        let mut moved = vec![false; self.sausages.len()];
        let mut touched: HashSet<Vec2> = HashSet::from([seed]);

        while !touched.is_empty() {
            let mut next_touched = HashSet::new();
            for (i, sausage) in self.sausages.iter_mut().enumerate() {
                if moved[i] || !sausage.has_any_of_cells(&touched) {
                    continue;
                }
                sausage.roll(direction);
                sausage.grill_against(self.grid);
                moved[i] = true;
                trace!(sausage = i, ?direction, "rolled");
                next_touched.extend(sausage.cells().iter().copied());
            }
            touched = next_touched;
        }
    }
}
