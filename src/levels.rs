use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::{char_to_direction, GameError, GameState, Grid, Sausage, Vec2};

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse level file: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("no built-in level named {0:?}")]
    UnknownLevel(String),
}

/// Everything needed to set up one puzzle. Start positions live beside the layout, not in it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Level {
    pub name: String,
    pub layout: Vec<String>,
    pub sausages: Vec<Vec<(i32, i32)>>,
    pub player: (i32, i32),
    pub facing: char,
}

impl Level {
    pub fn from_json(json: &str) -> Result<Level, LevelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Level, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Level::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn build_grid(&self) -> Grid {
        Grid::new(self.layout.as_slice())
    }

    pub fn initial_state<'g>(&self, grid: &'g Grid) -> Result<GameState<'g>, LevelError> {
        let sausages = self.sausages.iter()
            .map(|cells| Sausage::new(cells.iter().map(|&c| Vec2::from(c)).collect()))
            .collect::<Result<Vec<_>, _>>()?;
        let state = GameState::new(grid, sausages, self.player.into(), char_to_direction(self.facing))?;
        Ok(state)
    }
}

pub const BUILTIN_LEVEL_NAMES: [&str; 3] = ["pos1", "pos2", "pos3"];

pub fn builtin_level(name: &str) -> Result<Level, LevelError> {
    match name {
        "pos1" => Ok(level(
            name,
            &[
                "       ",
                " LGGGL ",
                " LLLLL ",
                " LLLLL ",
                " LGGGL ",
                "       ",
            ],
            &[&[(1, 2), (2, 2)], &[(3, 2), (3, 3)], &[(4, 3), (5, 3)]],
            (1, 4),
            '^',
        )),
        "pos2" => Ok(level(
            name,
            &[
                "        ",
                "  LLLLL ",
                " LL   L ",
                " L  G L ",
                " L G  L ",
                " L   LL ",
                " LLLLL  ",
                "        ",
            ],
            &[&[(3, 1), (4, 1)]],
            (1, 5),
            '^',
        )),
        "pos3" => Ok(level(
            name,
            &[
                "       ",
                " LLLLL ",
                " LGLLG ",
                " LGLLG ",
                " LLLLL ",
                "       ",
            ],
            &[&[(3, 2), (3, 3)], &[(4, 2), (4, 3)]],
            (1, 4),
            '^',
        )),
        _ => Err(LevelError::UnknownLevel(name.to_string())),
    }
}

fn level(name: &str, layout: &[&str], sausages: &[&[(i32, i32)]], player: (i32, i32), facing: char) -> Level {
    Level {
        name: name.to_string(),
        layout: layout.iter().map(|r| r.to_string()).collect(),
        sausages: sausages.iter().map(|s| s.to_vec()).collect(),
        player,
        facing,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_levels_build_valid_start_states() {
        for name in BUILTIN_LEVEL_NAMES {
            let level = builtin_level(name).unwrap();
            let grid = level.build_grid();
            let state = level.initial_state(&grid).unwrap();

            assert_eq!(state.sausages().len(), level.sausages.len());
            assert!(!state.is_losing(), "{} starts lost", name);
            assert!(!state.is_winning(), "{} starts won", name);
        }
    }

    #[test]
    fn unknown_builtin_is_reported() {
        assert!(matches!(builtin_level("pos9"), Err(LevelError::UnknownLevel(_))));
    }

    #[test]
    fn level_json_round_trips() {
        let level = builtin_level("pos3").unwrap();
        let json = level.to_json().unwrap();
        assert_eq!(Level::from_json(&json).unwrap(), level);
    }

    #[test]
    fn bad_facing_is_invalid_direction() {
        let mut level = builtin_level("pos3").unwrap();
        level.facing = 'x';
        let grid = level.build_grid();

        let result = level.initial_state(&grid);
        assert!(matches!(result, Err(LevelError::Game(GameError::InvalidDirection(_)))));
    }

    #[test]
    fn bent_sausage_is_malformed() {
        let mut level = builtin_level("pos3").unwrap();
        level.sausages.push(vec![(1, 1), (2, 2)]);
        let grid = level.build_grid();

        let result = level.initial_state(&grid);
        assert!(matches!(result, Err(LevelError::Game(GameError::MalformedSausage { .. }))));
    }

    #[test]
    fn level_parses_from_json_text() {
        let json = r#"{
            "name": "tiny",
            "layout": ["LLG"],
            "sausages": [[[1, 0], [2, 0]]],
            "player": [0, 0],
            "facing": ">"
        }"#;
        let level = Level::from_json(json).unwrap();
        let grid = level.build_grid();
        let state = level.initial_state(&grid).unwrap();

        assert_eq!(state.facing(), Vec2::new(1, 0));
        assert_eq!(state.sausages()[0].cells(), &[Vec2::new(1, 0), Vec2::new(2, 0)]);
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(Level::from_json("{"), Err(LevelError::Json(_))));
    }
}
