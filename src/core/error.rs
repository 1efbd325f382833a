use thiserror::Error;
use crate::core::Vec2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("facing {0:?} is not one of the four unit directions")]
    InvalidDirection(Vec2),
    #[error("sausage {cells:?} is malformed: {reason}")]
    MalformedSausage { cells: Vec<Vec2>, reason: &'static str },
}
