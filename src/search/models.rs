use std::collections::VecDeque;
use crate::core::{GameState, PlayerAction};

pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Log a progress line every time this many more states have been discovered.
    pub progress_interval: usize,
    /// Stop after dequeuing this many states. `None` searches until the queue runs dry.
    pub max_states: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            max_states: None,
        }
    }
}

pub struct SearchEngine<'g> {
    // map from game state to node id; depth, parent and action are indexed by id
    pub(crate) nodes: bimap::BiMap<GameState<'g>, usize>,
    pub(crate) depths: Vec<usize>,
    pub(crate) parents: Vec<usize>,
    pub(crate) actions: Vec<Option<PlayerAction>>,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) stats: SearchStats,
    pub(crate) config: SearchConfig,
    pub(crate) next_progress: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub discovered: usize,
    pub dequeued: usize,
    pub discarded: usize,
    pub max_depth: usize,
}

#[derive(Clone, Debug)]
pub struct Solution<'g> {
    pub depth: usize,
    /// Start to goal inclusive.
    pub path: Vec<GameState<'g>>,
    /// `actions[i]` leads from `path[i]` to `path[i + 1]`.
    pub actions: Vec<PlayerAction>,
}

#[derive(Debug)]
pub enum SearchStep<'g> {
    Discarded,
    Expanded { enqueued: usize },
    Solved(Solution<'g>),
    Exhausted,
}

#[derive(Debug)]
pub enum SearchOutcome<'g> {
    Solved(Solution<'g>),
    NoSolution,
    BudgetExhausted,
}
