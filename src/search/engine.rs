use std::collections::VecDeque;
use tracing::{debug, info};
use crate::core::{GameState, PlayerAction};
use crate::search::models::{SearchConfig, SearchEngine, SearchOutcome, SearchStats, SearchStep, Solution};

impl<'g> SearchEngine<'g> {
    pub fn new(config: SearchConfig) -> Self {
        SearchEngine {
            nodes: bimap::BiMap::new(),
            depths: Vec::new(),
            parents: Vec::new(),
            actions: Vec::new(),
            queue: VecDeque::new(),
            stats: SearchStats::default(),
            next_progress: config.progress_interval,
            config,
        }
    }

    /// Forgets any previous run and queues `start` at depth 0. The start state is its own parent.
    pub fn seed(&mut self, start: GameState<'g>) {
        *self = SearchEngine::new(self.config);
        self.discover(start, 0, None, None);
    }

    pub fn run(&mut self, start: GameState<'g>) -> SearchOutcome<'g> {
        self.seed(start);
        debug!(config = ?self.config, "search started");

        loop {
            if let Some(max_states) = self.config.max_states {
                if self.stats.dequeued >= max_states {
                    info!(dequeued = self.stats.dequeued, total = self.stats.discovered, "search budget exhausted");
                    return SearchOutcome::BudgetExhausted;
                }
            }

            match self.step() {
                SearchStep::Solved(solution) => {
                    debug!(depth = solution.depth, stats = ?self.stats, "solution found");
                    return SearchOutcome::Solved(solution);
                }
                SearchStep::Exhausted => {
                    debug!(stats = ?self.stats, "queue exhausted without a solution");
                    return SearchOutcome::NoSolution;
                }
                SearchStep::Discarded | SearchStep::Expanded { .. } => {}
            }
        }
    }

    /// Dequeues and handles exactly one state.
    pub fn step(&mut self) -> SearchStep<'g> {
        let Some(id) = self.queue.pop_front() else {
            return SearchStep::Exhausted;
        };
        let Some(state) = self.nodes.get_by_right(&id) else {
            return SearchStep::Exhausted;
        };
        self.stats.dequeued += 1;

        if state.is_losing() {
            self.stats.discarded += 1;
            return SearchStep::Discarded;
        }

        let depth = self.depths[id];
        if self.stats.discovered > self.next_progress {
            info!(depth, total = self.stats.discovered, "search progress");
            while self.next_progress < self.stats.discovered {
                self.next_progress += self.config.progress_interval.max(1);
            }
        }

        if state.is_winning() {
            return SearchStep::Solved(self.reconstruct(id));
        }

        let successors = state.expand();
        let mut enqueued = 0;
        for (action, next) in PlayerAction::all_actions().into_iter().zip(successors) {
            if self.discover(next, depth + 1, Some(id), Some(action)) {
                enqueued += 1;
            }
        }
        SearchStep::Expanded { enqueued }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn depth_of(&self, state: &GameState<'g>) -> Option<usize> {
        self.nodes.get_by_left(state).map(|&id| self.depths[id])
    }

    pub fn parent_of(&self, state: &GameState<'g>) -> Option<&GameState<'g>> {
        let &id = self.nodes.get_by_left(state)?;
        self.nodes.get_by_right(&self.parents[id])
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Records a state seen for the first time and queues it. Known states keep their first depth and parent.
    fn discover(
        &mut self,
        state: GameState<'g>,
        depth: usize,
        parent: Option<usize>,
        action: Option<PlayerAction>,
    ) -> bool {
        let id = self.depths.len();
        if self.nodes.insert_no_overwrite(state, id).is_err() {
            return false;
        }
        self.depths.push(depth);
        self.parents.push(parent.unwrap_or(id));
        self.actions.push(action);
        self.queue.push_back(id);
        self.stats.discovered += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        true
    }

    fn reconstruct(&self, goal: usize) -> Solution<'g> {
        let mut ids = vec![goal];
        let mut current = goal;
        while self.parents[current] != current {
            current = self.parents[current];
            ids.push(current);
        }
        ids.reverse();

        let path = ids.iter()
            .filter_map(|id| self.nodes.get_by_right(id).cloned())
            .collect();
        let actions = ids.iter()
            .filter_map(|&id| self.actions[id])
            .collect();

        Solution {
            depth: self.depths[goal],
            path,
            actions,
        }
    }
}
