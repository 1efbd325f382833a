mod engine;
mod json_export;
mod models;

pub use json_export::{action_name, solution_to_json, solution_to_json_data, JsonSausage, JsonSolution, JsonStep};
pub use models::{SearchConfig, SearchEngine, SearchOutcome, SearchStats, SearchStep, Solution, DEFAULT_PROGRESS_INTERVAL};
