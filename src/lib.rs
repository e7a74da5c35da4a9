pub mod infra;
pub mod planners;
pub mod sim;
pub mod state;

// Re-export commonly used types for convenience
pub use infra::{Direction, DistanceOracle, Position, step_toward};
pub use planners::{BotLogic, Goal, GoalSelector, Tuning};
pub use state::{Board, GameObject};
