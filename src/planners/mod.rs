pub mod heuristic;
mod random_walker;

pub use heuristic::{Goal, GoalSelector, Tuning};
pub use random_walker::RandomWalker;

use crate::infra::{DecisionError, Direction, Position};
use crate::state::{Board, GameObject};

/// Per-bot decision logic, called once per turn with a fresh snapshot.
pub trait BotLogic: Send {
    fn name(&self) -> &'static str;

    fn next_move(&mut self, me: &GameObject, board: &Board) -> Result<Direction, DecisionError>;

    /// Cell the logic was heading for on its last move, if it tracks one.
    fn last_goal(&self) -> Option<Position> {
        None
    }
}
