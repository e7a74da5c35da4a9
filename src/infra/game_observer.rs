use crate::infra::{Direction, Position};
use crate::sim::{MatchResult, MoveEvent};
use crate::state::{Board, GameObject, ObjectId};

/// Trait for observing match events during execution
pub trait MatchObserver: Send {
    /// Called once the board is laid out, before the first turn
    fn on_match_start(&mut self, seed: u64, board: &Board);

    /// Called at the start of every turn
    fn on_turn_start(&mut self, _turn: i32, _board: &Board) {}

    /// Called when a bot has picked its move
    fn on_action_selected(
        &mut self,
        turn: i32,
        bot: &GameObject,
        direction: Direction,
        goal: Option<Position>,
    );

    /// Called after the move has been applied to the board
    fn on_move_resolved(&mut self, turn: i32, bot_id: ObjectId, events: &[MoveEvent]);

    /// Called when time runs out
    fn on_match_finished(&mut self, result: &MatchResult);
}
