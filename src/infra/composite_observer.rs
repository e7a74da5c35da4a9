use crate::infra::{Direction, MatchObserver, Position};
use crate::sim::{MatchResult, MoveEvent};
use crate::state::{Board, GameObject, ObjectId};

pub struct CompositeObserver {
    observers: Vec<Box<dyn MatchObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Box<dyn MatchObserver>>) -> Self {
        Self { observers }
    }
}

impl MatchObserver for CompositeObserver {
    fn on_match_start(&mut self, seed: u64, board: &Board) {
        for observer in &mut self.observers {
            observer.on_match_start(seed, board);
        }
    }

    fn on_turn_start(&mut self, turn: i32, board: &Board) {
        for observer in &mut self.observers {
            observer.on_turn_start(turn, board);
        }
    }

    fn on_action_selected(
        &mut self,
        turn: i32,
        bot: &GameObject,
        direction: Direction,
        goal: Option<Position>,
    ) {
        for observer in &mut self.observers {
            observer.on_action_selected(turn, bot, direction, goal);
        }
    }

    fn on_move_resolved(&mut self, turn: i32, bot_id: ObjectId, events: &[MoveEvent]) {
        for observer in &mut self.observers {
            observer.on_move_resolved(turn, bot_id, events);
        }
    }

    fn on_match_finished(&mut self, result: &MatchResult) {
        for observer in &mut self.observers {
            observer.on_match_finished(result);
        }
    }
}
