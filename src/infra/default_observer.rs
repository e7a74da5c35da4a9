use tracing::{debug, info};

use crate::infra::{Direction, MatchObserver, Position};
use crate::sim::{MatchResult, MoveEvent};
use crate::state::{Board, GameObject, ObjectId};

pub struct DefaultObserver;

impl MatchObserver for DefaultObserver {
    fn on_match_start(&mut self, seed: u64, board: &Board) {
        info!("Match started");
        info!("- seed: {}", seed);
        info!("- board size: {}x{}", board.width, board.height);
        info!("- diamonds: {}, teleporters: {}", board.diamond_count(), board.teleporters().len());
        for bot in board.bots() {
            info!("- {} at {}", bot.display_name(), bot.position);
        }
    }

    fn on_action_selected(
        &mut self,
        turn: i32,
        bot: &GameObject,
        direction: Direction,
        goal: Option<Position>,
    ) {
        match goal {
            Some(goal) => debug!(
                "turn: {}, {} at {} carrying {}, goal: {}, action: {}",
                turn,
                bot.display_name(),
                bot.position,
                bot.carried(),
                goal,
                direction.as_str_name()
            ),
            None => debug!(
                "turn: {}, {} at {}, action: {}",
                turn,
                bot.display_name(),
                bot.position,
                direction.as_str_name()
            ),
        }
    }

    fn on_move_resolved(&mut self, turn: i32, bot_id: ObjectId, events: &[MoveEvent]) {
        for event in events {
            match event {
                MoveEvent::Tackled { victim, stolen } => {
                    info!("turn: {}, bot {} tackled bot {} for {}", turn, bot_id, victim, stolen)
                }
                MoveEvent::Deposited { amount, score } => {
                    info!("turn: {}, bot {} deposited {} (score {})", turn, bot_id, amount, score)
                }
                MoveEvent::ButtonPressed { respawned, button } => info!(
                    "turn: {}, bot {} pressed the button, {} diamonds respawned, button now at {}",
                    turn, bot_id, respawned, button
                ),
                other => debug!("turn: {}, bot {}: {:?}", turn, bot_id, other),
            }
        }
    }

    fn on_match_finished(&mut self, result: &MatchResult) {
        info!("Match {} finished after {} turns", result.seed, result.turns);
        for standing in &result.standings {
            info!("- {} ({}): {}", standing.name, standing.logic, standing.score);
        }
    }
}
