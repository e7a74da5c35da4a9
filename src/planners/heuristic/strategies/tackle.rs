use tracing::debug;

use crate::planners::heuristic::strategies::planner::SelectGoal;
use crate::planners::heuristic::{DecisionContext, Goal};

/// Step onto an adjacent enemy carrying enough to be worth stealing.
pub struct ImmediateTackleStrategy;

impl SelectGoal for ImmediateTackleStrategy {
    fn name(&self) -> &'static str {
        "ImmediateTackleStrategy"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "ImmediateTackleStrategy"))]
    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        if !ctx.tackling_allowed() {
            debug!("Carrying {} of {}, tackling is too risky", ctx.carried, ctx.capacity);
            return None;
        }

        let tuning = ctx.tuning;
        let worth_it = |carried: i32| {
            ctx.carried < tuning.tackle_low_own_carried || carried >= ctx.capacity - 1
        };
        let enemy = ctx.enemies().find(|enemy| {
            ctx.position.is_adjacent(&enemy.position)
                && enemy.carried() >= tuning.tackle_min_enemy_carried
                && worth_it(enemy.carried())
        })?;

        debug!("Tackling enemy {} carrying {}", enemy.id, enemy.carried());
        Some(Goal::Tackle(enemy.position))
    }
}

/// Close in on an enemy two steps away while our own load is light.
pub struct ProactiveTackleStrategy;

impl SelectGoal for ProactiveTackleStrategy {
    fn name(&self) -> &'static str {
        "ProactiveTackleStrategy"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "ProactiveTackleStrategy"))]
    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        if !ctx.tackling_allowed() {
            return None;
        }
        if ctx.carried >= ctx.capacity - ctx.capacity / 2 + 1 {
            return None;
        }

        let tuning = ctx.tuning;
        let enemy = ctx.enemies().find(|enemy| {
            ctx.direct(enemy.position) == tuning.proactive_tackle_distance
                && enemy.carried() >= tuning.tackle_min_enemy_carried
        })?;

        debug!("Approaching enemy {} carrying {}", enemy.id, enemy.carried());
        Some(Goal::ApproachEnemy(enemy.position))
    }
}
