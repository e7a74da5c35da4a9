use tracing::debug;

use crate::planners::heuristic::strategies::planner::SelectGoal;
use crate::planners::heuristic::{DecisionContext, Goal};

/// Run home when carrying a worthwhile load and an enemy is close enough to tackle.
pub struct EscapeStrategy;

impl SelectGoal for EscapeStrategy {
    fn name(&self) -> &'static str {
        "EscapeStrategy"
    }

    fn is_emergency(&self) -> bool {
        true
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "EscapeStrategy"))]
    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        if ctx.carried < ctx.tuning.escape_min_carried {
            return None;
        }

        let threat = ctx
            .enemies()
            .find(|enemy| ctx.direct(enemy.position) <= ctx.tuning.escape_enemy_radius)?;

        debug!(
            "Carrying {} with enemy {} at {}, escaping home",
            ctx.carried, threat.id, threat.position
        );
        Some(Goal::Escape(ctx.head_home()))
    }
}
