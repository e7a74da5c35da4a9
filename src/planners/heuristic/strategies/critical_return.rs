use tracing::debug;

use crate::planners::heuristic::strategies::planner::SelectGoal;
use crate::planners::heuristic::{DecisionContext, Goal};

/// Head home while there is still time to bank what we carry.
pub struct CriticalReturnStrategy;

impl SelectGoal for CriticalReturnStrategy {
    fn name(&self) -> &'static str {
        "CriticalReturnStrategy"
    }

    fn is_emergency(&self) -> bool {
        true
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "CriticalReturnStrategy"))]
    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        if ctx.carried == 0 || ctx.time_left > ctx.steps_to_base + ctx.tuning.return_time_buffer {
            return None;
        }

        debug!(
            "{} turns left, {} steps to base, returning with {}",
            ctx.time_left, ctx.steps_to_base, ctx.carried
        );
        Some(Goal::CriticalReturn(ctx.head_home()))
    }
}
