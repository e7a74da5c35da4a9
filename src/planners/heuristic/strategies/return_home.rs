use crate::planners::heuristic::strategies::planner::SelectGoal;
use crate::planners::heuristic::{DecisionContext, Goal};

/// Fallback: nothing better to do, so go home.
pub struct ReturnHomeStrategy;

impl SelectGoal for ReturnHomeStrategy {
    fn name(&self) -> &'static str {
        "ReturnHomeStrategy"
    }

    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        Some(Goal::ReturnHome(ctx.head_home()))
    }
}
