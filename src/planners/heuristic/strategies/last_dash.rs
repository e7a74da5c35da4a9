use tracing::debug;

use crate::planners::heuristic::strategies::planner::SelectGoal;
use crate::planners::heuristic::{DecisionContext, Goal};

/// With empty pockets and only a few turns left, grab one nearby diamond
/// if it can still be carried home in time.
pub struct LastDashStrategy;

impl SelectGoal for LastDashStrategy {
    fn name(&self) -> &'static str {
        "LastDashStrategy"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "LastDashStrategy"))]
    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        let tuning = ctx.tuning;
        if ctx.carried != 0 || ctx.time_left > tuning.last_dash_max_time {
            return None;
        }

        let (diamond, total_steps) = ctx
            .board
            .diamonds()
            .filter(|d| ctx.direct(d.position) <= tuning.last_dash_max_reach)
            .filter(|d| d.fits(ctx.carried, ctx.capacity))
            .map(|d| {
                let round_trip =
                    ctx.direct(d.position) + ctx.oracle.effective_distance(d.position, ctx.base);
                (d, round_trip)
            })
            .filter(|&(_, round_trip)| round_trip + tuning.last_dash_min_buffer <= ctx.time_left)
            .min_by_key(|&(_, round_trip)| round_trip)?;

        debug!(
            "Last dash for diamond {} at {}, {} steps with {} turns left",
            diamond.id, diamond.position, total_steps, ctx.time_left
        );
        Some(Goal::LastDash(diamond.position))
    }
}
