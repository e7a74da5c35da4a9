use tracing::debug;

use crate::planners::heuristic::decision_context::DiamondFilter;
use crate::planners::heuristic::strategies::planner::SelectGoal;
use crate::planners::heuristic::{DecisionContext, Goal};

/// Go for the nearest diamond that fits, favouring red ones unless a blue is much closer.
pub struct CollectDiamondStrategy;

impl SelectGoal for CollectDiamondStrategy {
    fn name(&self) -> &'static str {
        "CollectDiamondStrategy"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "CollectDiamondStrategy"))]
    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        let red = ctx.closest_diamond(DiamondFilter::Red);
        let blue = ctx.closest_diamond(DiamondFilter::Blue);

        let target = match (red, blue) {
            (Some(red), Some(blue)) => {
                let to_red = ctx.distance(red.position);
                let to_blue = ctx.distance(blue.position);
                debug!("Nearest red at {} steps, nearest blue at {} steps", to_red, to_blue);
                if to_blue < to_red - ctx.tuning.red_preference_margin {
                    blue
                } else {
                    red
                }
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => return None,
        };

        Some(Goal::CollectDiamond(target.position))
    }
}
