use tracing::debug;

use crate::planners::heuristic::strategies::planner::SelectGoal;
use crate::planners::heuristic::{DecisionContext, Goal};

/// Bank the load early when only slightly ahead and the clock starts to matter.
/// Inert when scores are not tracked.
pub struct SecureLeadStrategy;

impl SelectGoal for SecureLeadStrategy {
    fn name(&self) -> &'static str {
        "SecureLeadStrategy"
    }

    fn is_emergency(&self) -> bool {
        true
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "SecureLeadStrategy"))]
    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        let status = ctx.status.as_ref()?;

        if !status.leading || !status.leads_by_less_than(ctx.capacity) || ctx.carried < 1 {
            return None;
        }

        let tuning = ctx.tuning;
        let past_critical = ctx.time_left <= ctx.steps_to_base + tuning.return_time_buffer;
        let inside_window = f64::from(ctx.time_left)
            <= f64::from(ctx.steps_to_base) * tuning.secure_lead_time_factor;
        if past_critical || !inside_window {
            return None;
        }

        debug!(
            "Leading by {:?} with {} turns left, securing {} diamonds",
            status.lead_margin, ctx.time_left, ctx.carried
        );
        Some(Goal::SecureLead(ctx.head_home()))
    }
}
