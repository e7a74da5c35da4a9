use tracing::debug;

use crate::infra::{DecisionError, Direction, Position, step_toward};
use crate::planners::BotLogic;
use crate::planners::heuristic::strategies::*;
use crate::planners::heuristic::{DecisionContext, Goal, Tuning};
use crate::state::{Board, GameObject};

pub trait SelectGoal: Send {
    fn name(&self) -> &'static str;

    /// Return true if a goal from this strategy ends the turn immediately,
    /// skipping the opportunistic deposit check.
    /// Default implementation returns false.
    fn is_emergency(&self) -> bool {
        false
    }

    /// Try to select a goal; `None` hands over to the next strategy.
    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal>;
}

/// Ordered goal cascade for one bot. The first strategy to return a goal wins.
pub struct GoalSelector {
    strategies: Vec<Box<dyn SelectGoal>>,
    tuning: Tuning,
    /// Target chosen on the previous turn, kept for diagnostics only
    last_goal: Option<Position>,
}

impl GoalSelector {
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        Self {
            strategies: vec![
                Box::new(escape::EscapeStrategy),
                Box::new(secure_lead::SecureLeadStrategy),
                Box::new(critical_return::CriticalReturnStrategy),
                Box::new(last_dash::LastDashStrategy),
                Box::new(tackle::ImmediateTackleStrategy),
                Box::new(inventory_full::InventoryFullStrategy),
                Box::new(red_button::RedButtonStrategy),
                Box::new(tackle::ProactiveTackleStrategy),
                Box::new(collect_diamond::CollectDiamondStrategy),
                Box::new(return_home::ReturnHomeStrategy),
            ],
            tuning,
            last_goal: None,
        }
    }

    pub fn last_goal(&self) -> Option<Position> {
        self.last_goal
    }

    /// Target cell for this turn.
    pub fn choose_goal(&mut self, me: &GameObject, board: &Board) -> Result<Position, DecisionError> {
        Ok(self.select_goal(me, board)?.target())
    }

    #[tracing::instrument(level = "debug", skip(self, me, board), fields(bot = me.id))]
    pub fn select_goal(&mut self, me: &GameObject, board: &Board) -> Result<Goal, DecisionError> {
        let ctx = DecisionContext::new(me, board, &self.tuning)?;
        let goal = Self::evaluate(&self.strategies, &ctx);
        debug!("Final selected goal: {}", goal.to_display_string());
        self.last_goal = Some(goal.target());
        Ok(goal)
    }

    fn evaluate(strategies: &[Box<dyn SelectGoal>], ctx: &DecisionContext) -> Goal {
        let mut selected = None;

        for strategy in strategies {
            if let Some(goal) = strategy.try_select(ctx) {
                if strategy.is_emergency() {
                    debug!("Emergency strategy {} selected {:?}", strategy.name(), goal);
                    return goal;
                }
                debug!("Strategy {} selected {:?}", strategy.name(), goal);
                selected = Some(goal);
                break;
            }
        }

        let goal = selected.unwrap_or_else(|| {
            debug!("No strategy produced a goal, falling back to base");
            Goal::ReturnHome(ctx.base)
        });

        Self::opportunistic_deposit(goal, ctx)
    }

    /// Never walk past a deposit that is one step away.
    fn opportunistic_deposit(goal: Goal, ctx: &DecisionContext) -> Goal {
        if goal.target() != ctx.base && ctx.position.is_adjacent(&ctx.base) && ctx.carried > 0 {
            debug!("Base is adjacent with {} carried, overriding {:?}", ctx.carried, goal);
            return Goal::Deposit(ctx.base);
        }
        goal
    }
}

impl Default for GoalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl BotLogic for GoalSelector {
    fn name(&self) -> &'static str {
        "cascade"
    }

    fn next_move(&mut self, me: &GameObject, board: &Board) -> Result<Direction, DecisionError> {
        let goal = self.choose_goal(me, board)?;
        Ok(step_toward(me.position, goal))
    }

    fn last_goal(&self) -> Option<Position> {
        self.last_goal
    }
}
