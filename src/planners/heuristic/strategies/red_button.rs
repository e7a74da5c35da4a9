use tracing::debug;

use crate::infra::Position;
use crate::planners::heuristic::decision_context::DiamondFilter;
use crate::planners::heuristic::strategies::planner::SelectGoal;
use crate::planners::heuristic::{DecisionContext, Goal};

/// Walk to the red button when a diamond respawn is worth more than what is left.
pub struct RedButtonStrategy;

impl RedButtonStrategy {
    fn scarcity(ctx: &DecisionContext, button: Position) -> bool {
        let tuning = ctx.tuning;
        let remaining = ctx.board.diamond_count();

        if remaining == 0 && ctx.carried < ctx.capacity {
            return true;
        }
        if remaining < tuning.button_scarce_diamonds && ctx.carried < ctx.capacity - 1 {
            return true;
        }
        if remaining < tuning.button_sparse_diamonds && ctx.carried < ctx.capacity / 2 {
            let Some(nearest) = ctx.closest_diamond(DiamondFilter::Any) else {
                return true;
            };
            let to_diamond = ctx.distance(nearest.position);
            return ctx.distance(button) < to_diamond - tuning.button_detour_margin
                || to_diamond > tuning.button_far_diamond;
        }
        false
    }

    /// Reset the board under an opponent about to cash in a big load.
    fn disruption(ctx: &DecisionContext, button: Position) -> bool {
        let Some(status) = &ctx.status else {
            return false;
        };
        status.opponent_primed
            && (!status.leading || status.leads_by_less_than(ctx.capacity))
            && ctx.distance(button) <= ctx.tuning.disruption_button_reach
    }

    /// Shuffle the board when far behind and the remaining diamonds will not close the gap.
    fn catch_up(ctx: &DecisionContext, button: Position) -> bool {
        let Some(status) = &ctx.status else {
            return false;
        };
        let tuning = ctx.tuning;
        !status.leading
            && status.is_behind_by_ratio(tuning.behind_score_ratio)
            && ctx.board.diamond_count() < tuning.behind_max_diamonds
            && ctx.distance(button) <= tuning.behind_button_reach
    }
}

impl SelectGoal for RedButtonStrategy {
    fn name(&self) -> &'static str {
        "RedButtonStrategy"
    }

    #[tracing::instrument(level = "debug", skip(self, ctx), fields(strategy = "RedButtonStrategy"))]
    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        let button = ctx.board.red_button()?.position;

        let reason = if Self::scarcity(ctx, button) {
            "scarcity"
        } else if Self::disruption(ctx, button) {
            "disruption"
        } else if Self::catch_up(ctx, button) {
            "catch-up"
        } else {
            return None;
        };

        debug!(
            "Pressing red button at {} ({}, {} diamonds left)",
            button,
            reason,
            ctx.board.diamond_count()
        );
        Some(Goal::PressButton(button))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planners::heuristic::test_support::*;

    #[test]
    fn test_presses_on_empty_board() {
        let me = bot(ME, (5, 5), (0, 0), 4);
        let board = board_with(&me, vec![button(30, (9, 9))]);
        with_context(&me, &board, |ctx| {
            assert_eq!(RedButtonStrategy.try_select(ctx), Some(Goal::PressButton(pos(9, 9))));
        });
    }

    #[test]
    fn test_presses_when_few_diamonds_and_room() {
        let me = bot(ME, (5, 5), (0, 0), 3);
        let board = board_with(&me, vec![button(30, (9, 9)), blue(10, (5, 6)), blue(11, (6, 6))]);
        with_context(&me, &board, |ctx| {
            assert_eq!(RedButtonStrategy.try_select(ctx), Some(Goal::PressButton(pos(9, 9))));
        });
    }

    #[test]
    fn test_sparse_board_prefers_nearby_diamond() {
        let mut others = vec![button(30, (9, 9))];
        for (idx, x) in (0..5).enumerate() {
            others.push(blue(10 + idx as u32, (x, 4)));
        }
        let me = bot(ME, (5, 5), (0, 0), 0);
        let board = board_with(&me, others);
        with_context(&me, &board, |ctx| assert_eq!(RedButtonStrategy.try_select(ctx), None));
    }

    #[test]
    fn test_sparse_board_presses_when_button_is_closer() {
        let mut others = vec![button(30, (5, 6))];
        for (idx, x) in (10..15).enumerate() {
            others.push(blue(10 + idx as u32, (x, 14)));
        }
        let me = bot(ME, (5, 5), (0, 0), 1);
        let board = board_with(&me, others);
        with_context(&me, &board, |ctx| {
            assert_eq!(RedButtonStrategy.try_select(ctx), Some(Goal::PressButton(pos(5, 6))));
        });
    }

    #[test]
    fn test_plenty_of_diamonds_no_press() {
        let mut others = vec![button(30, (5, 6))];
        for (idx, x) in (0..10).enumerate() {
            others.push(blue(10 + idx as u32, (x, 12)));
        }
        let me = bot(ME, (5, 5), (0, 0), 0);
        let board = board_with(&me, others);
        with_context(&me, &board, |ctx| assert_eq!(RedButtonStrategy.try_select(ctx), None));
    }

    #[test]
    fn test_disrupts_primed_opponent() {
        let mut others = vec![
            button(30, (5, 8)),
            bot(2, (12, 12), (14, 14), 3).with_score(10),
        ];
        for (idx, x) in (8..16).enumerate() {
            others.push(blue(10 + idx as u32, (x.min(14), 11)));
        }
        let me = bot(ME, (5, 5), (0, 0), 2).with_score(8);
        let board = board_with(&me, others);
        with_context(&me, &board, |ctx| {
            assert!(ctx.status.is_some_and(|s| s.opponent_primed));
            assert_eq!(RedButtonStrategy.try_select(ctx), Some(Goal::PressButton(pos(5, 8))));
        });
    }

    #[test]
    fn test_catch_up_when_far_behind() {
        let mut others = vec![button(30, (5, 10)), bot(2, (14, 0), (14, 0), 0).with_score(20)];
        for (idx, x) in (0..5).enumerate() {
            others.push(blue(10 + idx as u32, (x, 4)));
        }
        let me = bot(ME, (5, 5), (0, 0), 3).with_score(5);
        let board = board_with(&me, others);
        with_context(&me, &board, |ctx| {
            assert_eq!(RedButtonStrategy.try_select(ctx), Some(Goal::PressButton(pos(5, 10))));
        });
    }

    #[test]
    fn test_no_button_on_board() {
        let me = bot(ME, (5, 5), (0, 0), 0);
        let board = board_with(&me, vec![]);
        with_context(&me, &board, |ctx| assert_eq!(RedButtonStrategy.try_select(ctx), None));
    }
}
