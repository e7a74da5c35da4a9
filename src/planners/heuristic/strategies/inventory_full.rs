use tracing::debug;

use crate::planners::heuristic::strategies::planner::SelectGoal;
use crate::planners::heuristic::{DecisionContext, Goal};

pub struct InventoryFullStrategy;

impl SelectGoal for InventoryFullStrategy {
    fn name(&self) -> &'static str {
        "InventoryFullStrategy"
    }

    fn try_select(&self, ctx: &DecisionContext) -> Option<Goal> {
        if ctx.carried < ctx.capacity {
            return None;
        }
        debug!("Inventory full ({}/{}), unloading", ctx.carried, ctx.capacity);
        Some(Goal::UnloadFull(ctx.head_home()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planners::heuristic::test_support::*;

    #[test]
    fn test_full_inventory_goes_home() {
        let me = bot(ME, (5, 5), (0, 0), 3).with_capacity(3);
        let board = board_with(&me, vec![]);
        with_context(&me, &board, |ctx| {
            assert_eq!(InventoryFullStrategy.try_select(ctx), Some(Goal::UnloadFull(pos(0, 0))));
        });
    }

    #[test]
    fn test_room_left() {
        let me = bot(ME, (5, 5), (0, 0), 4);
        let board = board_with(&me, vec![]);
        with_context(&me, &board, |ctx| assert_eq!(InventoryFullStrategy.try_select(ctx), None));
    }
}
