mod decision_context;
mod game_status;
mod goal;
mod strategies;
mod tuning;

#[cfg(test)]
mod test_support;

pub use decision_context::{DecisionContext, DiamondFilter};
pub use game_status::GameStatus;
pub use goal::Goal;
pub use strategies::{GoalSelector, SelectGoal};
pub use tuning::Tuning;
