// Strategy modules
pub mod planner;

pub mod collect_diamond;
pub mod critical_return;
pub mod escape;
pub mod inventory_full;
pub mod last_dash;
pub mod red_button;
pub mod return_home;
pub mod secure_lead;
pub mod tackle;

// Re-export commonly used types
pub use planner::{GoalSelector, SelectGoal};
