mod composite_observer;
mod default_observer;
pub mod distance;
mod error;
mod game_observer;
mod replay;
mod types;

pub use composite_observer::CompositeObserver;
pub use default_observer::DefaultObserver;
pub use distance::{DistanceOracle, Route};
pub use error::DecisionError;
pub use game_observer::MatchObserver;
pub use replay::ReplayObserver;
pub use types::{Direction, Position};

// ============================================================================
// Helper functions
// ============================================================================

/// Single step from `current` toward `goal`, moving along x first.
pub fn step_toward(current: Position, goal: Position) -> Direction {
    let dx = (goal.x - current.x).clamp(-1, 1);
    let dy = if dx != 0 {
        0
    } else {
        (goal.y - current.y).clamp(-1, 1)
    };
    Direction { dx, dy }
}
