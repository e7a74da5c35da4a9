use serde::Serialize;

use crate::infra::Position;

/// Outcome of the cascade: why the bot is heading somewhere, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Goal {
    Escape(Position),
    SecureLead(Position),
    CriticalReturn(Position),
    LastDash(Position),
    Tackle(Position),
    UnloadFull(Position),
    PressButton(Position),
    ApproachEnemy(Position),
    CollectDiamond(Position),
    ReturnHome(Position),
    /// Base is one step away and the bot carries something.
    Deposit(Position),
}

impl Goal {
    /// Cell to step toward this turn.
    pub fn target(&self) -> Position {
        match *self {
            Goal::Escape(pos)
            | Goal::SecureLead(pos)
            | Goal::CriticalReturn(pos)
            | Goal::LastDash(pos)
            | Goal::Tackle(pos)
            | Goal::UnloadFull(pos)
            | Goal::PressButton(pos)
            | Goal::ApproachEnemy(pos)
            | Goal::CollectDiamond(pos)
            | Goal::ReturnHome(pos)
            | Goal::Deposit(pos) => pos,
        }
    }

    /// Format goal as a display string for logging
    pub fn to_display_string(&self) -> String {
        let name = match self {
            Goal::Escape(_) => "Escape",
            Goal::SecureLead(_) => "SecureLead",
            Goal::CriticalReturn(_) => "CriticalReturn",
            Goal::LastDash(_) => "LastDash",
            Goal::Tackle(_) => "Tackle",
            Goal::UnloadFull(_) => "UnloadFull",
            Goal::PressButton(_) => "PressButton",
            Goal::ApproachEnemy(_) => "ApproachEnemy",
            Goal::CollectDiamond(_) => "CollectDiamond",
            Goal::ReturnHome(_) => "ReturnHome",
            Goal::Deposit(_) => "Deposit",
        };
        format!("{}{}", name, self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_and_display() {
        let goal = Goal::PressButton(Position::new(4, 2));
        assert_eq!(goal.target(), Position::new(4, 2));
        assert_eq!(goal.to_display_string(), "PressButton(4, 2)");
    }
}
