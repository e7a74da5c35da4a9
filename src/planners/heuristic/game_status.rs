use crate::planners::heuristic::Tuning;
use crate::state::{Board, GameObject};

/// Score standing of one bot relative to its opponents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameStatus {
    pub my_score: i32,
    pub best_opponent_score: i32,
    /// True when strictly ahead, or when there is nobody to compete with.
    pub leading: bool,
    /// `my_score - best_opponent_score`; `None` when tied or unopposed.
    pub lead_margin: Option<i32>,
    /// Some opponent carries a big load and sits next to more diamonds.
    pub opponent_primed: bool,
}

impl GameStatus {
    /// Returns `None` when the engine does not report a score for `me`,
    /// which disables every score-aware rule.
    pub fn assess(me: &GameObject, board: &Board, tuning: &Tuning) -> Option<Self> {
        let my_score = me.score()?;

        let opponents: Vec<&GameObject> = board.bots().filter(|bot| bot.id != me.id).collect();
        let best_opponent_score = opponents
            .iter()
            .map(|bot| bot.score().unwrap_or(0))
            .fold(0, i32::max);

        let (leading, lead_margin) = if opponents.is_empty() {
            (true, None)
        } else if my_score == best_opponent_score {
            (false, None)
        } else {
            (
                my_score > best_opponent_score,
                Some(my_score - best_opponent_score),
            )
        };

        let opponent_primed = opponents.iter().any(|bot| {
            bot.carried() >= tuning.primed_min_carried
                && board
                    .diamonds()
                    .filter(|d| bot.position.distance(&d.position) <= tuning.primed_radius)
                    .count()
                    >= tuning.primed_min_nearby
        });

        Some(Self {
            my_score,
            best_opponent_score,
            leading,
            lead_margin,
            opponent_primed,
        })
    }

    /// True only for a finite margin below `margin` (negative margins included).
    pub fn leads_by_less_than(&self, margin: i32) -> bool {
        matches!(self.lead_margin, Some(m) if m < margin)
    }

    pub fn is_behind_by_ratio(&self, ratio: f64) -> bool {
        f64::from(self.my_score) < f64::from(self.best_opponent_score) * ratio
    }
}
