use crate::infra::{DecisionError, DistanceOracle, Position};
use crate::planners::heuristic::{GameStatus, Tuning};
use crate::state::{Board, GameObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiamondFilter {
    Any,
    Red,
    Blue,
}

impl DiamondFilter {
    fn accepts(&self, diamond: &GameObject) -> bool {
        match self {
            DiamondFilter::Any => true,
            DiamondFilter::Red => diamond.points() == 2,
            DiamondFilter::Blue => diamond.points() == 1,
        }
    }
}

/// Everything the strategies read for one decision, derived once per turn.
pub struct DecisionContext<'a> {
    pub me: &'a GameObject,
    pub board: &'a Board,
    pub tuning: &'a Tuning,
    pub oracle: DistanceOracle,
    pub position: Position,
    pub base: Position,
    pub carried: i32,
    pub capacity: i32,
    pub time_left: i32,
    /// Effective distance home.
    pub steps_to_base: i32,
    /// `None` when scores are not tracked.
    pub status: Option<GameStatus>,
}

impl<'a> DecisionContext<'a> {
    pub fn new(
        me: &'a GameObject,
        board: &'a Board,
        tuning: &'a Tuning,
    ) -> Result<Self, DecisionError> {
        let base = me.base().ok_or(DecisionError::MissingBase { bot_id: me.id })?;
        let oracle = DistanceOracle::new(board);
        let position = me.position;
        let steps_to_base = oracle.effective_distance(position, base);

        Ok(Self {
            me,
            board,
            tuning,
            position,
            base,
            carried: me.carried(),
            capacity: me.capacity(),
            time_left: board.time_left(),
            steps_to_base,
            status: GameStatus::assess(me, board, tuning),
            oracle,
        })
    }

    pub fn enemies(&self) -> impl Iterator<Item = &'a GameObject> {
        let my_id = self.me.id;
        self.board.bots().filter(move |bot| bot.id != my_id)
    }

    /// Plain Manhattan distance from the bot.
    pub fn direct(&self, to: Position) -> i32 {
        self.position.distance(&to)
    }

    /// Teleporter-aware distance from the bot.
    pub fn distance(&self, to: Position) -> i32 {
        self.oracle.effective_distance(self.position, to)
    }

    pub fn head_to(&self, dest: Position) -> Position {
        self.oracle.best_step_target(self.position, dest)
    }

    pub fn head_home(&self) -> Position {
        self.head_to(self.base)
    }

    /// Nearest diamond by effective distance that still fits in the inventory.
    pub fn closest_diamond(&self, filter: DiamondFilter) -> Option<&'a GameObject> {
        self.board
            .diamonds()
            .filter(|d| filter.accepts(d) && d.fits(self.carried, self.capacity))
            .min_by_key(|d| self.distance(d.position))
    }

    /// Near-full bots risk losing their load in a tackle, so they only
    /// tackle when leading or hopelessly behind. Without scores there is no gate.
    pub fn tackling_allowed(&self) -> bool {
        let Some(status) = &self.status else {
            return true;
        };
        if self.carried < self.capacity - 1 {
            return true;
        }
        status.leading || status.is_behind_by_ratio(self.tuning.risky_tackle_score_ratio)
    }
}
