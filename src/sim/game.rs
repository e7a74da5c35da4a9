use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

use crate::infra::{Direction, MatchObserver, Position};
use crate::planners::BotLogic;
use crate::sim::{MatchError, SimConfig, board_gen};
use crate::state::{Board, ObjectId, ObjectKind};

/// What happened while resolving one bot's move, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MoveEvent {
    /// Standing still or walking off the board.
    Blocked { at: Position },
    Moved { from: Position, to: Position },
    Teleported { from: Position, to: Position },
    PickedUp { diamond: ObjectId, points: i32 },
    Deposited { amount: i32, score: i32 },
    Tackled { victim: ObjectId, stolen: i32 },
    ButtonPressed { respawned: usize, button: Position },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub bot_id: ObjectId,
    pub name: String,
    pub logic: &'static str,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub seed: u64,
    pub turns: i32,
    /// Highest score first.
    pub standings: Vec<Standing>,
}

impl MatchResult {
    /// The sole top scorer; `None` on a shared first place.
    pub fn winner(&self) -> Option<&Standing> {
        match self.standings.as_slice() {
            [first] => Some(first),
            [first, second, ..] if first.score > second.score => Some(first),
            _ => None,
        }
    }
}

struct Seat {
    bot_id: ObjectId,
    logic: Box<dyn BotLogic>,
}

/// One local match: a board, the logic driving each bot, and the turn loop.
pub struct Match {
    seed: u64,
    board: Board,
    seats: Vec<Seat>,
    rng: StdRng,
    diamonds_per_spawn: usize,
    observer: Box<dyn MatchObserver>,
}

impl Match {
    pub fn new(
        config: &SimConfig,
        seed: u64,
        logics: Vec<Box<dyn BotLogic>>,
        observer: Box<dyn MatchObserver>,
    ) -> Result<Self, MatchError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let names: Vec<String> = logics
            .iter()
            .enumerate()
            .map(|(idx, logic)| format!("{}-{}", logic.name(), idx + 1))
            .collect();
        let board = board_gen::generate(config, &mut rng, &names)?;

        let mut game = Self::from_board(seed, board, logics, observer);
        game.rng = rng;
        Ok(game)
    }

    /// Play on a prepared board. Logics are assigned to bots in board order;
    /// the red button respawns as many diamonds as the board starts with.
    pub fn from_board(
        seed: u64,
        board: Board,
        logics: Vec<Box<dyn BotLogic>>,
        observer: Box<dyn MatchObserver>,
    ) -> Self {
        let seats = board
            .bots()
            .map(|bot| bot.id)
            .zip(logics)
            .map(|(bot_id, logic)| Seat { bot_id, logic })
            .collect();

        Self {
            seed,
            diamonds_per_spawn: board.diamond_count(),
            board,
            seats,
            rng: StdRng::seed_from_u64(seed),
            observer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run(&mut self) -> Result<MatchResult, MatchError> {
        self.observer.on_match_start(self.seed, &self.board);

        let mut turn = 0;
        while self.board.time_left() > 0 {
            turn += 1;
            self.play_turn(turn)?;
            self.board.time_left = Some(self.board.time_left() - 1);
        }

        let result = self.result(turn);
        self.observer.on_match_finished(&result);
        Ok(result)
    }

    fn play_turn(&mut self, turn: i32) -> Result<(), MatchError> {
        self.observer.on_turn_start(turn, &self.board);

        for idx in 0..self.seats.len() {
            let bot_id = self.seats[idx].bot_id;
            let Some(me) = self.board.object(bot_id) else {
                continue;
            };

            let seat = &mut self.seats[idx];
            let direction = seat.logic.next_move(me, &self.board)?;
            self.observer
                .on_action_selected(turn, me, direction, seat.logic.last_goal());

            let events = self.apply_move(bot_id, direction)?;
            self.observer.on_move_resolved(turn, bot_id, &events);
        }
        Ok(())
    }

    /// Resolve one move: tackle whoever stands on the target cell, step in,
    /// then teleport, pick up, deposit or press the button as the cell dictates.
    pub fn apply_move(
        &mut self,
        bot_id: ObjectId,
        direction: Direction,
    ) -> Result<Vec<MoveEvent>, MatchError> {
        let Some(from) = self.board.object(bot_id).map(|bot| bot.position) else {
            return Ok(Vec::new());
        };
        let to = from.offset(direction);
        if direction.is_none() || !self.board.contains(&to) {
            return Ok(vec![MoveEvent::Blocked { at: from }]);
        }

        let mut events = Vec::new();

        let victim = self
            .board
            .bots()
            .find(|bot| bot.id != bot_id && bot.position == to)
            .map(|bot| bot.id);
        if let Some(victim) = victim {
            let stolen = self.tackle(bot_id, victim);
            events.push(MoveEvent::Tackled { victim, stolen });
        }

        self.set_position(bot_id, to);
        events.push(MoveEvent::Moved { from, to });

        if let Some(exit) = self.teleport_exit(to) {
            self.set_position(bot_id, exit);
            events.push(MoveEvent::Teleported { from: to, to: exit });
            return Ok(events);
        }

        events.extend(self.pick_up(bot_id, to));
        events.extend(self.deposit(bot_id, to));

        if self.board.red_button().is_some_and(|button| button.position == to) {
            events.push(self.press_button()?);
        }

        Ok(events)
    }

    fn set_position(&mut self, bot_id: ObjectId, pos: Position) {
        if let Some(bot) = self.board.object_mut(bot_id) {
            bot.position = pos;
        }
    }

    /// The victim loses its load and is sent home; the tackler keeps what fits.
    fn tackle(&mut self, tackler: ObjectId, victim: ObjectId) -> i32 {
        let headroom = self
            .board
            .object(tackler)
            .map_or(0, |bot| (bot.capacity() - bot.carried()).max(0));

        let Some(victim_bot) = self.board.object_mut(victim) else {
            return 0;
        };
        let stolen = victim_bot.carried().min(headroom);
        victim_bot.properties.diamonds = Some(0);
        if let Some(base) = victim_bot.base() {
            victim_bot.position = base;
        }

        if let Some(bot) = self.board.object_mut(tackler) {
            bot.properties.diamonds = Some(bot.carried() + stolen);
        }
        debug!("Bot {} tackled bot {} and took {}", tackler, victim, stolen);
        stolen
    }

    /// Teleporters are linked in board order, the last one back to the first.
    fn teleport_exit(&self, entry: Position) -> Option<Position> {
        let teleporters = self.board.teleporters();
        if teleporters.len() < 2 {
            return None;
        }
        let idx = teleporters.iter().position(|t| t.position == entry)?;
        Some(teleporters[(idx + 1) % teleporters.len()].position)
    }

    fn pick_up(&mut self, bot_id: ObjectId, at: Position) -> Option<MoveEvent> {
        let bot = self.board.object(bot_id)?;
        let (carried, capacity) = (bot.carried(), bot.capacity());
        let diamond = self
            .board
            .diamonds()
            .find(|d| d.position == at && d.fits(carried, capacity))?;
        let (diamond_id, points) = (diamond.id, diamond.points());

        self.board.game_objects.retain(|obj| obj.id != diamond_id);
        self.board.object_mut(bot_id)?.properties.diamonds = Some(carried + points);
        Some(MoveEvent::PickedUp {
            diamond: diamond_id,
            points,
        })
    }

    fn deposit(&mut self, bot_id: ObjectId, at: Position) -> Option<MoveEvent> {
        let bot = self.board.object_mut(bot_id)?;
        if bot.base() != Some(at) || bot.carried() == 0 {
            return None;
        }

        let amount = bot.carried();
        let score = bot.score().unwrap_or(0) + amount;
        bot.properties.diamonds = Some(0);
        bot.properties.score = Some(score);
        Some(MoveEvent::Deposited { amount, score })
    }

    fn press_button(&mut self) -> Result<MoveEvent, MatchError> {
        board_gen::spawn_diamonds(&mut self.board, &mut self.rng, self.diamonds_per_spawn)?;
        let moved_to = board_gen::free_cell(&self.board, &mut self.rng)?;
        if let Some(button) = self
            .board
            .game_objects
            .iter_mut()
            .find(|obj| obj.kind == ObjectKind::RedButton)
        {
            button.position = moved_to;
        }

        Ok(MoveEvent::ButtonPressed {
            respawned: self.diamonds_per_spawn,
            button: moved_to,
        })
    }

    fn result(&self, turns: i32) -> MatchResult {
        let mut standings: Vec<Standing> = self
            .seats
            .iter()
            .filter_map(|seat| {
                let bot = self.board.object(seat.bot_id)?;
                Some(Standing {
                    bot_id: bot.id,
                    name: bot.display_name(),
                    logic: seat.logic.name(),
                    score: bot.score().unwrap_or(0),
                })
            })
            .collect();
        standings.sort_by(|a, b| b.score.cmp(&a.score));

        MatchResult {
            seed: self.seed,
            turns,
            standings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::DefaultObserver;
    use crate::planners::{GoalSelector, RandomWalker};
    use crate::state::GameObject;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    fn idle_match(board: Board) -> Match {
        let logics: Vec<Box<dyn BotLogic>> = board
            .bots()
            .map(|_| Box::new(RandomWalker::new(0)) as Box<dyn BotLogic>)
            .collect();
        Match::from_board(9, board, logics, Box::new(DefaultObserver))
    }

    #[test]
    fn test_move_off_board_is_blocked() {
        let board = Board::new(5, 5).with(GameObject::bot(1, pos(0, 0), pos(0, 0)));
        let mut game = idle_match(board);

        let events = game.apply_move(1, Direction::WEST).unwrap();
        assert_eq!(events, vec![MoveEvent::Blocked { at: pos(0, 0) }]);
        assert_eq!(game.board().object(1).map(|b| b.position), Some(pos(0, 0)));
    }

    #[test]
    fn test_pick_up_then_deposit() {
        let board = Board::new(5, 5)
            .with(GameObject::bot(1, pos(1, 0), pos(0, 0)).with_score(0))
            .with(GameObject::diamond(2, pos(2, 0), 2));
        let mut game = idle_match(board);

        let events = game.apply_move(1, Direction::EAST).unwrap();
        assert!(events.contains(&MoveEvent::PickedUp { diamond: 2, points: 2 }));
        assert_eq!(game.board().diamond_count(), 0);

        game.apply_move(1, Direction::WEST).unwrap();
        let events = game.apply_move(1, Direction::WEST).unwrap();
        assert!(events.contains(&MoveEvent::Deposited { amount: 2, score: 2 }));
        let bot = game.board().object(1).unwrap();
        assert_eq!((bot.carried(), bot.score()), (0, Some(2)));
    }

    #[test]
    fn test_diamond_that_does_not_fit_stays() {
        let board = Board::new(5, 5)
            .with(GameObject::bot(1, pos(1, 1), pos(0, 0)).with_diamonds(4))
            .with(GameObject::diamond(2, pos(2, 1), 2));
        let mut game = idle_match(board);

        let events = game.apply_move(1, Direction::EAST).unwrap();
        assert_eq!(events, vec![MoveEvent::Moved { from: pos(1, 1), to: pos(2, 1) }]);
        assert_eq!(game.board().diamond_count(), 1);
    }

    #[test]
    fn test_tackle_steals_up_to_headroom_and_sends_victim_home() {
        let board = Board::new(10, 10)
            .with(GameObject::bot(1, pos(3, 3), pos(0, 0)).with_diamonds(3))
            .with(GameObject::bot(2, pos(4, 3), pos(9, 9)).with_diamonds(4));
        let mut game = idle_match(board);

        let events = game.apply_move(1, Direction::EAST).unwrap();
        assert_eq!(events[0], MoveEvent::Tackled { victim: 2, stolen: 2 });

        let tackler = game.board().object(1).unwrap();
        assert_eq!((tackler.position, tackler.carried()), (pos(4, 3), 5));
        let victim = game.board().object(2).unwrap();
        assert_eq!((victim.position, victim.carried()), (pos(9, 9), 0));
    }

    #[test]
    fn test_teleporter_jumps_to_partner() {
        let board = Board::new(10, 10)
            .with(GameObject::bot(1, pos(0, 0), pos(0, 0)))
            .with(GameObject::teleporter(2, pos(1, 0)))
            .with(GameObject::teleporter(3, pos(8, 8)));
        let mut game = idle_match(board);

        let events = game.apply_move(1, Direction::EAST).unwrap();
        assert_eq!(
            events.last(),
            Some(&MoveEvent::Teleported { from: pos(1, 0), to: pos(8, 8) })
        );
        assert_eq!(game.board().object(1).map(|b| b.position), Some(pos(8, 8)));
    }

    #[test]
    fn test_button_respawns_and_moves() {
        let board = Board::new(6, 6)
            .with(GameObject::bot(1, pos(0, 0), pos(0, 0)))
            .with(GameObject::red_button(2, pos(1, 0)))
            .with(GameObject::diamond(3, pos(5, 5), 1))
            .with(GameObject::diamond(4, pos(4, 5), 1));
        let mut game = idle_match(board);

        let events = game.apply_move(1, Direction::EAST).unwrap();
        assert!(matches!(
            events.last(),
            Some(MoveEvent::ButtonPressed { respawned: 2, .. })
        ));
        assert_eq!(game.board().diamond_count(), 2);
        assert_ne!(game.board().red_button().map(|b| b.position), Some(pos(1, 0)));
    }

    #[test]
    fn test_match_runs_until_time_is_up() {
        let config = SimConfig {
            turns: 12,
            ..SimConfig::default()
        };
        let logics: Vec<Box<dyn BotLogic>> = vec![
            Box::new(GoalSelector::new()),
            Box::new(RandomWalker::new(1)),
        ];
        let mut game = Match::new(&config, 4, logics, Box::new(DefaultObserver)).unwrap();

        let result = game.run().unwrap();
        assert_eq!(result.turns, 12);
        assert_eq!(result.standings.len(), 2);
        assert_eq!(game.board().time_left(), 0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let config = SimConfig::default();
        let play = || {
            let logics: Vec<Box<dyn BotLogic>> = vec![
                Box::new(GoalSelector::new()),
                Box::new(GoalSelector::new()),
                Box::new(RandomWalker::new(17)),
            ];
            Match::new(&config, 17, logics, Box::new(DefaultObserver))
                .and_then(|mut game| game.run())
                .unwrap()
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_lone_cascade_bot_scores() {
        let config = SimConfig {
            teleporters: 0,
            ..SimConfig::default()
        };
        let logics: Vec<Box<dyn BotLogic>> = vec![Box::new(GoalSelector::new())];
        let mut game = Match::new(&config, 2, logics, Box::new(DefaultObserver)).unwrap();

        let result = game.run().unwrap();
        assert!(result.standings[0].score > 0, "{:?}", result);
        assert_eq!(result.winner().map(|s| s.logic), Some("cascade"));
    }

    #[test]
    fn test_winner_requires_strict_lead() {
        let standing = |bot_id, score| Standing {
            bot_id,
            name: format!("bot-{}", bot_id),
            logic: "cascade",
            score,
        };
        let tied = MatchResult {
            seed: 1,
            turns: 10,
            standings: vec![standing(1, 4), standing(2, 4)],
        };
        assert!(tied.winner().is_none());

        let clear = MatchResult {
            seed: 1,
            turns: 10,
            standings: vec![standing(1, 5), standing(2, 4)],
        };
        assert_eq!(clear.winner().map(|s| s.bot_id), Some(1));
    }
}
