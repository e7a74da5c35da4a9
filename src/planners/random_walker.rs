use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::infra::{DecisionError, Direction};
use crate::planners::BotLogic;
use crate::state::{Board, GameObject};

/// Sparring opponent that wanders in random legal directions.
#[derive(Debug)]
pub struct RandomWalker {
    rng: StdRng,
}

impl RandomWalker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BotLogic for RandomWalker {
    fn name(&self) -> &'static str {
        "random"
    }

    fn next_move(&mut self, me: &GameObject, board: &Board) -> Result<Direction, DecisionError> {
        let legal: Vec<Direction> = Direction::CARDINALS
            .into_iter()
            .filter(|dir| board.contains(&me.position.offset(*dir)))
            .collect();

        if legal.is_empty() {
            return Ok(Direction::NONE);
        }
        Ok(legal[self.rng.random_range(0..legal.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Position;

    #[test]
    fn test_random_walker_stays_on_board() {
        let me = GameObject::bot(1, Position::new(0, 0), Position::new(0, 0));
        let board = Board::new(5, 5).with(me.clone());
        let mut walker = RandomWalker::new(7);

        for _ in 0..50 {
            let dir = walker.next_move(&me, &board).unwrap();
            assert!(board.contains(&me.position.offset(dir)), "{:?} leaves the board", dir);
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let me = GameObject::bot(1, Position::new(2, 2), Position::new(0, 0));
        let board = Board::new(5, 5).with(me.clone());
        let mut a = RandomWalker::new(42);
        let mut b = RandomWalker::new(42);

        for _ in 0..20 {
            assert_eq!(a.next_move(&me, &board).unwrap(), b.next_move(&me, &board).unwrap());
        }
    }
}
