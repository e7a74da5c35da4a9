use rand::Rng;
use rand::rngs::StdRng;

use crate::infra::Position;
use crate::sim::{MatchError, SimConfig};
use crate::state::{Board, GameObject, ObjectKind};

/// Roughly one diamond in this many is red.
const RED_DIAMOND_ODDS: u32 = 4;

/// Lay out a fresh board: one base and bot per name, then teleporters,
/// the red button and the first batch of diamonds.
pub fn generate(config: &SimConfig, rng: &mut StdRng, names: &[String]) -> Result<Board, MatchError> {
    config.validate()?;
    let mut board = Board::new(config.board_size, config.board_size).with_time_left(config.turns);

    for name in names {
        let base = free_cell(&board, rng)?;
        let base_id = board.next_object_id();
        board.push(GameObject::new(base_id, ObjectKind::Base, base));
        let bot_id = board.next_object_id();
        board.push(
            GameObject::bot(bot_id, base, base)
                .with_capacity(config.capacity)
                .with_score(0)
                .with_name(name.clone()),
        );
    }

    for _ in 0..config.teleporters {
        let pos = free_cell(&board, rng)?;
        let id = board.next_object_id();
        board.push(GameObject::teleporter(id, pos));
    }

    let pos = free_cell(&board, rng)?;
    let id = board.next_object_id();
    board.push(GameObject::red_button(id, pos));

    spawn_diamonds(&mut board, rng, config.diamonds)?;
    Ok(board)
}

/// Replace every diamond on the board with `count` new ones.
pub fn spawn_diamonds(board: &mut Board, rng: &mut StdRng, count: usize) -> Result<(), MatchError> {
    // Respawned diamonds never reuse an id
    let mut next_id = board.next_object_id();
    board.game_objects.retain(|obj| !obj.is_diamond());
    for _ in 0..count {
        let pos = free_cell(board, rng)?;
        let points = if rng.random_ratio(1, RED_DIAMOND_ODDS) { 2 } else { 1 };
        board.push(GameObject::diamond(next_id, pos, points));
        next_id += 1;
    }
    Ok(())
}

/// Random empty cell; falls back to a row scan once random probing gives up.
pub fn free_cell(board: &Board, rng: &mut StdRng) -> Result<Position, MatchError> {
    if board.width <= 0 || board.height <= 0 {
        return Err(MatchError::BoardFull { size: board.width });
    }

    let attempts = i64::from(board.width) * i64::from(board.height) * 4;
    for _ in 0..attempts {
        let pos = Position::new(rng.random_range(0..board.width), rng.random_range(0..board.height));
        if !board.is_occupied(pos) {
            return Ok(pos);
        }
    }

    (0..board.height)
        .flat_map(|y| (0..board.width).map(move |x| Position::new(x, y)))
        .find(|pos| !board.is_occupied(*pos))
        .ok_or(MatchError::BoardFull { size: board.width })
}
