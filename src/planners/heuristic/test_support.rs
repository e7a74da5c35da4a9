use crate::infra::Position;
use crate::planners::heuristic::{DecisionContext, Tuning};
use crate::state::{Board, GameObject, ObjectId};

pub const ME: ObjectId = 1;

pub fn bot(id: ObjectId, pos: (i32, i32), base: (i32, i32), carried: i32) -> GameObject {
    GameObject::bot(id, Position::new(pos.0, pos.1), Position::new(base.0, base.1))
        .with_diamonds(carried)
}

pub fn red(id: ObjectId, pos: (i32, i32)) -> GameObject {
    GameObject::diamond(id, Position::new(pos.0, pos.1), 2)
}

pub fn blue(id: ObjectId, pos: (i32, i32)) -> GameObject {
    GameObject::diamond(id, Position::new(pos.0, pos.1), 1)
}

pub fn teleporter(id: ObjectId, pos: (i32, i32)) -> GameObject {
    GameObject::teleporter(id, Position::new(pos.0, pos.1))
}

pub fn button(id: ObjectId, pos: (i32, i32)) -> GameObject {
    GameObject::red_button(id, Position::new(pos.0, pos.1))
}

pub fn pos(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// 15x15 board holding `me` followed by `others`.
pub fn board_with(me: &GameObject, others: Vec<GameObject>) -> Board {
    let mut board = Board::new(15, 15).with(me.clone());
    for object in others {
        board.push(object);
    }
    board
}

pub fn with_context<R>(
    me: &GameObject,
    board: &Board,
    f: impl FnOnce(&DecisionContext) -> R,
) -> R {
    let tuning = Tuning::default();
    let ctx = DecisionContext::new(me, board, &tuning).expect("test bot has a base");
    f(&ctx)
}
