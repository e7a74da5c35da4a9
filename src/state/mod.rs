mod board;
mod game_object;

pub use board::{Board, DEFAULT_TIME_LEFT};
pub use game_object::{DEFAULT_CAPACITY, GameObject, ObjectId, ObjectKind, Properties};
