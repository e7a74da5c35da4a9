use serde::{Deserialize, Serialize};

use crate::infra::Position;
use crate::state::game_object::{GameObject, ObjectId, ObjectKind};

/// Remaining turns assumed when the engine does not report a clock.
pub const DEFAULT_TIME_LEFT: i32 = 999;

/// Per-turn snapshot of everything on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub game_objects: Vec<GameObject>,
    #[serde(
        default,
        rename = "time_left",
        alias = "timeLeft",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_left: Option<i32>,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            game_objects: Vec::new(),
            time_left: None,
        }
    }

    pub fn with_time_left(mut self, time_left: i32) -> Self {
        self.time_left = Some(time_left);
        self
    }

    pub fn with(mut self, object: GameObject) -> Self {
        self.game_objects.push(object);
        self
    }

    pub fn push(&mut self, object: GameObject) {
        self.game_objects.push(object);
    }

    pub fn time_left(&self) -> i32 {
        self.time_left.unwrap_or(DEFAULT_TIME_LEFT)
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    fn of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = &GameObject> {
        self.game_objects.iter().filter(move |obj| obj.kind == kind)
    }

    pub fn diamonds(&self) -> impl Iterator<Item = &GameObject> {
        self.of_kind(ObjectKind::Diamond)
    }

    pub fn diamond_count(&self) -> usize {
        self.diamonds().count()
    }

    /// All bots, including the one asking.
    pub fn bots(&self) -> impl Iterator<Item = &GameObject> {
        self.of_kind(ObjectKind::Bot)
    }

    pub fn teleporters(&self) -> Vec<&GameObject> {
        self.of_kind(ObjectKind::Teleporter).collect()
    }

    pub fn red_button(&self) -> Option<&GameObject> {
        self.of_kind(ObjectKind::RedButton).next()
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.game_objects.iter().find(|obj| obj.id == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.game_objects.iter_mut().find(|obj| obj.id == id)
    }

    pub fn objects_at(&self, pos: Position) -> impl Iterator<Item = &GameObject> {
        self.game_objects.iter().filter(move |obj| obj.position == pos)
    }

    pub fn next_object_id(&self) -> ObjectId {
        self.game_objects
            .iter()
            .map(|obj| obj.id)
            .max()
            .map_or(1, |id| id + 1)
    }

    pub fn is_occupied(&self, pos: Position) -> bool {
        self.objects_at(pos).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        Board::new(10, 10)
            .with(GameObject::bot(1, Position::new(0, 0), Position::new(0, 0)))
            .with(GameObject::diamond(2, Position::new(3, 3), 1))
            .with(GameObject::teleporter(3, Position::new(5, 5)))
            .with(GameObject::diamond(4, Position::new(4, 4), 2))
            .with(GameObject::teleporter(5, Position::new(9, 9)))
            .with(GameObject::red_button(6, Position::new(7, 1)))
    }

    #[test]
    fn test_time_left_defaults() {
        let board = sample_board();
        assert_eq!(board.time_left(), DEFAULT_TIME_LEFT);
        assert_eq!(board.with_time_left(12).time_left(), 12);
    }

    #[test]
    fn test_derived_subsets() {
        let board = sample_board();
        assert_eq!(board.diamond_count(), 2);
        assert_eq!(board.bots().count(), 1);
        let teleporters: Vec<ObjectId> = board.teleporters().iter().map(|t| t.id).collect();
        assert_eq!(teleporters, vec![3, 5], "teleporters keep board order");
        assert_eq!(board.red_button().map(|b| b.id), Some(6));
    }

    #[test]
    fn test_lookup_and_bounds() {
        let board = sample_board();
        assert_eq!(board.object(4).map(|d| d.points()), Some(2));
        assert!(board.object(42).is_none());
        assert!(board.contains(&Position::new(9, 0)));
        assert!(!board.contains(&Position::new(10, 0)));
        assert!(board.is_occupied(Position::new(7, 1)));
        assert_eq!(board.next_object_id(), 7);
    }

    #[test]
    fn test_deserialize_board_json() {
        let json = r#"{
            "width": 15,
            "height": 15,
            "time_left": 40,
            "gameObjects": [
                {"id": 1, "position": {"x": 1, "y": 1}, "type": "DiamondGameObject", "properties": {"points": 2}},
                {"id": 2, "position": {"x": 2, "y": 2}, "type": "DiamondButtonGameObject", "properties": {}}
            ]
        }"#;
        let board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.time_left(), 40);
        assert_eq!(board.diamond_count(), 1);
        assert!(board.red_button().is_some());
    }
}
