use serde::{Deserialize, Serialize};

use crate::infra::Position;

pub type ObjectId = u32;

/// Carrying capacity assumed when a bot does not report one.
pub const DEFAULT_CAPACITY: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "BotGameObject")]
    Bot,
    #[serde(rename = "DiamondGameObject")]
    Diamond,
    #[serde(rename = "TeleportGameObject")]
    Teleporter,
    #[serde(rename = "DiamondButtonGameObject")]
    RedButton,
    #[serde(rename = "BaseGameObject")]
    Base,
    #[serde(other)]
    Other,
}

/// Type-dependent property bag. Only the fields relevant to an object's kind are populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diamonds: Option<i32>,
    #[serde(
        default,
        alias = "inventorySize",
        alias = "diamondsCarriedMax",
        skip_serializing_if = "Option::is_none"
    )]
    pub diamonds_carried_max: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    pub id: ObjectId,
    pub position: Position,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    #[serde(default)]
    pub properties: Properties,
}

impl GameObject {
    pub fn new(id: ObjectId, kind: ObjectKind, position: Position) -> Self {
        Self {
            id,
            position,
            kind,
            properties: Properties::default(),
        }
    }

    pub fn bot(id: ObjectId, position: Position, base: Position) -> Self {
        let mut bot = Self::new(id, ObjectKind::Bot, position);
        bot.properties.base = Some(base);
        bot.properties.diamonds = Some(0);
        bot
    }

    pub fn diamond(id: ObjectId, position: Position, points: i32) -> Self {
        let mut diamond = Self::new(id, ObjectKind::Diamond, position);
        diamond.properties.points = Some(points);
        diamond
    }

    pub fn teleporter(id: ObjectId, position: Position) -> Self {
        Self::new(id, ObjectKind::Teleporter, position)
    }

    pub fn red_button(id: ObjectId, position: Position) -> Self {
        Self::new(id, ObjectKind::RedButton, position)
    }

    pub fn with_diamonds(mut self, diamonds: i32) -> Self {
        self.properties.diamonds = Some(diamonds);
        self
    }

    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.properties.diamonds_carried_max = Some(capacity);
        self
    }

    pub fn with_score(mut self, score: i32) -> Self {
        self.properties.score = Some(score);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.properties.name = Some(name.into());
        self
    }

    pub fn is_bot(&self) -> bool {
        self.kind == ObjectKind::Bot
    }

    pub fn is_diamond(&self) -> bool {
        self.kind == ObjectKind::Diamond
    }

    /// Diamonds currently carried (bots only, 0 when absent).
    pub fn carried(&self) -> i32 {
        self.properties.diamonds.unwrap_or(0)
    }

    pub fn capacity(&self) -> i32 {
        self.properties.diamonds_carried_max.unwrap_or(DEFAULT_CAPACITY)
    }

    pub fn base(&self) -> Option<Position> {
        self.properties.base
    }

    /// `None` means the engine does not track scores for this bot.
    pub fn score(&self) -> Option<i32> {
        self.properties.score
    }

    /// Diamond value: 1 for blue, 2 for red.
    pub fn points(&self) -> i32 {
        self.properties.points.unwrap_or(1)
    }

    /// Whether a bot carrying `carried` out of `capacity` can pick this diamond up.
    pub fn fits(&self, carried: i32, capacity: i32) -> bool {
        carried + self.points() <= capacity
    }

    pub fn display_name(&self) -> String {
        self.properties
            .name
            .clone()
            .unwrap_or_else(|| format!("bot#{}", self.id))
    }
}
