use thiserror::Error;

use crate::state::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// Every return-to-base rule needs a home cell; a bot without one is misconfigured.
    #[error("bot {bot_id} has no base configured")]
    MissingBase { bot_id: ObjectId },
}
