use thiserror::Error;

use crate::infra::DecisionError;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Decision(#[from] DecisionError),
    #[error("{key} must be between {min} and {max}, got {value}")]
    InvalidConfig {
        key: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    #[error("no free cell left on a {size}x{size} board")]
    BoardFull { size: i32 },
    #[error("replay file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("replay encoding error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("match task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
