use crate::quest::{QuestId, QuestState};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised when parsing identifiers or mutating the game state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The string does not name a known area.
    #[error("unknown area: \"{0}\"")]
    UnknownArea(String),

    /// The string does not name a known quest.
    #[error("unknown quest: \"{0}\"")]
    UnknownQuest(String),

    /// The string does not name a known item kind.
    #[error("unknown item: \"{0}\"")]
    UnknownItem(String),

    /// The string does not name a known direction.
    #[error("unknown direction: \"{0}\"")]
    UnknownDirection(String),

    /// A quest was asked to move backwards or skip a state.
    #[error("invalid transition for quest {quest}: {from} -> {to}")]
    InvalidTransition {
        /// The quest being transitioned.
        quest: QuestId,
        /// The state the quest is in.
        from: QuestState,
        /// The requested state.
        to: QuestState,
    },
}

/// Alias for `Result<T, StoreError>`.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a key-value backend or while encoding the record.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend failed to read or write.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be encoded or decoded.
    #[error("save record is malformed: {0}")]
    Serialize(#[from] serde_json::Error),
}
