use ff_core::{CoreError, QuestId};

use crate::ports::Target;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors raised by the game layer.
///
/// Player-facing no-ops (no mail, nothing to do with a tapped object, a full
/// inventory) are not errors; they are answered with a line or ignored.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A core invariant was violated.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A quest was about to start while another one is still active.
    #[error("cannot start {requested}: {active} is still active")]
    QuestAlreadyActive {
        /// The quest that was about to start.
        requested: QuestId,
        /// The quest already in progress.
        active: QuestId,
    },

    /// A name did not resolve to anything in the current area.
    #[error("nothing called \"{0}\" here")]
    UnknownTarget(String),

    /// The target is not part of the current area.
    #[error("{0} is not here")]
    TargetNotHere(Target),
}
