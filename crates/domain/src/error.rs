//! Common error types used across the workspace.

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A room record has an empty `room` identifier.
    #[error("room name must not be empty")]
    EmptyRoomName,

    /// The same room identifier appears twice in one collection.
    #[error("duplicate room {0:?} in collection")]
    DuplicateRoom(String),

    /// A mode string outside `home` / `away` / `sleep`.
    #[error("unknown mode {0:?}")]
    UnknownMode(String),
}
