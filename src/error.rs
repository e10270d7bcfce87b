//! Error type shared by the controller and its collaborators.

/// Failures surfaced by storage and DOM collaborators.
///
/// The controller's public operations log these and carry on; only
/// [`ThemeController::try_register_toggle`](crate::ThemeController::try_register_toggle)
/// and the collaborator traits hand them back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The toggle control is not in the document.
    #[error("theme toggle button not found: #{id}")]
    MissingToggle { id: String },

    /// The indicator icon is not in the document.
    #[error("theme icon not found: #{id}")]
    MissingIcon { id: String },

    /// Storage is unavailable or rejected a read/write.
    #[error("storage error: {0}")]
    Storage(String),

    /// A DOM mutation or listener attachment was rejected.
    #[error("dom error: {0}")]
    Dom(String),

    /// Configuration JSON could not be parsed.
    #[error("config parse failed: {0}")]
    Config(#[from] serde_json::Error),
}
