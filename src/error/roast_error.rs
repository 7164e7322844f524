use thiserror::Error;

/// Failures of a [`Roaster`](crate::roast::Roaster).
///
/// These never escape the engine: they are logged and replaced with a fixed
/// fallback message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoastError {
    /// The roaster cannot run at all, e.g. because credentials are missing.
    #[error("Roaster unavailable: {reason}")]
    Unavailable {
        /// Why the roaster is unavailable.
        reason: String,
    },
    /// The roaster ran but failed to produce text.
    #[error("Roaster failed: {details}")]
    Failed {
        /// What went wrong.
        details: String,
    },
}
