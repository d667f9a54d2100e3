use fb_core::{FontRef, HostError, NodeId};
use thiserror::Error;

/// A font the gate could not load. Recovered by the reconciler, which
/// falls back to the configured fallback font.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to load font \"{font}\"")]
pub struct FontLoadFailure {
    pub font: FontRef,
    #[source]
    pub source: HostError,
}

/// Failures that abort a text update.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReconcileError {
    /// The node could not be read while building the attribution plan.
    #[error("failed to read text node: {0}")]
    NodeRead(#[source] HostError),

    /// No character of the node reported a single font.
    #[error("text node {0} has no attributable font")]
    Unattributed(NodeId),

    /// The host rejected a character or font write.
    #[error("failed to set characters: {0}")]
    CharacterWrite(#[source] HostError),

    /// Even the fallback font could not be loaded, so nothing was written.
    #[error("fallback font \"{font}\" could not be loaded")]
    FallbackUnavailable {
        font: FontRef,
        #[source]
        source: HostError,
    },
}
