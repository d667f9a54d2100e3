use fb_core::{HostError, NodeId};
use fb_text::ReconcileError;
use thiserror::Error;

/// A command that could not be carried out. The message is shown to the
/// user as the `error` of a `command-error` reply.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A required parameter (or parameter pair) was absent.
    #[error("Missing {0}")]
    Missing(&'static str),

    /// Parameters were present but did not have the expected shape.
    #[error("Invalid parameters for {command}: {source}")]
    InvalidParams {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("At least two node IDs are required to create a group")]
    TooFewNodes,

    #[error("At least two node IDs are required for a boolean operation")]
    TooFewOperands,

    #[error("Unknown boolean operation: {0}")]
    UnknownBooleanOperation(String),

    #[error("Unknown effect type: {0}")]
    UnknownEffect(String),

    /// A parameter the chosen effect type needs was absent.
    #[error("{param} is required for {effect}")]
    EffectParam {
        param: &'static str,
        effect: String,
    },

    #[error("Node type {0} does not support effects")]
    NoEffects(&'static str),

    #[error("Node does not support {operation}: {node}")]
    Unsupported {
        operation: &'static str,
        node: NodeId,
    },

    #[error(transparent)]
    Host(#[from] HostError),

    #[error("Error setting text content: {0}")]
    Text(#[from] ReconcileError),
}
