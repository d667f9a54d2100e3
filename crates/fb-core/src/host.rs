//! The boundary between plugin logic and the host document.
//!
//! Everything the text reconciler needs from the host goes through these two
//! traits. Reads are synchronous; font loading is the only asynchronous call,
//! and the host rejects any write that would render with a font that has not
//! been loaded yet.

use crate::id::NodeId;
use crate::model::{FontName, FontRef};
use std::future::Future;
use thiserror::Error;

/// Errors raised by the host document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    #[error("Node not found with ID: {0}")]
    NodeNotFound(NodeId),

    #[error("Node is not a text node: {0}")]
    NotATextNode(NodeId),

    #[error("Node does not support children: {0}")]
    CannotHaveChildren(NodeId),

    #[error("Node cannot be removed: {0}")]
    CannotRemove(NodeId),

    #[error("All nodes must have the same parent to be grouped")]
    MixedParents,

    #[error("Cannot write text with unloaded font \"{0}\"")]
    FontNotLoaded(FontRef),

    #[error("Font \"{0}\" is not available")]
    FontUnavailable(FontRef),

    #[error("Range {start}..{end} is out of bounds for text of length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}

/// Asynchronous font loading.
pub trait FontLoader {
    /// Make `font` available for writing. Completes once the host has the
    /// font ready, or fails if it cannot be provided.
    fn load_font(&self, font: &FontRef) -> impl Future<Output = Result<(), HostError>>;
}

/// Read and write access to text nodes.
///
/// Range indices count characters and are half-open (`[start, end)`).
pub trait TextHost: FontLoader {
    fn characters(&self, node: NodeId) -> Result<String, HostError>;

    /// Overwrite the node's characters. Every font the node currently uses
    /// must be loaded.
    fn set_characters(&mut self, node: NodeId, text: &str) -> Result<(), HostError>;

    fn font_name(&self, node: NodeId) -> Result<FontName, HostError>;

    /// Apply `font` to the whole node. The font must be loaded.
    fn set_font_name(&mut self, node: NodeId, font: &FontRef) -> Result<(), HostError>;

    fn range_font(&self, node: NodeId, start: usize, end: usize) -> Result<FontName, HostError>;

    /// Apply `font` to `[start, end)`. The font must be loaded.
    fn set_range_font(
        &mut self,
        node: NodeId,
        start: usize,
        end: usize,
        font: &FontRef,
    ) -> Result<(), HostError>;
}
