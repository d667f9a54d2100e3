//! Read-only font queries against a text node.

use crate::error::ReconcileError;
use crate::scanner::CharRange;
use fb_core::{FontName, FontRef, NodeId, TextHost};

/// Font attributed to `range`, or `Mixed` if it spans several fonts.
pub fn font_of<H: TextHost + ?Sized>(
    host: &H,
    node: NodeId,
    range: CharRange,
) -> Result<FontName, ReconcileError> {
    host.range_font(node, range.start, range.end)
        .map_err(ReconcileError::NodeRead)
}

/// Font of the single character at `index`.
pub fn char_font<H: TextHost + ?Sized>(
    host: &H,
    node: NodeId,
    index: usize,
) -> Result<FontName, ReconcileError> {
    font_of(host, node, CharRange::new(index, index + 1))
}

/// First single-font character in `range`, scanning left to right.
pub fn first_font<H: TextHost + ?Sized>(
    host: &H,
    node: NodeId,
    range: CharRange,
) -> Result<Option<FontRef>, ReconcileError> {
    for index in range.start..range.end {
        if let FontName::Uniform(font) = char_font(host, node, index)? {
            return Ok(Some(font));
        }
    }
    Ok(None)
}
