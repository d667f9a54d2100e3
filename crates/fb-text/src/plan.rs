//! Font attribution plans.
//!
//! A plan is built from the node's current (old) text and replayed once
//! onto the new text, after the characters have been overwritten.

use crate::scanner::CharRange;
use fb_core::{FontRef, HostError, NodeId, TextHost};

/// A font anchored to the delimiter that ended its segment in the old text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredFont {
    pub delimiter: char,
    pub font: FontRef,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontPlan {
    /// One font for the whole new text.
    Uniform(FontRef),
    /// Old font runs, replayed at the same character positions.
    Positional(Vec<(CharRange, FontRef)>),
    /// Old segments in order, replayed by delimiter search.
    Anchored(Vec<AnchoredFont>),
}

impl FontPlan {
    /// Fonts the replay will write with, in plan order (may repeat).
    pub fn fonts(&self) -> Vec<&FontRef> {
        match self {
            FontPlan::Uniform(font) => vec![font],
            FontPlan::Positional(runs) => runs.iter().map(|(_, font)| font).collect(),
            FontPlan::Anchored(anchors) => anchors.iter().map(|a| &a.font).collect(),
        }
    }

    /// Font the characters are written with before any range replay.
    pub fn base_font<'a>(&'a self, fallback: &'a FontRef) -> &'a FontRef {
        match self {
            FontPlan::Uniform(font) => font,
            FontPlan::Positional(_) | FontPlan::Anchored(_) => fallback,
        }
    }

    /// Apply range fonts onto `text`, which the node now holds.
    pub fn replay<H: TextHost + ?Sized>(
        &self,
        host: &mut H,
        node: NodeId,
        text: &str,
    ) -> Result<(), HostError> {
        match self {
            FontPlan::Uniform(_) => Ok(()),
            FontPlan::Positional(runs) => {
                let len = text.chars().count();
                for (range, font) in runs {
                    // Runs past the end of a shorter text are clamped or dropped.
                    let Some(range) = range.clamp(len) else {
                        continue;
                    };
                    host.set_range_font(node, range.start, range.end, font)?;
                }
                Ok(())
            }
            FontPlan::Anchored(anchors) => {
                let chars: Vec<char> = text.chars().collect();
                let mut cursor = 0;
                for anchor in anchors {
                    if cursor >= chars.len() {
                        break;
                    }
                    let end = chars[cursor..]
                        .iter()
                        .position(|&c| c == anchor.delimiter)
                        .map_or(chars.len(), |offset| cursor + offset);
                    if end > cursor {
                        host.set_range_font(node, cursor, end, &anchor.font)?;
                    }
                    cursor = end + 1;
                }
                Ok(())
            }
        }
    }
}
