use super::AttributionStrategy;
use crate::error::ReconcileError;
use crate::inspector::{first_font, font_of};
use crate::plan::{AnchoredFont, FontPlan};
use crate::scanner::{delimiter_ranges, scan};
use fb_core::{FontName, NodeId, TextHost};

/// Anchor fonts to line and word structure instead of raw positions.
///
/// Each line with a single font becomes one `'\n'` segment; a mixed line is
/// split into `' '` segments. On replay, each segment claims the new text
/// up to the next occurrence of its delimiter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Smart;

impl AttributionStrategy for Smart {
    fn plan<H: TextHost + ?Sized>(
        &self,
        host: &H,
        node: NodeId,
        old: &[char],
    ) -> Result<FontPlan, ReconcileError> {
        let mut segments: Vec<(usize, AnchoredFont)> = Vec::new();
        for line in scan(old, '\n') {
            match font_of(host, node, line)? {
                FontName::Uniform(font) => segments.push((
                    line.start,
                    AnchoredFont {
                        delimiter: '\n',
                        font,
                    },
                )),
                FontName::Mixed => {
                    for word in delimiter_ranges(old, ' ', line.start, line.end) {
                        let font = match font_of(host, node, word)? {
                            FontName::Uniform(font) => font,
                            // A word with several fonts keeps its first one.
                            FontName::Mixed => match first_font(host, node, word)? {
                                Some(font) => font,
                                None => continue,
                            },
                        };
                        segments.push((
                            word.start,
                            AnchoredFont {
                                delimiter: ' ',
                                font,
                            },
                        ));
                    }
                }
            }
        }
        segments.sort_by_key(|(start, _)| *start);
        log::debug!("smart plan: {} anchored segment(s)", segments.len());
        Ok(FontPlan::Anchored(
            segments.into_iter().map(|(_, anchor)| anchor).collect(),
        ))
    }
}
