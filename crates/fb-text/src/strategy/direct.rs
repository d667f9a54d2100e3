use super::AttributionStrategy;
use crate::error::ReconcileError;
use crate::inspector::first_font;
use crate::plan::FontPlan;
use crate::scanner::CharRange;
use fb_core::{FontName, NodeId, TextHost};

/// Keep the node's font, or the first character's font if the node is
/// mixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Direct;

impl AttributionStrategy for Direct {
    fn plan<H: TextHost + ?Sized>(
        &self,
        host: &H,
        node: NodeId,
        old: &[char],
    ) -> Result<FontPlan, ReconcileError> {
        match host.font_name(node).map_err(ReconcileError::NodeRead)? {
            FontName::Uniform(font) => Ok(FontPlan::Uniform(font)),
            FontName::Mixed => first_font(host, node, CharRange::new(0, old.len()))?
                .map(FontPlan::Uniform)
                .ok_or(ReconcileError::Unattributed(node)),
        }
    }
}
