use super::AttributionStrategy;
use crate::error::ReconcileError;
use crate::inspector::char_font;
use crate::plan::FontPlan;
use crate::scanner::CharRange;
use fb_core::{FontName, FontRef, NodeId, TextHost};

/// Record the old text's maximal single-font runs and replay them at the
/// same character positions.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl AttributionStrategy for Strict {
    fn plan<H: TextHost + ?Sized>(
        &self,
        host: &H,
        node: NodeId,
        old: &[char],
    ) -> Result<FontPlan, ReconcileError> {
        let mut runs: Vec<(CharRange, FontRef)> = Vec::new();
        for index in 0..old.len() {
            let FontName::Uniform(font) = char_font(host, node, index)? else {
                continue;
            };
            if let Some((range, last)) = runs.last_mut()
                && range.end == index
                && *last == font
            {
                range.end = index + 1;
                continue;
            }
            runs.push((CharRange::new(index, index + 1), font));
        }
        log::debug!("strict plan: {} run(s) over {} characters", runs.len(), old.len());
        Ok(FontPlan::Positional(runs))
    }
}
