use super::{AttributionStrategy, Direct};
use crate::error::ReconcileError;
use crate::inspector::char_font;
use crate::plan::FontPlan;
use fb_core::{FontName, FontRef, NodeId, TextHost};
use std::collections::HashMap;

/// The most frequent font across the old text wins outright; every other
/// font is discarded.
///
/// The tally walks the character boundaries `1..len` and reads the character
/// before each one, so the final character never counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prevailing;

impl AttributionStrategy for Prevailing {
    fn plan<H: TextHost + ?Sized>(
        &self,
        host: &H,
        node: NodeId,
        old: &[char],
    ) -> Result<FontPlan, ReconcileError> {
        // Tally in first-seen order so ties go to the earliest font.
        let mut tally: Vec<(FontRef, usize)> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();
        for boundary in 1..old.len() {
            let FontName::Uniform(font) = char_font(host, node, boundary - 1)? else {
                continue;
            };
            match slots.get(&font.key()) {
                Some(&slot) => tally[slot].1 += 1,
                None => {
                    slots.insert(font.key(), tally.len());
                    tally.push((font, 1));
                }
            }
        }

        let mut winner: Option<(FontRef, usize)> = None;
        for (font, count) in tally {
            if winner.as_ref().is_none_or(|(_, best)| count > *best) {
                winner = Some((font, count));
            }
        }

        match winner {
            Some((font, count)) => {
                log::debug!("prevailing font {font} covers {count} of {} characters", old.len());
                Ok(FontPlan::Uniform(font))
            }
            None => Direct.plan(host, node, old),
        }
    }
}
