//! Font attribution strategies and their selection.
//!
//! A node with a single font always takes the direct path. A node with
//! mixed fonts uses the strategy the caller asked for, or the font of its
//! first character when none was requested.

mod direct;
mod prevailing;
mod smart;
mod strict;

pub use direct::Direct;
pub use prevailing::Prevailing;
pub use smart::Smart;
pub use strict::Strict;

use crate::error::ReconcileError;
use crate::options::{SmartStrategy, TextOptions};
use crate::plan::FontPlan;
use fb_core::{FontName, NodeId, TextHost};

/// Builds a font attribution plan from a node's current text.
pub trait AttributionStrategy {
    fn plan<H: TextHost + ?Sized>(
        &self,
        host: &H,
        node: NodeId,
        old: &[char],
    ) -> Result<FontPlan, ReconcileError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Direct,
    Prevailing,
    Strict,
    Smart,
}

impl AttributionStrategy for Strategy {
    fn plan<H: TextHost + ?Sized>(
        &self,
        host: &H,
        node: NodeId,
        old: &[char],
    ) -> Result<FontPlan, ReconcileError> {
        match self {
            Strategy::Direct => Direct.plan(host, node, old),
            Strategy::Prevailing => Prevailing.plan(host, node, old),
            Strategy::Strict => Strict.plan(host, node, old),
            Strategy::Smart => Smart.plan(host, node, old),
        }
    }
}

/// Pick the strategy for a node whose font is `node_font`.
pub fn select(node_font: &FontName, options: &TextOptions) -> Strategy {
    match node_font {
        FontName::Uniform(_) => Strategy::Direct,
        FontName::Mixed => match options.smart_strategy {
            Some(SmartStrategy::Prevail) => Strategy::Prevailing,
            Some(SmartStrategy::Strict) => Strategy::Strict,
            Some(SmartStrategy::Experimental) => Strategy::Smart,
            None => Strategy::Direct,
        },
    }
}
