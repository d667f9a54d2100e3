//! Text run reconciliation: replace a text node's characters while keeping
//! a sensible font attribution.
//!
//! The sequence is always: read the old text, build a plan, load every font
//! the plan needs, and only then write. The node's font is set before its
//! characters so the host never holds characters it cannot render.
//!
//! When a required font cannot be loaded the update still goes through:
//! the fallback font is applied to the whole text and the outcome is
//! reported as degraded.

use crate::error::ReconcileError;
use crate::gate::FontGate;
use crate::options::TextOptions;
use crate::plan::FontPlan;
use crate::strategy::{AttributionStrategy, select};
use fb_core::{FontRef, NodeId, TextHost};

/// Result of a text update that wrote the new characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// Characters written with the planned font attribution.
    Applied,
    /// A required font failed to load; the characters were written with
    /// the fallback font only.
    Degraded { font: FontRef },
}

impl ReconcileOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ReconcileOutcome::Applied)
    }
}

/// Replace the characters of `node` with `text`.
pub async fn set_characters<H: TextHost + ?Sized>(
    host: &mut H,
    node: NodeId,
    text: &str,
    options: &TextOptions,
) -> Result<ReconcileOutcome, ReconcileError> {
    let node_font = host.font_name(node).map_err(ReconcileError::NodeRead)?;
    let strategy = select(&node_font, options);
    let old: Vec<char> = host
        .characters(node)
        .map_err(ReconcileError::NodeRead)?
        .chars()
        .collect();
    let plan = strategy.plan(&*host, node, &old)?;
    log::debug!("set_characters {node}: {strategy:?} over {} characters", old.len());

    let fallback = &options.fallback_font;
    let mut gate = FontGate::new();
    gate.request(plan.base_font(fallback));
    gate.request_all(plan.fonts());

    let loaded = gate.open(&*host).await;
    if let Err(failure) = loaded {
        log::warn!(
            "Failed to load \"{}\" and replaced with fallback \"{fallback}\": {}",
            failure.font,
            failure.source
        );
        write_with_fallback(host, node, text, fallback).await?;
        return Ok(ReconcileOutcome::Degraded { font: failure.font });
    }

    write(host, node, text, &plan, fallback)?;
    Ok(ReconcileOutcome::Applied)
}

fn write<H: TextHost + ?Sized>(
    host: &mut H,
    node: NodeId,
    text: &str,
    plan: &FontPlan,
    fallback: &FontRef,
) -> Result<(), ReconcileError> {
    host.set_font_name(node, plan.base_font(fallback))
        .map_err(ReconcileError::CharacterWrite)?;
    host.set_characters(node, text)
        .map_err(ReconcileError::CharacterWrite)?;
    plan.replay(host, node, text)
        .map_err(ReconcileError::CharacterWrite)
}

async fn write_with_fallback<H: TextHost + ?Sized>(
    host: &mut H,
    node: NodeId,
    text: &str,
    fallback: &FontRef,
) -> Result<(), ReconcileError> {
    host.load_font(fallback)
        .await
        .map_err(|source| ReconcileError::FallbackUnavailable {
            font: fallback.clone(),
            source,
        })?;
    write(host, node, text, &FontPlan::Uniform(fallback.clone()), fallback)
}
