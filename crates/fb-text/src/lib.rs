//! Mixed-font text run reconciliation.
//!
//! Replacing the characters of a text node that uses several fonts forces a
//! choice about which font each part of the new text gets. This crate makes
//! that choice (see [`strategy`]), loads the fonts it needs through a
//! [`FontGate`], and writes the result through the host's [`TextHost`]
//! boundary.
//!
//! [`TextHost`]: fb_core::TextHost

pub mod error;
pub mod gate;
pub mod inspector;
pub mod options;
pub mod plan;
pub mod reconciler;
pub mod scanner;
pub mod strategy;

pub use error::{FontLoadFailure, ReconcileError};
pub use gate::FontGate;
pub use options::{SmartStrategy, TextOptions};
pub use plan::{AnchoredFont, FontPlan};
pub use reconciler::{ReconcileOutcome, set_characters};
pub use scanner::{CharRange, delimiter_ranges, scan};
pub use strategy::{AttributionStrategy, Strategy, select};
