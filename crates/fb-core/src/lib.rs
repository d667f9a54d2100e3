pub mod document;
pub mod fonts;
pub mod host;
pub mod id;
pub mod model;
pub mod styles;

pub use document::Document;
pub use fonts::FontLibrary;
pub use host::{FontLoader, HostError, TextHost};
pub use id::NodeId;
pub use model::*;
pub use styles::LocalStyles;

// Re-export petgraph types so downstream crates don't need a direct dependency
pub use petgraph::graph::NodeIndex;
