//! Command catalog and UI message handling for the fig-bridge plugin.
//!
//! [`Dispatcher`] owns the host [`Document`](fb_core::Document) and the
//! plugin [`Settings`], decodes UI messages, and produces the replies.

pub mod commands;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod settings;

pub use commands::Command;
pub use dispatcher::{Dispatcher, PluginMessage, UiMessage};
pub use error::CommandError;
pub use handlers::execute;
pub use settings::{DEFAULT_SERVER_PORT, Settings, SettingsError};
