//! UI message envelope and routing.
//!
//! The UI talks to the plugin with `type`-tagged JSON messages. Commands are
//! executed in arrival order; each one gets exactly one reply carrying the
//! same `id`, either a result or an error message.

use crate::commands::Command;
use crate::handlers;
use crate::settings::Settings;
use fb_core::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Messages from the UI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum UiMessage {
    ExecuteCommand {
        id: String,
        command: String,
        #[serde(default)]
        params: Value,
    },
    #[serde(rename_all = "camelCase")]
    UpdateSettings { server_port: Option<u16> },
    Notify { message: String },
    ClosePlugin,
}

/// Messages to the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PluginMessage {
    CommandResult { id: String, result: Value },
    CommandError { id: String, error: String },
    InitSettings { settings: Settings },
    SettingsUpdated { settings: Settings },
}

pub struct Dispatcher {
    document: Document,
    settings: Settings,
    settings_path: Option<PathBuf>,
    closed: bool,
}

impl Dispatcher {
    pub fn new(document: Document, settings: Settings) -> Self {
        Self {
            document,
            settings,
            settings_path: None,
            closed: false,
        }
    }

    /// Persist settings updates to `path`.
    pub fn with_settings_path(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Sent once when the plugin starts.
    pub fn init_message(&self) -> PluginMessage {
        PluginMessage::InitSettings {
            settings: self.settings,
        }
    }

    /// Handle one UI message, returning the reply to send back, if any.
    pub async fn handle(&mut self, msg: UiMessage) -> Option<PluginMessage> {
        match msg {
            UiMessage::ExecuteCommand {
                id,
                command,
                params,
            } => Some(self.execute(id, &command, params).await),
            UiMessage::UpdateSettings { server_port } => {
                if let Some(port) = server_port {
                    self.settings.server_port = port;
                }
                self.persist_settings();
                Some(PluginMessage::SettingsUpdated {
                    settings: self.settings,
                })
            }
            UiMessage::Notify { message } => {
                log::info!("{message}");
                None
            }
            UiMessage::ClosePlugin => {
                log::info!("Plugin closed by UI");
                self.closed = true;
                None
            }
        }
    }

    /// Decode and run one command, producing its reply.
    pub async fn execute(&mut self, id: String, command: &str, params: Value) -> PluginMessage {
        let result = match Command::from_message(command, params) {
            Ok(cmd) => handlers::execute(&mut self.document, cmd).await,
            Err(err) => Err(err),
        };
        match result {
            Ok(result) => PluginMessage::CommandResult { id, result },
            Err(err) => {
                log::error!("Error executing command {command}: {err}");
                PluginMessage::CommandError {
                    id,
                    error: err.to_string(),
                }
            }
        }
    }

    fn persist_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        if let Err(err) = self.settings.save(path) {
            log::warn!("Failed to save settings to {path:?}: {err}");
        }
    }
}
