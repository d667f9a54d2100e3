//! Newline-delimited JSON message loop.
//!
//! One UI message per input line, one plugin message per output line. The
//! loop announces the current settings first, then handles messages in order
//! until the input ends or the UI closes the plugin.

use anyhow::{Context as _, Result};
use fb_dispatch::{Dispatcher, PluginMessage, UiMessage};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub async fn run<R, W>(dispatcher: &mut Dispatcher, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    send(&mut writer, &dispatcher.init_message()).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await.context("reading UI message")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let msg: UiMessage = match serde_json::from_str(line) {
            Ok(msg) => msg,
            Err(err) => {
                log::warn!("Ignoring malformed message: {err}");
                continue;
            }
        };
        if let Some(reply) = dispatcher.handle(msg).await {
            send(&mut writer, &reply).await?;
        }
        if dispatcher.is_closed() {
            break;
        }
    }
    log::info!("Bridge loop finished");
    Ok(())
}

async fn send<W: AsyncWrite + Unpin>(writer: &mut W, msg: &PluginMessage) -> Result<()> {
    let mut line = serde_json::to_vec(msg).context("encoding plugin message")?;
    line.push(b'\n');
    writer
        .write_all(&line)
        .await
        .context("writing plugin message")?;
    writer.flush().await.context("flushing plugin message")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fb_core::Document;
    use fb_dispatch::Settings;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    async fn exchange(input: &str) -> (Vec<Value>, Dispatcher) {
        let mut dispatcher = Dispatcher::new(Document::new(), Settings::default());
        let mut output = Vec::new();
        run(&mut dispatcher, input.as_bytes(), &mut output)
            .await
            .unwrap();
        let replies = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        (replies, dispatcher)
    }

    #[tokio::test]
    async fn announces_settings_first() {
        let (replies, _) = exchange("").await;
        assert_eq!(
            replies,
            vec![json!({"type": "init-settings", "settings": {"serverPort": 3055}})]
        );
    }

    #[tokio::test]
    async fn replies_to_each_command_in_order() {
        let input = concat!(
            r#"{"type":"execute-command","id":"1","command":"create_rectangle","params":{"name":"R"}}"#,
            "\n",
            r#"{"type":"execute-command","id":"2","command":"nope"}"#,
            "\n",
        );
        let (replies, dispatcher) = exchange(input).await;

        assert_eq!(replies.len(), 3);
        assert_eq!(replies[1]["type"], "command-result");
        assert_eq!(replies[1]["id"], "1");
        assert_eq!(replies[1]["result"]["name"], "R");
        assert_eq!(
            replies[2],
            json!({"type": "command-error", "id": "2", "error": "Unknown command: nope"})
        );
        assert_eq!(
            dispatcher
                .document()
                .children_of(dispatcher.document().current_page().id)
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn skips_malformed_lines() {
        let input = "not json\n\n{\"type\":\"mystery\"}\n{\"type\":\"update-settings\",\"serverPort\":9000}\n";
        let (replies, dispatcher) = exchange(input).await;

        assert_eq!(replies.len(), 2);
        assert_eq!(
            replies[1],
            json!({"type": "settings-updated", "settings": {"serverPort": 9000}})
        );
        assert_eq!(dispatcher.settings().server_port, 9000);
    }

    #[tokio::test]
    async fn stops_after_close() {
        let input = concat!(
            r#"{"type":"close-plugin"}"#,
            "\n",
            r#"{"type":"execute-command","id":"late","command":"get_selection"}"#,
            "\n",
        );
        let (replies, dispatcher) = exchange(input).await;

        assert_eq!(replies.len(), 1);
        assert!(dispatcher.is_closed());
    }
}
