//! WebSocket transport collaborator: the only I/O in the binary.
//!
//! Reads one server event at a time, hands it to the strategist, and
//! transmits the encoded action unless the wire token is empty. Malformed
//! events are logged and skipped without touching carried state.

use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::tungstenite::Message;
use url::Url;

use holdem_shared::RoundEvent;

use crate::config::Config;
use crate::pretty;
use crate::strategy::Strategist;

/// Build the game-server websocket URL from a base string like
/// "localhost:8080" or "http://host:8080": map the scheme to ws/wss, force
/// the /ws path and attach the credentials as query parameters.
pub fn build_ws_url(server: &str, user: &str, password: &str) -> Result<Url> {
    // A bare "host:port" parses as a URL whose scheme is the host name, so
    // only accept the schemes we understand and re-parse everything else.
    let mut url = match Url::parse(server) {
        Ok(url) if matches!(url.scheme(), "http" | "https" | "ws" | "wss") => url,
        _ => Url::parse(&format!("ws://{}", server))
            .with_context(|| format!("invalid server address '{}'", server))?,
    };

    match url.scheme() {
        "http" => url.set_scheme("ws").ok(),
        "https" => url.set_scheme("wss").ok(),
        _ => Some(()),
    }
    .ok_or_else(|| anyhow::anyhow!("unsupported URL scheme: {}", url.scheme()))?;

    if url.path() != "/ws" {
        url.set_path("/ws");
    }
    url.query_pairs_mut()
        .clear()
        .append_pair("user", user)
        .append_pair("password", password);
    Ok(url)
}

/// Connect and play until the server closes the connection or the socket
/// errors out.
pub async fn run(cfg: &Config) -> Result<()> {
    let ws_url = build_ws_url(&cfg.server, &cfg.user, &cfg.password)?;
    tracing::info!(url = %ws_url, "connecting to game server");
    let (ws_stream, _resp) = tokio_tungstenite::connect_async(ws_url.as_str())
        .await
        .context("connecting to game server")?;
    let (mut write, mut read) = ws_stream.split();

    let mut strategist = Strategist::new(cfg.user.clone());

    loop {
        match read.next().await {
            Some(Ok(Message::Text(txt))) => {
                let event: RoundEvent = match serde_json::from_str(&txt) {
                    Ok(event) => event,
                    Err(e) => {
                        tracing::warn!(error = %e, "skipping malformed event");
                        continue;
                    }
                };

                println!("{}", pretty::format_event(&event, strategist.user(), true));

                let action = strategist.decide(&event);
                let token = action.wire();
                if token.is_empty() {
                    tracing::debug!("no action for this event");
                    continue;
                }

                tracing::info!(
                    round = ?event.game_round,
                    combination = %strategist.current_combination().describe(),
                    %token,
                    "responding"
                );
                write
                    .send(Message::Text(token))
                    .await
                    .context("sending action")?;
            }
            Some(Ok(_other)) => { /* ignore non-text frames */ }
            Some(Err(e)) => {
                tracing::error!(error = %e, "websocket error");
                break;
            }
            None => break, // closed
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_url_from_bare_host() {
        let url = build_ws_url("localhost:8080", "bot", "secret").unwrap();
        assert_eq!(url.as_str(), "ws://localhost:8080/ws?user=bot&password=secret");
    }

    #[test]
    fn ws_url_maps_https_to_wss() {
        let url = build_ws_url("https://game.example.org", "bot", "pw").unwrap();
        assert_eq!(url.scheme(), "wss");
        assert_eq!(url.path(), "/ws");
    }
}
