use crate::dispatch::{dispatch, ControlCommand};
use crate::error::{BridgeError, Result};
use crate::properties::PlaybackProperties;
use crate::protocol::{
    Notification, PlayerCommand, Request, Response, PLAYER_INTERFACE, STREAM_READY,
};
use crate::renderer::Renderer;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Routes inbound JSON-RPC lines to the renderer and emits correlated
/// responses.
///
/// Malformed or unsupported requests are logged and dropped without a
/// response; silence is the documented behavior, not an error object. A bad
/// line never terminates the request loop.
pub struct Router<R: ?Sized> {
    renderer: Arc<R>,
    out: mpsc::UnboundedSender<String>,
}

impl<R: Renderer + ?Sized> Router<R> {
    pub fn new(renderer: Arc<R>, out: mpsc::UnboundedSender<String>) -> Self {
        Self { renderer, out }
    }

    /// Announce plugin readiness.
    ///
    /// The host does not send any commands until it has seen this
    /// notification.
    pub fn announce_ready(&self) -> Result<()> {
        self.send(&Notification::new(STREAM_READY))
    }

    /// Handle one inbound line, emitting zero or one outbound line.
    ///
    /// Callers must not overlap invocations: a `Control` action is awaited to
    /// completion before the next line is read.
    pub async fn handle_line(&self, line: &str) {
        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                tracing::error!("failed to decode input {:?} as JSON-RPC: {}", line, e);
                return;
            }
        };
        tracing::debug!(method = %request.method, "got request");

        let Some((interface, command)) = request.split_method() else {
            tracing::warn!("ignoring request with malformed method '{}'", request.method);
            return;
        };
        if interface != PLAYER_INTERFACE {
            tracing::warn!("ignoring request for unknown interface '{}'", interface);
            return;
        }
        let Some(command) = PlayerCommand::from_name(command) else {
            tracing::warn!("ignoring request for unsupported command '{}'", command);
            return;
        };

        match command {
            PlayerCommand::GetProperties => {
                let properties = PlaybackProperties::from_state(&self.renderer.state());
                match serde_json::to_value(properties) {
                    Ok(result) => self.respond(result, request.response_id()),
                    Err(e) => tracing::error!("failed to encode properties: {}", e),
                }
            }
            PlayerCommand::Control => {
                if let Some(command) = control_command(request.params.as_ref()) {
                    // Action failures must not take down the session
                    if let Err(e) = dispatch(self.renderer.as_ref(), command).await {
                        tracing::error!("renderer rejected {:?}: {}", command, e);
                    }
                }
                self.respond(Value::from("ok"), request.response_id());
            }
            // Accepted but inert: no renderer action, no response
            PlayerCommand::SetProperty => {}
        }
    }

    fn respond(&self, result: Value, id: Value) {
        if let Err(e) = self.send(&Response::new(result, id)) {
            tracing::warn!("failed to send response: {}", e);
        }
    }

    fn send<T: Serialize>(&self, message: &T) -> Result<()> {
        let line = serde_json::to_string(message)?;
        self.out.send(line).map_err(|_| BridgeError::ChannelClosed)
    }
}

/// Extract the playback command from `params.command`.
///
/// Missing params or an unrecognized command string is a no-op, logged here;
/// the host still receives its correlated response.
fn control_command(params: Option<&Value>) -> Option<ControlCommand> {
    let Some(command) = params.and_then(|p| p.get("command")) else {
        tracing::warn!("control request without params.command");
        return None;
    };
    match serde_json::from_value(command.clone()) {
        Ok(command) => Some(command),
        Err(_) => {
            tracing::warn!("ignoring unsupported control command {}", command);
            None
        }
    }
}
