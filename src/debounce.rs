use crate::properties::PlaybackProperties;
use crate::protocol::{Notification, PLAYER_PROPERTIES};
use crate::renderer::{Renderer, StateEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::sleep;

/// Quiet period between the first change event and the outbound notification
pub(crate) const QUIET_PERIOD: Duration = Duration::from_millis(1500);

/// Coalesces bursts of renderer change events into single property
/// notifications.
///
/// Renderers tend to report several state variables in quick succession when
/// anything happens (transport state, track URI, metadata, volume). The
/// debouncer waits out a fixed quiet period after the first event and then
/// sends one notification reflecting the settled state. Events arriving
/// inside the window are absorbed without restarting the timer, so the host
/// sees at most one notification per window even under a continuous storm.
pub struct Debouncer<R: ?Sized> {
    renderer: Arc<R>,
    events: mpsc::Receiver<StateEvent>,
    out: mpsc::UnboundedSender<String>,
}

impl<R: Renderer + ?Sized> Debouncer<R> {
    pub fn new(
        renderer: Arc<R>,
        events: mpsc::Receiver<StateEvent>,
        out: mpsc::UnboundedSender<String>,
    ) -> Self {
        Self {
            renderer,
            events,
            out,
        }
    }

    /// Consume change events until the channel closes.
    pub async fn run(mut self) {
        while let Some(event) = self.events.recv().await {
            if event.changed.is_empty() {
                continue;
            }
            tracing::debug!(variables = ?event.changed, "renderer state changed");

            // Quiet window: coalesce without restarting the timer
            let window = sleep(QUIET_PERIOD);
            tokio::pin!(window);
            let mut open = true;
            loop {
                tokio::select! {
                    _ = &mut window => break,
                    more = self.events.recv() => {
                        if more.is_none() {
                            open = false;
                            break;
                        }
                    }
                }
            }

            self.notify();
            if !open {
                break;
            }
        }
        tracing::debug!("event channel closed, debouncer exiting");
    }

    /// Read the settled renderer state and send one properties notification.
    fn notify(&self) {
        let properties = PlaybackProperties::from_state(&self.renderer.state());
        let line = serde_json::to_value(&properties)
            .map(|params| Notification::with_params(PLAYER_PROPERTIES, params))
            .and_then(|note| serde_json::to_string(&note));
        match line {
            Ok(line) => {
                if self.out.send(line).is_err() {
                    tracing::warn!("output channel closed, dropping properties notification");
                }
            }
            Err(e) => tracing::error!("failed to encode properties notification: {}", e),
        }
    }
}
