use crate::debounce::Debouncer;
use crate::error::{BridgeError, Result};
use crate::renderer::Renderer;
use crate::router::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, mpsc};
use tokio::time::timeout;

/// Bound on renderer subscription setup.
///
/// The steady-state request loop has no timeout; it blocks on input
/// indefinitely.
const SETUP_TIMEOUT: Duration = Duration::from_secs(4);

/// Handle for requesting a running session to stop
#[derive(Clone)]
pub struct SessionHandle {
    stop_tx: broadcast::Sender<()>,
}

impl SessionHandle {
    /// Request the session to stop.
    ///
    /// Interrupts a blocked input read; the session unsubscribes from the
    /// renderer and returns. A notification already in flight may be
    /// delivered or abandoned.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(());
    }
}

/// One bridge session: owns the renderer facade and supervises both the
/// event-to-notification flow and the request-to-response flow.
///
/// Lifecycle: subscribe to renderer events, announce readiness, loop over
/// inbound request lines until stopped or the input ends, then unsubscribe.
pub struct Session<R: ?Sized> {
    renderer: Arc<R>,
    stop_tx: broadcast::Sender<()>,
}

impl<R: Renderer + ?Sized + 'static> Session<R> {
    pub fn new(renderer: Arc<R>) -> Self {
        let (stop_tx, _) = broadcast::channel(1);
        Self { renderer, stop_tx }
    }

    /// Get a handle that can stop this session from another task
    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            stop_tx: self.stop_tx.clone(),
        }
    }

    /// Run the session over a pair of line streams.
    ///
    /// Returns `Ok(())` on a requested stop or input EOF so the process can
    /// exit cleanly. Failure to subscribe is fatal; once the request loop is
    /// running, per-line failures are logged and recovered.
    pub async fn run<I, O>(&self, input: I, output: O) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Send + Unpin + 'static,
    {
        let mut stop_rx = self.stop_tx.subscribe();

        // Subscribing: bounded setup, fatal on failure
        let events = timeout(SETUP_TIMEOUT, self.renderer.subscribe())
            .await
            .map_err(|_| BridgeError::SetupTimeout)??;

        // All components emit complete lines into one channel; a single
        // writer task frames and flushes them, so notifications and
        // responses interleave only at line granularity.
        let (line_tx, line_rx) = mpsc::unbounded_channel::<String>();
        let writer = tokio::spawn(write_lines(line_rx, output));

        let notifier = tokio::spawn(Debouncer::new(self.renderer.clone(), events, line_tx.clone()).run());

        let router = Router::new(self.renderer.clone(), line_tx);
        router.announce_ready()?;

        // Running: requests are handled one at a time, in arrival order
        let mut lines = input.lines();
        loop {
            tokio::select! {
                _ = stop_rx.recv() => {
                    tracing::debug!("stop requested");
                    break;
                }
                line = lines.next_line() => match line {
                    Ok(Some(line)) => router.handle_line(&line).await,
                    Ok(None) => {
                        tracing::debug!("input stream ended");
                        break;
                    }
                    Err(e) => {
                        tracing::error!("failed to read input: {}", e);
                        break;
                    }
                }
            }
        }

        // Unsubscribing: best effort, the process is exiting regardless
        tracing::debug!("unsubscribing from renderer events");
        if let Err(e) = self.renderer.unsubscribe_all().await {
            tracing::warn!("failed to unsubscribe: {}", e);
        }

        notifier.abort();
        drop(router);
        let _ = writer.await;
        Ok(())
    }
}

/// Forward outbound lines to the byte stream, one write + flush per line
async fn write_lines<O>(mut line_rx: mpsc::UnboundedReceiver<String>, mut output: O)
where
    O: AsyncWrite + Unpin,
{
    while let Some(line) = line_rx.recv().await {
        let result = async {
            output.write_all(line.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await
        }
        .await;
        if let Err(e) = result {
            tracing::error!("failed to write output line: {}", e);
            break;
        }
    }
}
