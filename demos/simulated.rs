//! Drive the bridge against a simulated renderer over stdin/stdout.
//!
//! The plugin side of the Snapcast protocol talks on stdout, so logs go to
//! stderr. Try it interactively:
//!
//! ```text
//! cargo run --example simulated
//! {"id":1,"jsonrpc":"2.0","method":"Plugin.Stream.Player.GetProperties"}
//! {"id":2,"jsonrpc":"2.0","method":"Plugin.Stream.Player.Control","params":{"command":"play"}}
//! ```
//!
//! The `Control` request answers with `"ok"` immediately; the transport
//! change it causes arrives about 1.5 seconds later as a
//! `Plugin.Stream.Player.Properties` notification.

use async_trait::async_trait;
use clap::Parser;
use snapcast_upnp::{Renderer, RendererState, Result, Session, StateEvent, TransportState};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

#[derive(Parser, Debug)]
#[command(name = "simulated")]
#[command(about = "Snapcast stream plugin demo against a simulated renderer")]
struct Args {
    /// Enable debug messages
    #[arg(short, long)]
    verbose: bool,
}

/// In-memory renderer: actions flip the transport state and emit change
/// events, the way a real device reports back over its event subscription.
struct SimulatedRenderer {
    state: Mutex<RendererState>,
    events: Mutex<Option<mpsc::Sender<StateEvent>>>,
}

impl SimulatedRenderer {
    fn new() -> Self {
        Self {
            state: Mutex::new(RendererState {
                transport_state: TransportState::Stopped,
                volume_level: Some(0.35),
                muted: Some(false),
                can_play: true,
                can_pause: true,
                can_stop: true,
                can_next: true,
                can_previous: true,
                duration: Some(180.0),
                artist: Some("Simulated Artist".into()),
                album: Some("Simulated Album".into()),
                title: Some("Simulated Track".into()),
                ..RendererState::default()
            }),
            events: Mutex::new(None),
        }
    }

    async fn transition(&self, transport_state: TransportState) -> Result<()> {
        self.state.lock().unwrap().transport_state = transport_state;
        let tx = self.events.lock().unwrap().clone();
        if let Some(tx) = tx {
            let _ = tx
                .send(StateEvent {
                    changed: vec!["TransportState".into()],
                })
                .await;
        }
        Ok(())
    }
}

#[async_trait]
impl Renderer for SimulatedRenderer {
    fn state(&self) -> RendererState {
        self.state.lock().unwrap().clone()
    }

    async fn subscribe(&self) -> Result<mpsc::Receiver<StateEvent>> {
        let (tx, rx) = mpsc::channel(16);
        *self.events.lock().unwrap() = Some(tx);
        Ok(rx)
    }

    async fn unsubscribe_all(&self) -> Result<()> {
        self.events.lock().unwrap().take();
        Ok(())
    }

    async fn play(&self) -> Result<()> {
        self.transition(TransportState::Playing).await
    }

    async fn pause(&self) -> Result<()> {
        self.transition(TransportState::Paused).await
    }

    async fn stop(&self) -> Result<()> {
        self.transition(TransportState::Stopped).await
    }

    async fn next(&self) -> Result<()> {
        self.transition(TransportState::Transitioning).await
    }

    async fn previous(&self) -> Result<()> {
        self.transition(TransportState::Transitioning).await
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "snapcast_upnp=debug,simulated=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let session = Session::new(Arc::new(SimulatedRenderer::new()));
    let handle = session.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, shutting down");
            handle.stop();
        }
    });

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.run(stdin, tokio::io::stdout()).await
}
