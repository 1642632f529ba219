//! Snapcast stream plugin bridge for UPnP/DLNA media renderers
//!
//! This library bridges a media renderer's live playback state to the
//! line-oriented JSON-RPC control channel Snapcast uses to talk to stream
//! plugins. It provides:
//!
//! - Debounced property-change notifications built from renderer events
//! - Mapping from renderer state to the Snapcast player property schema
//! - Request routing for the `Plugin.Stream.Player` interface
//!   (`Control`, `GetProperties`, `SetProperty`)
//! - Session lifecycle management from subscription to teardown
//!
//! The remote-control transport itself (device discovery, SOAP actions,
//! event subscription renewal, XML parsing) is not part of this crate;
//! callers supply it behind the [`Renderer`] trait.
//!
//! # Quick Start
//!
//! Implement [`Renderer`] over your transport, then run a [`Session`] over
//! the host's line streams:
//!
//! ```no_run
//! use async_trait::async_trait;
//! use snapcast_upnp::{Renderer, RendererState, Result, Session, StateEvent};
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//!
//! struct MyRenderer;
//!
//! #[async_trait]
//! impl Renderer for MyRenderer {
//!     fn state(&self) -> RendererState {
//!         RendererState::default()
//!     }
//!     async fn subscribe(&self) -> Result<mpsc::Receiver<StateEvent>> {
//!         let (_tx, rx) = mpsc::channel(16);
//!         Ok(rx)
//!     }
//!     async fn unsubscribe_all(&self) -> Result<()> { Ok(()) }
//!     async fn play(&self) -> Result<()> { Ok(()) }
//!     async fn pause(&self) -> Result<()> { Ok(()) }
//!     async fn stop(&self) -> Result<()> { Ok(()) }
//!     async fn next(&self) -> Result<()> { Ok(()) }
//!     async fn previous(&self) -> Result<()> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let session = Session::new(Arc::new(MyRenderer));
//!     let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//!     session.run(stdin, tokio::io::stdout()).await
//! }
//! ```
//!
//! # Architecture
//!
//! The library is organized into several layers:
//!
//! - **Renderer**: capability surface over the playback device, supplied by
//!   the caller
//! - **Properties**: pure mapping from a renderer state snapshot to the host
//!   property schema
//! - **Debounce**: coalesces renderer event bursts into single delayed
//!   notifications
//! - **Router**: validates inbound JSON-RPC requests and emits correlated
//!   responses
//! - **Session**: lifecycle supervision (subscribe, ready, request loop,
//!   teardown)
//! - **Protocol**: JSON-RPC line message structures

mod debounce;
mod dispatch;
mod error;
mod properties;
mod protocol;
mod renderer;
mod router;
mod session;
mod types;

// Public exports
pub use dispatch::ControlCommand;
pub use error::{BridgeError, Result};
pub use properties::{PlaybackProperties, PlaybackStatus, TrackMetadata};
pub use protocol::{Notification, PlayerCommand, Request, Response};
pub use renderer::{Renderer, StateEvent};
pub use router::Router;
pub use session::{Session, SessionHandle};
pub use types::{RendererState, TransportState};
