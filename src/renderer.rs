use crate::error::Result;
use crate::types::RendererState;
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Notification that one or more named renderer state variables changed
#[derive(Debug, Clone)]
pub struct StateEvent {
    /// Names of the state variables that changed; may be empty
    pub changed: Vec<String>,
}

/// Capability surface of the media renderer under control.
///
/// Implementations wrap the actual remote-control transport (device
/// description, SOAP actions, event subscription renewal); the bridge only
/// reads snapshots, receives change events, and invokes playback actions.
///
/// Actions are side-effecting and asynchronous: a successful call means the
/// command was accepted, and the resulting state change arrives later as one
/// or more [`StateEvent`]s.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Snapshot of the current renderer state
    fn state(&self) -> RendererState;

    /// Subscribe to state-variable change events.
    ///
    /// The returned channel has a single consumer. Implementations push one
    /// event per service notification and keep the underlying subscriptions
    /// renewed until [`unsubscribe_all`](Renderer::unsubscribe_all) is called.
    async fn subscribe(&self) -> Result<mpsc::Receiver<StateEvent>>;

    /// Drop all active subscriptions
    async fn unsubscribe_all(&self) -> Result<()>;

    async fn play(&self) -> Result<()>;
    async fn pause(&self) -> Result<()>;
    async fn stop(&self) -> Result<()>;
    async fn next(&self) -> Result<()>;
    async fn previous(&self) -> Result<()>;
}
