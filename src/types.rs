/// Playback mode reported by the renderer's transport service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    #[default]
    Stopped,
    Playing,
    Paused,
    Transitioning,
    NoMedia,
    /// Vendor-specific or unrecognized state string.
    Unknown,
}

impl TransportState {
    /// Normalize a raw AVTransport `CurrentTransportState` string.
    ///
    /// Total mapping: anything unrecognized becomes [`TransportState::Unknown`],
    /// never an error.
    pub fn from_upnp(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "STOPPED" => TransportState::Stopped,
            "PLAYING" | "RECORDING" => TransportState::Playing,
            "PAUSED_PLAYBACK" | "PAUSED_RECORDING" => TransportState::Paused,
            "TRANSITIONING" | "BUFFERING" | "PREPARING" => TransportState::Transitioning,
            "NO_MEDIA_PRESENT" => TransportState::NoMedia,
            _ => TransportState::Unknown,
        }
    }
}

/// Snapshot of renderer state as reported by the facade.
///
/// Owned and refreshed by the [`Renderer`](crate::Renderer) implementation;
/// the bridge only reads it. `Option` fields encode missing device support
/// (`volume_level`, `muted`) or absent media information, so facades fill in
/// only what the device actually reports.
#[derive(Debug, Clone, Default)]
pub struct RendererState {
    pub transport_state: TransportState,

    /// Volume as a fraction in `0.0..=1.0`, `None` if the renderer has no
    /// volume control.
    pub volume_level: Option<f64>,

    /// Mute flag, `None` if the renderer has no mute control.
    pub muted: Option<bool>,

    /// Playback position in seconds.
    pub position: f64,

    // Transport capabilities advertised by the device
    pub can_next: bool,
    pub can_previous: bool,
    pub can_play: bool,
    pub can_pause: bool,
    pub can_stop: bool,
    pub can_seek_abs: bool,
    pub can_seek_rel: bool,

    // Current media information, where known
    pub duration: Option<f64>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub album_artist: Option<String>,
    pub title: Option<String>,
    pub art_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upnp_states_normalize() {
        assert_eq!(TransportState::from_upnp("PLAYING"), TransportState::Playing);
        assert_eq!(
            TransportState::from_upnp("paused_playback"),
            TransportState::Paused
        );
        assert_eq!(
            TransportState::from_upnp(" TRANSITIONING "),
            TransportState::Transitioning
        );
        assert_eq!(
            TransportState::from_upnp("NO_MEDIA_PRESENT"),
            TransportState::NoMedia
        );
        assert_eq!(TransportState::from_upnp("STOPPED"), TransportState::Stopped);
    }

    #[test]
    fn unrecognized_state_is_unknown_not_an_error() {
        assert_eq!(
            TransportState::from_upnp("CUSTOM_VENDOR_STATE"),
            TransportState::Unknown
        );
        assert_eq!(TransportState::from_upnp(""), TransportState::Unknown);
    }
}
