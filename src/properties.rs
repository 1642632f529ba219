use crate::types::{RendererState, TransportState};
use serde::Serialize;

/// Playback status as the host understands it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    Playing,
    Paused,
    Stopped,
}

/// Metadata for the current track, attached while the renderer is not stopped
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackMetadata {
    pub duration: f64,
    pub artist: Vec<String>,
    pub album: String,
    pub album_artist: Vec<String>,
    pub title: String,
    pub art_url: String,
}

/// Property set sent to the host, both as a change notification and as the
/// `GetProperties` result.
///
/// `loopStatus`, `shuffle`, and `rate` are fixed: the renderers this bridge
/// targets do not report looping, shuffle, or playback rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackProperties {
    pub playback_status: PlaybackStatus,
    pub loop_status: &'static str,
    pub shuffle: bool,
    pub volume: u8,
    pub mute: bool,
    pub rate: f64,
    pub position: f64,
    pub can_go_next: bool,
    pub can_go_previous: bool,
    pub can_play: bool,
    pub can_pause: bool,
    pub can_seek: bool,
    pub can_control: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<TrackMetadata>,
}

impl PlaybackProperties {
    /// Map a renderer state snapshot to the host property schema.
    ///
    /// Pure and infallible: unsupported fields fall back to their defaults
    /// (`volume` 100, `mute` false, empty metadata strings).
    pub fn from_state(state: &RendererState) -> Self {
        let playback_status = match state.transport_state {
            TransportState::Playing | TransportState::Transitioning => PlaybackStatus::Playing,
            TransportState::Paused => PlaybackStatus::Paused,
            _ => PlaybackStatus::Stopped,
        };

        // Metadata tracks the transport state, not the mapped status: a
        // renderer with no media loaded still reports what it knows.
        let metadata = (state.transport_state != TransportState::Stopped).then(|| TrackMetadata {
            duration: state.duration.unwrap_or(0.0),
            artist: vec![state.artist.clone().unwrap_or_default()],
            album: state.album.clone().unwrap_or_default(),
            album_artist: vec![state.album_artist.clone().unwrap_or_default()],
            title: state.title.clone().unwrap_or_default(),
            art_url: state.art_url.clone().unwrap_or_default(),
        });

        Self {
            playback_status,
            loop_status: "none",
            shuffle: false,
            volume: state
                .volume_level
                .map(|level| (100.0 * level).round().clamp(0.0, 100.0) as u8)
                .unwrap_or(100),
            mute: state.muted.unwrap_or(false),
            rate: 1.0,
            position: state.position,
            can_go_next: state.can_next,
            can_go_previous: state.can_previous,
            can_play: state.can_play,
            can_pause: state.can_pause,
            can_seek: state.can_seek_abs && state.can_seek_rel,
            can_control: state.can_stop || state.can_play,
            metadata,
        }
    }
}
