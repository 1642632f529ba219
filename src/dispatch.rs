use crate::error::Result;
use crate::renderer::Renderer;
use crate::types::TransportState;
use serde::Deserialize;

/// Playback commands accepted in `Control` requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlCommand {
    Play,
    Pause,
    PlayPause,
    Stop,
    Next,
    Previous,
}

/// Invoke the renderer action for a playback command.
///
/// `PlayPause` inspects the transport state at dispatch time: a paused
/// renderer is resumed, anything else is paused. The state is re-read on
/// every call, never cached.
pub async fn dispatch<R>(renderer: &R, command: ControlCommand) -> Result<()>
where
    R: Renderer + ?Sized,
{
    match command {
        ControlCommand::Play => renderer.play().await,
        ControlCommand::Pause => renderer.pause().await,
        ControlCommand::Stop => renderer.stop().await,
        ControlCommand::Next => renderer.next().await,
        ControlCommand::Previous => renderer.previous().await,
        ControlCommand::PlayPause => {
            if renderer.state().transport_state == TransportState::Paused {
                renderer.play().await
            } else {
                renderer.pause().await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::testing::MockRenderer;
    use crate::types::RendererState;

    fn renderer_in(transport_state: TransportState) -> MockRenderer {
        MockRenderer::with_state(RendererState {
            transport_state,
            ..RendererState::default()
        })
    }

    #[test]
    fn commands_decode_from_wire_names() {
        for (name, expected) in [
            ("play", ControlCommand::Play),
            ("pause", ControlCommand::Pause),
            ("playPause", ControlCommand::PlayPause),
            ("stop", ControlCommand::Stop),
            ("next", ControlCommand::Next),
            ("previous", ControlCommand::Previous),
        ] {
            let decoded: ControlCommand =
                serde_json::from_value(serde_json::Value::String(name.into())).unwrap();
            assert_eq!(decoded, expected);
        }
        assert!(serde_json::from_value::<ControlCommand>("rewind".into()).is_err());
    }

    #[tokio::test]
    async fn direct_commands_map_to_actions() {
        let renderer = renderer_in(TransportState::Playing);
        dispatch(&renderer, ControlCommand::Stop).await.unwrap();
        dispatch(&renderer, ControlCommand::Next).await.unwrap();
        dispatch(&renderer, ControlCommand::Previous).await.unwrap();
        dispatch(&renderer, ControlCommand::Play).await.unwrap();
        dispatch(&renderer, ControlCommand::Pause).await.unwrap();
        assert_eq!(
            renderer.taken_actions(),
            vec!["stop", "next", "previous", "play", "pause"]
        );
    }

    #[tokio::test]
    async fn play_pause_resumes_only_when_paused() {
        let renderer = renderer_in(TransportState::Paused);
        dispatch(&renderer, ControlCommand::PlayPause).await.unwrap();
        assert_eq!(renderer.taken_actions(), vec!["play"]);

        let renderer = renderer_in(TransportState::Playing);
        dispatch(&renderer, ControlCommand::PlayPause).await.unwrap();
        assert_eq!(renderer.taken_actions(), vec!["pause"]);

        let renderer = renderer_in(TransportState::Stopped);
        dispatch(&renderer, ControlCommand::PlayPause).await.unwrap();
        assert_eq!(renderer.taken_actions(), vec!["pause"]);
    }

    #[tokio::test]
    async fn play_pause_re_reads_state_each_call() {
        let renderer = renderer_in(TransportState::Paused);
        dispatch(&renderer, ControlCommand::PlayPause).await.unwrap();

        renderer.set_state(RendererState {
            transport_state: TransportState::Playing,
            ..RendererState::default()
        });
        dispatch(&renderer, ControlCommand::PlayPause).await.unwrap();

        assert_eq!(renderer.taken_actions(), vec!["play", "pause"]);
    }
}
