use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Method namespace the host uses for playback control and queries
pub const PLAYER_INTERFACE: &str = "Plugin.Stream.Player";

/// Notification announcing the plugin is ready to accept requests
pub const STREAM_READY: &str = "Plugin.Stream.Ready";

/// Notification carrying the mapped playback properties
pub const PLAYER_PROPERTIES: &str = "Plugin.Stream.Player.Properties";

const JSONRPC_VERSION: &str = "2.0";

/// Inbound JSON-RPC request, one per line
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Correlation id supplied by the host, kept opaque
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// Method of the form `<Interface>.<Command>`
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// Outbound JSON-RPC response correlated to a request
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub id: Value,
    pub jsonrpc: &'static str,
    pub result: Value,
}

/// Outbound JSON-RPC notification (no correlation id)
#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Commands supported under the player interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    Control,
    SetProperty,
    GetProperties,
}

impl Request {
    /// Split `method` into (interface, command) at the last separator
    pub fn split_method(&self) -> Option<(&str, &str)> {
        self.method.rsplit_once('.')
    }

    /// Correlation id to echo in the response.
    ///
    /// Hosts expect `1` when the request carried no id.
    pub fn response_id(&self) -> Value {
        self.id.clone().unwrap_or_else(|| Value::from(1))
    }
}

impl Response {
    /// Create a response with the given result and correlation id
    pub fn new(result: Value, id: Value) -> Self {
        Self {
            id,
            jsonrpc: JSONRPC_VERSION,
            result,
        }
    }
}

impl Notification {
    /// Create a notification with no params
    pub fn new(method: &'static str) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params: None,
        }
    }

    /// Create a notification carrying params
    pub fn with_params(method: &'static str, params: Value) -> Self {
        Self {
            params: Some(params),
            ..Self::new(method)
        }
    }
}

impl PlayerCommand {
    /// Look up a supported command by its wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Control" => Some(PlayerCommand::Control),
            "SetProperty" => Some(PlayerCommand::SetProperty),
            "GetProperties" => Some(PlayerCommand::GetProperties),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_parses_with_full_fields() {
        let req: Request = serde_json::from_str(
            r#"{"id":7,"jsonrpc":"2.0","method":"Plugin.Stream.Player.Control","params":{"command":"play"}}"#,
        )
        .unwrap();
        assert_eq!(req.split_method(), Some(("Plugin.Stream.Player", "Control")));
        assert_eq!(req.response_id(), json!(7));
        assert_eq!(req.params.unwrap()["command"], json!("play"));
    }

    #[test]
    fn request_id_defaults_to_one() {
        let req: Request =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"Plugin.Stream.Player.GetProperties"}"#)
                .unwrap();
        assert_eq!(req.response_id(), json!(1));
        assert!(req.params.is_none());
    }

    #[test]
    fn request_id_stays_opaque() {
        let req: Request =
            serde_json::from_str(r#"{"id":"abc-123","method":"Plugin.Stream.Player.Control"}"#)
                .unwrap();
        assert_eq!(req.response_id(), json!("abc-123"));
    }

    #[test]
    fn method_without_separator_does_not_split() {
        let req: Request = serde_json::from_str(r#"{"method":"GetProperties"}"#).unwrap();
        assert!(req.split_method().is_none());
    }

    #[test]
    fn response_serializes_with_version_literal() {
        let resp = Response::new(json!("ok"), json!(4));
        let line = serde_json::to_string(&resp).unwrap();
        assert_eq!(line, r#"{"id":4,"jsonrpc":"2.0","result":"ok"}"#);
    }

    #[test]
    fn notification_omits_absent_params() {
        let note = Notification::new(STREAM_READY);
        let line = serde_json::to_string(&note).unwrap();
        assert_eq!(line, r#"{"jsonrpc":"2.0","method":"Plugin.Stream.Ready"}"#);

        let note = Notification::with_params(PLAYER_PROPERTIES, json!({"volume": 30}));
        let value: Value = serde_json::to_string(&note)
            .and_then(|s| serde_json::from_str(&s))
            .unwrap();
        assert_eq!(value["method"], json!("Plugin.Stream.Player.Properties"));
        assert_eq!(value["params"]["volume"], json!(30));
    }

    #[test]
    fn supported_commands_resolve_by_name() {
        assert_eq!(PlayerCommand::from_name("Control"), Some(PlayerCommand::Control));
        assert_eq!(
            PlayerCommand::from_name("SetProperty"),
            Some(PlayerCommand::SetProperty)
        );
        assert_eq!(
            PlayerCommand::from_name("GetProperties"),
            Some(PlayerCommand::GetProperties)
        );
        assert_eq!(PlayerCommand::from_name("Shuffle"), None);
    }
}
