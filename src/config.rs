//! Client configuration
//!
//! Built once at client construction and shared by every call the client
//! makes. Treat as immutable afterwards.

use std::time::Duration;

use crate::http::Method;

/// Root URL all operation paths are resolved against
pub const API_ROOT: &str = "https://api.vimeo.com";

/// Versioned media type the API is pinned to
pub const ACCEPT_HEADER: &str = "application/vnd.vimeo.*;version=3.2";

const USER_AGENT: &str = concat!(
    "vimeo-client/",
    env!("CARGO_PKG_VERSION"),
    " (https://developer.vimeo.com/api/docs)"
);

/// Configuration shared by every call a client makes
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_root: String,
    /// Verbs the dispatcher will accept. Operations wired to anything else
    /// fail with [`MethodNotImplemented`](crate::ClientError::MethodNotImplemented).
    pub methods: Vec<Method>,
    pub accept: String,
    pub user_agent: String,
    /// Connect-phase timeout, applied at transport construction
    pub connect_timeout: Duration,
    /// Read-phase timeout, applied per request and overridable per call
    pub read_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: API_ROOT.to_string(),
            methods: vec![
                Method::Head,
                Method::Get,
                Method::Post,
                Method::Put,
                Method::Patch,
                Method::Options,
                Method::Delete,
            ],
            accept: ACCEPT_HEADER.to_string(),
            user_agent: USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(1),
            read_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Whether the dispatcher accepts this verb
    pub fn allows(&self, method: Method) -> bool {
        self.methods.contains(&method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_api_root_is_vimeo() {
        let config = ClientConfig::default();
        assert_eq!(config.api_root, "https://api.vimeo.com");
    }

    #[test]
    fn default_accept_header_pins_the_api_version() {
        let config = ClientConfig::default();
        assert_eq!(config.accept, "application/vnd.vimeo.*;version=3.2");
    }

    #[test]
    fn default_user_agent_names_the_crate() {
        let config = ClientConfig::default();
        assert!(config.user_agent.starts_with("vimeo-client/"));
    }

    #[test]
    fn default_timeouts_are_two_phase() {
        let config = ClientConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.read_timeout, Duration::from_secs(30));
    }

    #[test]
    fn default_method_set_has_all_seven_verbs() {
        let config = ClientConfig::default();
        assert_eq!(config.methods.len(), 7);
        assert!(config.allows(Method::Get));
        assert!(config.allows(Method::Options));
    }

    #[test]
    fn narrowed_method_set_rejects_other_verbs() {
        let config = ClientConfig {
            methods: vec![Method::Get],
            ..ClientConfig::default()
        };
        assert!(config.allows(Method::Get));
        assert!(!config.allows(Method::Post));
    }
}
