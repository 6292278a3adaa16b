//! Credentials and bearer-token attachment

use reqwest::header::{HeaderMap, AUTHORIZATION};

use crate::error::ClientError;

/// Credential material supplied at client construction
///
/// Either a bearer token, or an application key/secret pair. A client
/// without a token sends its requests unauthenticated; the server rejects
/// them, but the library does not.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub token: Option<String>,
    pub key: Option<String>,
    pub secret: Option<String>,
}

impl Credentials {
    /// Bearer-token credentials
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Self::default()
        }
    }

    /// Application-identity credentials
    pub fn app(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            token: None,
            key: Some(key.into()),
            secret: Some(secret.into()),
        }
    }

    /// A client needs a token, or both key and secret
    pub(crate) fn validate(&self) -> Result<(), ClientError> {
        if self.token.is_some() || (self.key.is_some() && self.secret.is_some()) {
            Ok(())
        } else {
            Err(ClientError::BadConfiguration)
        }
    }
}

/// Attaches `Authorization: Bearer <token>` to outgoing requests
#[derive(Debug, Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    /// Creates an authenticator for the given token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Inserts the Authorization header, replacing any previous value
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(
            AUTHORIZATION,
            format!("Bearer {}", self.token).parse().unwrap(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_credentials_validate() {
        assert!(Credentials::token("abc").validate().is_ok());
    }

    #[test]
    fn app_credentials_validate() {
        assert!(Credentials::app("k", "s").validate().is_ok());
    }

    #[test]
    fn empty_credentials_are_a_configuration_error() {
        let result = Credentials::default().validate();
        assert!(matches!(result, Err(ClientError::BadConfiguration)));
    }

    #[test]
    fn key_without_secret_is_a_configuration_error() {
        let creds = Credentials {
            key: Some("k".to_string()),
            ..Credentials::default()
        };
        assert!(matches!(creds.validate(), Err(ClientError::BadConfiguration)));
    }

    #[test]
    fn bearer_auth_sets_the_authorization_header() {
        let mut headers = HeaderMap::new();
        BearerAuth::new("my_token").apply(&mut headers);

        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer my_token");
    }

    #[test]
    fn bearer_auth_replaces_a_previous_value() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer stale".parse().unwrap());
        BearerAuth::new("fresh").apply(&mut headers);

        assert_eq!(headers.len(), 1);
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap().to_str().unwrap(),
            "Bearer fresh"
        );
    }
}
