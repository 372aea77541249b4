//! Authentication for the Vertex AI endpoints.
//!
//! Vertex is addressed with OAuth bearer tokens. The shell does not mint
//! tokens itself; it forwards whatever the environment provided. An absent
//! token means the request goes out unauthenticated and the remote service
//! produces the failure.

use secrecy::{ExposeSecret, SecretString};

use crate::config::DeploymentConfig;

/// Authentication manager for outbound requests.
pub trait AuthManager: Send + Sync {
    /// Get the authentication header name and value, if any.
    fn get_auth_header(&self) -> Option<(String, String)>;

    /// Clone the auth manager into a boxed trait object.
    fn clone_box(&self) -> Box<dyn AuthManager>;
}

/// Bearer-token authentication manager.
pub struct AccessTokenAuthManager {
    access_token: Option<SecretString>,
}

impl AccessTokenAuthManager {
    /// Create a new auth manager. `None` means no header is attached.
    pub fn new(access_token: Option<SecretString>) -> Self {
        Self { access_token }
    }

    /// Create from config.
    pub fn from_config(config: &DeploymentConfig) -> Self {
        Self::new(config.access_token.clone())
    }
}

impl AuthManager for AccessTokenAuthManager {
    fn get_auth_header(&self) -> Option<(String, String)> {
        self.access_token.as_ref().map(|token| {
            (
                "Authorization".to_string(),
                format!("Bearer {}", token.expose_secret()),
            )
        })
    }

    fn clone_box(&self) -> Box<dyn AuthManager> {
        Box::new(Self {
            access_token: self.access_token.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let manager = AccessTokenAuthManager::new(Some(SecretString::new("test-token".into())));

        let header = manager.get_auth_header();
        assert!(header.is_some());
        let (name, value) = header.unwrap();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer test-token");
    }

    #[test]
    fn test_absent_token_means_no_header() {
        let manager = AccessTokenAuthManager::new(None);
        assert!(manager.get_auth_header().is_none());
    }
}
