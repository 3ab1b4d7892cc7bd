use crate::{DEFAULT_PROFILE_NAME, SESSION_EXPIRATION_SECS, URL_EXPIRES_IN_SECS};

/// Parameters of a single `CreatePresignedDomainUrl` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedDomainUrlRequest {
    /// Left unset when the environment does not provide one; the service
    /// rejects the call in that case.
    pub domain_id: Option<String>,
    pub user_profile_name: String,
    pub session_expiration_secs: i32,
    pub expires_in_secs: i32,
}

impl PresignedDomainUrlRequest {
    /// Build a request with the fixed session and URL lifetimes
    pub fn new(domain_id: Option<String>, user_profile_name: impl Into<String>) -> Self {
        Self {
            domain_id,
            user_profile_name: user_profile_name.into(),
            session_expiration_secs: SESSION_EXPIRATION_SECS,
            expires_in_secs: URL_EXPIRES_IN_SECS,
        }
    }

    /// Build a request for an optional profile name.
    ///
    /// A missing or empty name falls back to [`DEFAULT_PROFILE_NAME`].
    pub fn for_profile(domain_id: Option<String>, profile_name: Option<&str>) -> Self {
        let profile = match profile_name {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_PROFILE_NAME,
        };
        Self::new(domain_id, profile)
    }
}
