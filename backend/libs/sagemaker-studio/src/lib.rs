//! SageMaker Studio presigned domain URL issuance
//!
//! This library wraps the SageMaker `CreatePresignedDomainUrl` API behind a
//! small trait so callers can mint Studio console URLs without depending on
//! the SDK directly:
//! - `PresignedUrlIssuer` is the seam handlers are written against
//! - `StudioUrlClient` is the SDK-backed implementation
//! - Session and URL lifetimes are fixed by this crate, not by callers
//!
//! # Example
//!
//! ```no_run
//! use sagemaker_studio::{PresignedDomainUrlRequest, PresignedUrlIssuer, StudioUrlClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Uses AWS credentials from environment/execution role
//!     let client = StudioUrlClient::new().await;
//!
//!     let request = PresignedDomainUrlRequest::new(Some("d-123".to_string()), "alice");
//!     let url = client.create_presigned_domain_url(&request).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod errors;
pub mod models;

pub use client::{sdk_version, StudioUrlClient};
pub use errors::StudioUrlError;
pub use models::PresignedDomainUrlRequest;

use async_trait::async_trait;

/// Environment variable holding the Studio domain identifier
pub const DOMAIN_ID_ENV: &str = "STUDIO_DOMAIN_ID";

/// Profile used when the caller does not name one
pub const DEFAULT_PROFILE_NAME: &str = "default-user";

/// Lifetime of the Studio session opened through the URL (12 hours)
pub const SESSION_EXPIRATION_SECS: i32 = 43_200;

/// Window in which the presigned URL itself can be used (5 minutes)
pub const URL_EXPIRES_IN_SECS: i32 = 300;

/// Anything able to mint a presigned Studio domain URL.
///
/// Implementations return the `AuthorizedUrl` on success. Failures are
/// reported with the implementation's own error type so callers can hand
/// them on untouched.
#[async_trait]
pub trait PresignedUrlIssuer: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn create_presigned_domain_url(
        &self,
        request: &PresignedDomainUrlRequest,
    ) -> Result<String, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_constants() {
        assert_eq!(SESSION_EXPIRATION_SECS, 12 * 60 * 60);
        assert_eq!(URL_EXPIRES_IN_SECS, 5 * 60);
    }
}
