//! Redirect handler
//!
//! Exchanges a user profile name for a presigned SageMaker Studio URL and
//! answers with a `302` pointing at it.

use std::collections::HashMap;

use lambda_runtime::{Error, LambdaEvent};
use sagemaker_studio::{sdk_version, PresignedDomainUrlRequest, PresignedUrlIssuer};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::StudioConfig;

/// Invocation payload. Fields other than `profile_name` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RedirectRequest {
    #[serde(default)]
    pub profile_name: Option<String>,
}

/// Proxy-style response understood by API Gateway and function URLs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
}

impl RedirectResponse {
    /// `302 Found` to `location`
    pub fn found(location: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Location".to_string(), location.into());
        Self {
            status_code: 302,
            headers,
        }
    }

    pub fn location(&self) -> Option<&str> {
        self.headers.get("Location").map(String::as_str)
    }
}

/// Mint a Studio URL for the requested profile and redirect to it.
///
/// Errors from `issuer` are returned as they are.
pub async fn handle<I>(
    issuer: &I,
    config: &StudioConfig,
    request: RedirectRequest,
) -> Result<RedirectResponse, I::Error>
where
    I: PresignedUrlIssuer,
{
    debug!(sdk_version = sdk_version(), "aws-sdk-sagemaker");

    let presign = PresignedDomainUrlRequest::for_profile(
        config.domain_id.clone(),
        request.profile_name.as_deref(),
    );
    let url = issuer.create_presigned_domain_url(&presign).await?;

    Ok(RedirectResponse::found(url))
}

/// Lambda entry point; failures go to the runtime's invocation-error report.
pub async fn function_handler<I>(
    issuer: &I,
    config: &StudioConfig,
    event: LambdaEvent<RedirectRequest>,
) -> Result<RedirectResponse, Error>
where
    I: PresignedUrlIssuer,
{
    Ok(handle(issuer, config, event.payload).await?)
}
