use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sagemaker::operation::create_presigned_domain_url::builders::CreatePresignedDomainUrlFluentBuilder;
use aws_sdk_sagemaker::Client as SageMakerClient;
use tracing::info;

use crate::errors::StudioUrlError;
use crate::models::PresignedDomainUrlRequest;
use crate::PresignedUrlIssuer;

/// Version of the SageMaker SDK crate this library is built against
pub fn sdk_version() -> &'static str {
    aws_sdk_sagemaker::meta::PKG_VERSION
}

/// SageMaker client issuing presigned Studio domain URLs
#[derive(Clone, Debug)]
pub struct StudioUrlClient {
    client: SageMakerClient,
}

impl StudioUrlClient {
    /// Create a client with the default AWS configuration
    ///
    /// Uses AWS credentials from:
    /// 1. Environment variables (AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN)
    /// 2. AWS credentials file (~/.aws/credentials)
    /// 3. The Lambda execution role or instance profile
    pub async fn new() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = SageMakerClient::new(&config);

        info!(
            region = ?config.region(),
            "Initialized SageMaker client"
        );

        Self { client }
    }

    /// Wrap an already configured SDK client
    pub fn from_client(client: SageMakerClient) -> Self {
        Self { client }
    }

    /// Build the SDK call for `request` without sending it
    pub fn presigned_domain_url(
        &self,
        request: &PresignedDomainUrlRequest,
    ) -> CreatePresignedDomainUrlFluentBuilder {
        self.client
            .create_presigned_domain_url()
            .set_domain_id(request.domain_id.clone())
            .user_profile_name(&request.user_profile_name)
            .session_expiration_duration_in_seconds(request.session_expiration_secs)
            .expires_in_seconds(request.expires_in_secs)
    }
}

#[async_trait]
impl PresignedUrlIssuer for StudioUrlClient {
    type Error = StudioUrlError;

    async fn create_presigned_domain_url(
        &self,
        request: &PresignedDomainUrlRequest,
    ) -> Result<String, StudioUrlError> {
        let response = self.presigned_domain_url(request).send().await?;

        response
            .authorized_url()
            .map(str::to_string)
            .ok_or(StudioUrlError::MissingAuthorizedUrl)
    }
}
