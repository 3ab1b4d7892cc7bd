use aws_sdk_sagemaker::error::SdkError;
use aws_sdk_sagemaker::operation::create_presigned_domain_url::CreatePresignedDomainUrlError;
use thiserror::Error;

/// Failures of the SDK-backed issuer
#[derive(Error, Debug)]
pub enum StudioUrlError {
    /// Anything the SDK reports: validation, unknown domain or profile,
    /// access denial, throttling, transport. Shown exactly as the SDK shows it.
    #[error(transparent)]
    Sdk(#[from] SdkError<CreatePresignedDomainUrlError>),

    #[error("CreatePresignedDomainUrl response has no AuthorizedUrl")]
    MissingAuthorizedUrl,
}
