/// Configuration management
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudioConfig {
    /// SageMaker Studio domain, read from `STUDIO_DOMAIN_ID`
    /// (`sagemaker_studio::DOMAIN_ID_ENV`).
    /// Not validated here: an unset value reaches SageMaker as-is.
    #[serde(rename = "studio_domain_id", default)]
    pub domain_id: Option<String>,
}

impl StudioConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
