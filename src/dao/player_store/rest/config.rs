use super::error::{RestDaoError, RestResult};

/// Runtime configuration describing how to reach the hosted store.
#[derive(Debug, Clone)]
pub struct RestConfig {
    pub base_url: String,
    pub api_key: String,
}

impl RestConfig {
    /// Construct a configuration from an explicit base URL and access key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a configuration by reading the expected environment variables.
    ///
    /// Both values are mandatory; a missing one is a fatal startup error for
    /// the binary, never a runtime-recoverable condition.
    pub fn from_env() -> RestResult<Self> {
        let base_url =
            std::env::var("WHACK_STORE_URL").map_err(|_| RestDaoError::MissingEnvVar {
                var: "WHACK_STORE_URL",
            })?;
        let api_key =
            std::env::var("WHACK_STORE_KEY").map_err(|_| RestDaoError::MissingEnvVar {
                var: "WHACK_STORE_KEY",
            })?;

        Ok(Self::new(base_url, api_key))
    }
}
