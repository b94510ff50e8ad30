//! HTTP surface configuration

use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, validate_socket_addr, Validatable};

/// HTTP surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Address the server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Path prefix for the scenario routes
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Enable CORS middleware
    #[serde(default = "crate::domains::utils::default_true")]
    pub enable_cors: bool,

    /// Enable request tracing
    #[serde(default = "crate::domains::utils::default_true")]
    pub enable_tracing: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            api_prefix: default_api_prefix(),
            enable_cors: true,
            enable_tracing: true,
        }
    }
}

impl Validatable for HttpConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_socket_addr(&self.bind_address, "bind_address", self.domain_name())?;
        validate_required_string(&self.api_prefix, "api_prefix", self.domain_name())?;

        if !self.api_prefix.starts_with('/') {
            return Err(self.validation_error(format!(
                "api_prefix must start with '/', got '{}'",
                self.api_prefix
            )));
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "http"
    }
}

// Default value functions
fn default_bind_address() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}
