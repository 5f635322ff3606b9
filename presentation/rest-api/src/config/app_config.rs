use std::env;

use business::domain::relay::origin::OriginPolicy;

use super::{cors_config, server_config::ServerConfig};

pub struct AppConfig {
    pub server: ServerConfig,
    pub origin_policy: OriginPolicy,
    /// Public URL of this deployment, used by the root status page to
    /// render the value for the Qualtrics embedded-data field.
    pub deployment_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            origin_policy: cors_config::init_origin_policy(),
            deployment_url: env::var("DEPLOYMENT_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        }
    }
}
