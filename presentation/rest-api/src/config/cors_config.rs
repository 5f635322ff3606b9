use std::env;

use business::domain::relay::origin::OriginPolicy;

/// Loads the origin allow-list for the relay endpoint.
///
/// Environment variables:
/// - ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (e.g. "https://uni.qualtrics.com"). Absent or empty allows any
///   origin and responses carry a wildcard CORS header.
pub fn init_origin_policy() -> OriginPolicy {
    match env::var("ALLOWED_ORIGINS") {
        Ok(raw) if !raw.trim().is_empty() => {
            let policy = OriginPolicy::parse(&raw);
            if policy.is_wildcard() {
                tracing::warn!("ALLOWED_ORIGINS contains '*', allowing any origin");
            } else {
                tracing::info!("Parsed ALLOWED_ORIGINS: {}", raw);
            }
            policy
        }
        _ => {
            tracing::warn!("ALLOWED_ORIGINS not set, defaulting CORS to allow all origins");
            OriginPolicy::allow_all()
        }
    }
}
