use poem_openapi::{OpenApi, payload::Html};

use crate::api::tags::ApiTags;

/// Landing page confirming the relay is deployed.
///
/// When a deployment URL is configured it renders the full relay URL so
/// researchers can copy it into the Qualtrics embedded-data field that
/// points the survey at this backend.
pub struct StatusApi {
    deployment_url: Option<String>,
}

impl StatusApi {
    pub fn new(deployment_url: Option<String>) -> Self {
        Self { deployment_url }
    }

    fn relay_url(&self) -> Option<String> {
        self.deployment_url.as_ref().map(|url| {
            let trimmed = url.trim().trim_end_matches('/');
            if trimmed.starts_with("http") {
                format!("{}/lucid", trimmed)
            } else {
                format!("https://{}/lucid", trimmed)
            }
        })
    }
}

#[OpenApi]
impl StatusApi {
    /// Deployment status page
    ///
    /// Serves an HTML page with the relay URL to paste into the Qualtrics
    /// survey flow.
    #[oai(path = "/", method = "get", tag = "ApiTags::Status")]
    async fn home(&self) -> Html<String> {
        Html(render_page(self.relay_url()))
    }
}

fn render_page(relay_url: Option<String>) -> String {
    match relay_url {
        Some(relay_url) => format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Chat Relay Deployed</title>
<style>body {{ font-family: system-ui, sans-serif; max-width: 700px; margin: 40px auto; line-height: 1.6; }} code {{ background: #f0f0f0; padding: 0.2em 0.4em; border-radius: 3px; }} .url-box {{ background: #f3f3f3; padding: 10px 15px; border: 1px solid #ddd; border-radius: 4px; font-family: monospace; word-wrap: break-word; }}</style>
</head>
<body>
<h1>Chat Relay Successfully Deployed</h1>
<p>To use this backend with your Qualtrics survey, set the embedded data
field that holds the backend URL to the value below.</p>
<p><strong>Relay URL:</strong></p>
<div class="url-box">{relay_url}</div>
</body>
</html>"#
        ),
        None => r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>Chat Relay</title>
<style>body { font-family: system-ui, sans-serif; max-width: 700px; margin: 40px auto; line-height: 1.6; }</style>
</head>
<body>
<h1>Chat Relay Running</h1>
<p>This is the backend relay for the Qualtrics chat interface.</p>
<p><em>Set DEPLOYMENT_URL to render the full relay URL here; otherwise
append /lucid to this deployment's URL for the Qualtrics setup.</em></p>
</body>
</html>"#
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_append_endpoint_path_to_deployment_url() {
        let api = StatusApi::new(Some("https://relay.example.com".to_string()));
        assert_eq!(
            api.relay_url().unwrap(),
            "https://relay.example.com/lucid"
        );
    }

    #[test]
    fn should_prepend_scheme_when_missing() {
        let api = StatusApi::new(Some("relay.example.com".to_string()));
        assert_eq!(api.relay_url().unwrap(), "https://relay.example.com/lucid");
    }

    #[test]
    fn should_drop_trailing_slash_before_appending() {
        let api = StatusApi::new(Some("https://relay.example.com/".to_string()));
        assert_eq!(
            api.relay_url().unwrap(),
            "https://relay.example.com/lucid"
        );
    }

    #[test]
    fn should_render_relay_url_on_page() {
        let page = render_page(Some("https://relay.example.com/lucid".to_string()));
        assert!(page.contains("https://relay.example.com/lucid"));
    }

    #[test]
    fn should_render_fallback_page_without_deployment_url() {
        let page = render_page(None);
        assert!(page.contains("Chat Relay Running"));
    }
}
