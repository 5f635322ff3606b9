/// Outcome of checking a request origin against the allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Every origin is allowed; answer with a wildcard CORS header.
    Any,
    /// The request origin matched the allow-list; reflect it back.
    Allowed(String),
    /// The origin is not permitted. No CORS grant, no upstream call.
    Denied,
}

/// Immutable allow-list of HTTP origins permitted to call the relay.
///
/// A list containing `*` (or an empty configuration) permits any origin.
/// Matching is exact: origins carry scheme and host, so
/// `https://uni.qualtrics.com` does not match `http://uni.qualtrics.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginPolicy {
    origins: Vec<String>,
    wildcard: bool,
}

impl OriginPolicy {
    /// Policy that permits any origin.
    pub fn allow_all() -> Self {
        Self {
            origins: Vec::new(),
            wildcard: true,
        }
    }

    /// Builds a policy from explicit origin entries. A `*` entry turns the
    /// whole policy into a wildcard.
    pub fn from_origins(origins: impl IntoIterator<Item = String>) -> Self {
        let origins: Vec<String> = origins
            .into_iter()
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            return Self::allow_all();
        }

        Self {
            origins,
            wildcard: false,
        }
    }

    /// Parses a comma-separated allow-list. Empty input allows all.
    pub fn parse(raw: &str) -> Self {
        Self::from_origins(raw.split(',').map(str::to_string))
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Evaluates the `Origin` header of a request against the policy.
    pub fn evaluate(&self, origin: Option<&str>) -> OriginDecision {
        if self.wildcard {
            return OriginDecision::Any;
        }

        match origin {
            Some(origin) if self.origins.iter().any(|allowed| allowed == origin) => {
                OriginDecision::Allowed(origin.to_string())
            }
            _ => OriginDecision::Denied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_allow_any_origin_when_wildcard() {
        let policy = OriginPolicy::allow_all();

        assert_eq!(
            policy.evaluate(Some("https://evil.example")),
            OriginDecision::Any
        );
        assert_eq!(policy.evaluate(None), OriginDecision::Any);
    }

    #[test]
    fn should_parse_empty_input_as_wildcard() {
        assert!(OriginPolicy::parse("").is_wildcard());
        assert!(OriginPolicy::parse("  ").is_wildcard());
        assert!(OriginPolicy::parse(",,").is_wildcard());
    }

    #[test]
    fn should_treat_star_entry_as_wildcard() {
        let policy = OriginPolicy::parse("https://uni.qualtrics.com,*");
        assert!(policy.is_wildcard());
    }

    #[test]
    fn should_reflect_matching_origin() {
        let policy = OriginPolicy::parse("https://uni.qualtrics.com");

        assert_eq!(
            policy.evaluate(Some("https://uni.qualtrics.com")),
            OriginDecision::Allowed("https://uni.qualtrics.com".to_string())
        );
    }

    #[test]
    fn should_deny_unlisted_origin() {
        let policy = OriginPolicy::parse("https://uni.qualtrics.com");

        assert_eq!(
            policy.evaluate(Some("https://evil.example")),
            OriginDecision::Denied
        );
    }

    #[test]
    fn should_deny_missing_origin_when_not_wildcard() {
        let policy = OriginPolicy::parse("https://uni.qualtrics.com");
        assert_eq!(policy.evaluate(None), OriginDecision::Denied);
    }

    #[test]
    fn should_trim_whitespace_around_entries() {
        let policy = OriginPolicy::parse(" https://a.example , https://b.example ");

        assert_eq!(
            policy.evaluate(Some("https://b.example")),
            OriginDecision::Allowed("https://b.example".to_string())
        );
    }

    #[test]
    fn should_require_exact_match() {
        let policy = OriginPolicy::parse("https://uni.qualtrics.com");

        assert_eq!(
            policy.evaluate(Some("http://uni.qualtrics.com")),
            OriginDecision::Denied
        );
        assert_eq!(
            policy.evaluate(Some("https://uni.qualtrics.com/")),
            OriginDecision::Denied
        );
    }
}
