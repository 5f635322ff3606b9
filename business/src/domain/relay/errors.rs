/// Relay errors for the chat forwarding domain.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("relay.origin_not_allowed")]
    OriginNotAllowed,
    #[error("relay.empty_messages")]
    EmptyMessages,
    #[error("relay.upstream_timeout")]
    UpstreamTimeout,
    #[error("relay.upstream_unreachable")]
    UpstreamUnreachable,
}
