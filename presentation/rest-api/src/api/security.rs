use poem::http::HeaderValue;
use poem::http::header::{
    ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN, VARY,
};
use poem::{Request, Response};

use business::domain::relay::origin::OriginDecision;

/// Reads the `Origin` header of an inbound request.
pub fn request_origin(req: &Request) -> Option<String> {
    req.header("Origin").map(str::to_string)
}

/// Applies the CORS response headers for an evaluated origin grant.
///
/// A wildcard policy answers `*` without credentials. A matched origin is
/// reflected back with credentials enabled plus `Vary: Origin`, so caches
/// keep per-origin responses apart. Denied requests get no allow headers.
pub fn apply_cors(mut response: Response, decision: &OriginDecision) -> Response {
    match decision {
        OriginDecision::Any => {
            let headers = response.headers_mut();
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
            headers.insert(
                ACCESS_CONTROL_ALLOW_CREDENTIALS,
                HeaderValue::from_static("false"),
            );
        }
        OriginDecision::Allowed(origin) => {
            if let Ok(value) = HeaderValue::from_str(origin) {
                let headers = response.headers_mut();
                headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
                headers.insert(VARY, HeaderValue::from_static("Origin"));
                headers.insert(
                    ACCESS_CONTROL_ALLOW_CREDENTIALS,
                    HeaderValue::from_static("true"),
                );
            }
        }
        OriginDecision::Denied => {}
    }

    response
}
